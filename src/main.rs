//! Portfolio web app launcher.

use portfolio::app::App;

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("starting portfolio");

    dioxus::launch(App);
}
