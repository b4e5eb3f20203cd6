//! Dioxus application entry point.

use dioxus::prelude::*;

pub mod components;

use components::{use_theme_provider, Contact, Hero, Layout, Projects, TechStackGrid};

/// Root app component.
///
/// Nothing renders until the theme controller has reconciled with the saved
/// preference and marked the document, so the first visible frame is already
/// in the right theme.
#[component]
pub fn App() -> Element {
    let theme = use_theme_provider();

    if !theme.is_ready() {
        return rsx! {};
    }

    rsx! {
        Layout {
            Hero {}
            TechStackGrid {}
            Projects {}
            Contact {}
        }
    }
}
