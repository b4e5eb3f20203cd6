//! Fixed top navigation bar.

use dioxus::prelude::*;

use crate::content::PROFILE;

use super::theme::ThemeToggle;

const LINK_CLASS: &str =
    "text-slate-700 dark:text-slate-300 hover:text-cyan-400 dark:hover:text-cyan-400 transition";

/// Navigation bar: brand, anchor links to the page sections, theme toggle.
#[component]
pub fn Nav() -> Element {
    rsx! {
        nav { class: "fixed top-0 left-0 right-0 z-50 border-b border-slate-300 dark:border-slate-800 bg-white/80 dark:bg-slate-950/80 backdrop-blur-md transition-colors duration-500",
            div { class: "max-w-6xl mx-auto px-4 py-4 flex items-center justify-between",
                span { class: "text-sm font-semibold tracking-wide text-slate-900 dark:text-slate-300",
                    "{PROFILE.brand}"
                }
                div { class: "flex gap-8 text-sm items-center",
                    a { class: LINK_CLASS, href: "#projects", "Projects" }
                    a { class: LINK_CLASS, href: "#contact", "Contact" }
                    ThemeToggle {}
                }
            }
        }
    }
}
