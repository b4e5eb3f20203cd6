//! Tech-stack icon grid.

use dioxus::prelude::*;

use crate::content::{icon_url, TECH_STACK};

#[component]
pub fn TechStackGrid() -> Element {
    rsx! {
        section { class: "max-w-6xl mx-auto px-4 py-16",
            h2 { class: "text-center text-xl font-bold tracking-widest text-slate-700 dark:text-slate-300 mb-12",
                "TECH STACK"
            }
            div { class: "grid grid-cols-3 md:grid-cols-5 gap-4 mb-4",
                for tech in TECH_STACK {
                    div {
                        key: "{tech.name}",
                        class: "aspect-square rounded border border-slate-300 dark:border-slate-700 hover:border-cyan-400 flex flex-col gap-2 items-center justify-center text-sm font-medium hover:bg-slate-100 dark:hover:bg-slate-900 transition cursor-pointer text-slate-900 dark:text-slate-300",
                        img { src: icon_url(tech.icon), width: "100", height: "50", alt: tech.name }
                        span { class: "text-center px-2", "{tech.name}" }
                    }
                }
            }
        }
    }
}
