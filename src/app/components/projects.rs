//! Project showcase cards.

use dioxus::prelude::*;

use crate::content::PROJECTS;

const CARD_BUTTON_CLASS: &str = "px-4 py-2 rounded bg-slate-200 dark:bg-slate-800 hover:bg-slate-300 dark:hover:bg-slate-700 transition text-sm border border-slate-300 dark:border-slate-700 text-slate-900 dark:text-slate-300";

#[component]
pub fn Projects() -> Element {
    rsx! {
        section { id: "projects", class: "max-w-6xl mx-auto px-4 py-16",
            h2 { class: "text-xl font-bold tracking-widest text-slate-700 dark:text-slate-300 mb-12",
                "PROJECTS"
            }
            div { class: "space-y-6",
                for project in PROJECTS {
                    div {
                        key: "{project.name}",
                        class: "border border-slate-300 dark:border-slate-700 rounded-lg p-6 hover:border-cyan-400 transition bg-slate-50 dark:bg-slate-900/50",
                        div { class: "flex items-center justify-between mb-4",
                            h3 { class: "text-lg font-bold text-slate-900 dark:text-white", "{project.name}" }
                            span { class: "text-2xl", "{project.emoji}" }
                        }
                        p { class: "text-slate-600 dark:text-slate-400 text-sm mb-4", "{project.description}" }
                        div { class: "flex flex-wrap gap-2 mb-4",
                            for badge in project.badges {
                                span {
                                    key: "{badge}",
                                    class: "px-3 py-1 rounded-full bg-slate-200 dark:bg-slate-800 border border-slate-300 dark:border-slate-700 text-xs text-slate-700 dark:text-slate-300",
                                    "{badge}"
                                }
                            }
                        }
                        div { class: "flex gap-3",
                            a {
                                class: CARD_BUTTON_CLASS,
                                href: project.live_demo,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "🔗 Live Demo"
                            }
                            a {
                                class: CARD_BUTTON_CLASS,
                                href: project.source_code,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "💾 Source Code"
                            }
                        }
                    }
                }
            }
        }
    }
}
