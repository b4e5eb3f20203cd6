//! Contact section: channels and mailto call-to-action.

use dioxus::prelude::*;

use crate::content::PROFILE;

const CHANNEL_CLASS: &str = "text-slate-700 dark:text-slate-300 hover:text-cyan-400 transition";

#[component]
pub fn Contact() -> Element {
    let mailto = format!("mailto:{}", PROFILE.email);

    rsx! {
        section { id: "contact", class: "max-w-6xl mx-auto px-4 py-16",
            h2 { class: "text-xl font-bold tracking-widest text-slate-700 dark:text-slate-300 mb-12",
                "CONTACT"
            }
            div { class: "border border-slate-300 dark:border-slate-700 rounded-lg p-8 max-w-2xl bg-slate-50 dark:bg-slate-900/50",
                p { class: "text-slate-600 dark:text-slate-400 mb-6",
                    "Have a project in mind or just want to chat? Feel free to reach out to me through any of these channels."
                }
                div { class: "space-y-4",
                    div { class: "flex items-center gap-4",
                        span { class: "text-cyan-500 dark:text-cyan-400 font-bold", "Email:" }
                        a { class: CHANNEL_CLASS, href: "{mailto}", "{PROFILE.email}" }
                    }
                    div { class: "flex items-center gap-4",
                        span { class: "text-cyan-500 dark:text-cyan-400 font-bold", "LinkedIn:" }
                        a {
                            class: CHANNEL_CLASS,
                            href: PROFILE.linkedin_url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{PROFILE.linkedin_label}"
                        }
                    }
                    div { class: "flex items-center gap-4",
                        span { class: "text-cyan-500 dark:text-cyan-400 font-bold", "GitHub:" }
                        a {
                            class: CHANNEL_CLASS,
                            href: PROFILE.github_url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{PROFILE.github_label}"
                        }
                    }
                }
                div { class: "mt-8 pt-6 border-t border-slate-300 dark:border-slate-700",
                    a {
                        class: "inline-block px-6 py-3 bg-cyan-400 hover:bg-cyan-300 text-slate-950 font-bold rounded transition",
                        href: "{mailto}",
                        "Send Me an Email"
                    }
                }
            }
        }
    }
}
