//! Hero section: avatar, name, headline, location and social buttons.

use dioxus::prelude::*;

use crate::content::{icon_url, PROFILE};

const BUTTON_CLASS: &str = "px-4 flex gap-1 py-2 rounded border border-slate-400 dark:border-slate-600 hover:border-cyan-400 hover:text-cyan-400 transition text-sm text-slate-700 dark:text-slate-300";

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "max-w-6xl mx-auto px-4 py-16 md:py-24 pt-20",
            div { class: "flex flex-col md:flex-row items-center gap-8 md:gap-12",
                div { class: "flex-shrink-0 w-[400px] flex justify-center",
                    div { class: "w-70 h-70 md:w-70 md:h-70 rounded-full border-4 border-cyan-400 overflow-hidden",
                        img {
                            class: "w-full h-full object-cover",
                            src: PROFILE.avatar,
                            alt: PROFILE.name,
                            width: "260",
                            height: "260",
                        }
                    }
                }
                div { class: "flex-1 text-center md:text-left",
                    h1 { class: "text-3xl md:text-4xl font-bold mb-2 text-slate-900 dark:text-white",
                        "Hey, I'm Yousef. "
                        span { class: "text-cyan-500 dark:text-cyan-400", "{PROFILE.headline}" }
                    }
                    p { class: "text-slate-600 dark:text-slate-400 mb-6", "{PROFILE.tagline}" }
                    div { class: "flex gap-4",
                        button { class: BUTTON_CLASS, "📍 {PROFILE.location}" }
                        a {
                            class: BUTTON_CLASS,
                            href: PROFILE.linkedin_url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            img { src: icon_url("linkedin"), width: "20", height: "20", alt: "LinkedIn" }
                            " LinkedIn"
                        }
                        a {
                            class: BUTTON_CLASS,
                            href: PROFILE.github_url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            img { src: icon_url("github-dark"), width: "20", height: "20", alt: "GitHub" }
                            " GitHub"
                        }
                    }
                }
            }
        }
    }
}
