//! Layout component wrapping the page with head assets, nav, and footer.

use dioxus::prelude::*;

use crate::content::PROFILE;

use super::nav::Nav;

/// Tailwind runtime config: dark mode keys off the `dark` class the theme
/// controller toggles on the document root.
const TAILWIND_CONFIG: &str = "tailwind.config = { darkMode: 'class' };";

/// CSS beyond Tailwind utilities: the animated gradient backdrop.
const CUSTOM_STYLES: &str = r#"
.animate-gradient {
    background: linear-gradient(-45deg, #f8fafc, #e0f2fe, #f1f5f9, #ecfeff);
    background-size: 400% 400%;
    animation: gradient-shift 18s ease infinite;
}
.dark .animate-gradient {
    background: linear-gradient(-45deg, #020617, #0f172a, #164e63, #0f172a);
    background-size: 400% 400%;
    animation: gradient-shift 18s ease infinite;
}
@keyframes gradient-shift {
    0% { background-position: 0% 50%; }
    50% { background-position: 100% 50%; }
    100% { background-position: 0% 50%; }
}
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page content
    pub children: Element,
}

/// Single-page layout: head assets, fixed nav, content sections, footer.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let title = format!("{} - {}", PROFILE.name, PROFILE.headline);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{title}" }
        document::Script { src: "https://cdn.tailwindcss.com" }
        document::Script { {TAILWIND_CONFIG} }
        document::Style { {CUSTOM_STYLES} }

        div { class: "min-h-screen animate-gradient text-slate-900 dark:text-white transition-colors duration-500",
            Nav {}
            main {
                {props.children}
            }
            footer { class: "border-t border-slate-300 dark:border-slate-800 mt-20 bg-white dark:bg-slate-950 transition-colors duration-500",
                div { class: "max-w-6xl mx-auto px-4 py-12 text-center text-slate-600 dark:text-slate-400 text-sm",
                    p { "© 2025 {PROFILE.name}. All rights reserved." }
                }
            }
        }
    }
}
