//! UI components for the single-page portfolio.

pub mod contact;
pub mod hero;
pub mod layout;
pub mod nav;
pub mod projects;
pub mod tech_stack;
pub mod theme;

pub use contact::Contact;
pub use hero::Hero;
pub use layout::Layout;
pub use nav::Nav;
pub use projects::Projects;
pub use tech_stack::TechStackGrid;
pub use theme::{use_theme, use_theme_provider, ThemeToggle};
