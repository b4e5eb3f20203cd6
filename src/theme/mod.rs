//! Light/dark theme preference: persistence boundary and controller.
//!
//! The controller is pure and host-testable; everything that touches the
//! browser (localStorage, the document root) lives behind the
//! [`store::PreferenceStore`] and [`controller::ThemeSurface`] traits, with
//! the wasm implementations in [`web`].

pub mod controller;
pub mod store;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use controller::{NullSurface, ThemeController, ThemeSurface};
pub use store::{MemoryStore, PreferenceStore};
