//! Single-page personal portfolio.
//!
//! A static, client-rendered Dioxus site: hero/bio, tech-stack gallery,
//! project showcase cards, and a contact section, with a light/dark theme
//! preference persisted in the browser.
//!
//! The only stateful piece is the theme controller in [`theme`]; everything
//! else is declarative content from [`content`] rendered by [`app`].

#![deny(unsafe_code)]
#![deny(unused_must_use)]

pub mod app;
pub mod content;
pub mod theme;
