//! Dioxus wiring for the theme controller: context provider, hook, and the
//! toggle button shown in the navigation bar.

use dioxus::prelude::*;

use crate::theme::ThemeController;

#[cfg(target_arch = "wasm32")]
type AppController =
    ThemeController<crate::theme::web::LocalStorageStore, crate::theme::web::DocumentSurface>;

// Host builds (tests, tooling) get the in-memory store and a no-op surface.
#[cfg(not(target_arch = "wasm32"))]
type AppController = ThemeController<crate::theme::MemoryStore, crate::theme::NullSurface>;

fn new_controller() -> AppController {
    #[cfg(target_arch = "wasm32")]
    {
        ThemeController::new(
            crate::theme::web::LocalStorageStore::new(),
            crate::theme::web::DocumentSurface::new(),
        )
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        ThemeController::new(crate::theme::MemoryStore::new(), crate::theme::NullSurface)
    }
}

/// Shared handle to the single per-page theme controller. One writer (the
/// toggle), many readers; cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct ThemeHandle {
    controller: Signal<AppController>,
}

impl ThemeHandle {
    /// True once startup reconciliation has run and the document marker
    /// reflects the resolved theme. Render nothing theme-dependent before
    /// this flips.
    pub fn is_ready(&self) -> bool {
        self.controller.read().is_ready()
    }

    pub fn is_dark(&self) -> bool {
        self.controller.read().is_dark()
    }

    pub fn toggle(&mut self) {
        self.controller.write().toggle();
    }
}

/// Installs the theme context at the app root and kicks off reconciliation
/// on mount. Call exactly once.
pub fn use_theme_provider() -> ThemeHandle {
    let mut controller = use_signal(new_controller);

    // Runs client-side after the first (empty) render, before any
    // theme-dependent content is shown.
    use_effect(move || {
        controller.write().reconcile();
    });

    use_context_provider(|| ThemeHandle { controller })
}

/// Reads the theme context installed by [`use_theme_provider`].
pub fn use_theme() -> ThemeHandle {
    use_context()
}

/// Sun/moon toggle button for the navigation bar.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let icon = if theme.is_dark() { "☀️" } else { "🌙" };

    rsx! {
        button {
            class: "px-3 py-1 rounded border border-slate-400 dark:border-slate-600 hover:border-cyan-400 hover:text-cyan-400 transition text-sm text-slate-700 dark:text-slate-300",
            aria_label: "Toggle dark mode",
            onclick: move |_| theme.toggle(),
            "{icon}"
        }
    }
}
