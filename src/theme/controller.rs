//! Theme controller state machine.
//!
//! Owns the in-memory dark-mode flag and keeps it consistent with both the
//! persisted preference and the document marker. Lifecycle:
//! `Uninitialized → Reconciling → Ready`. Callers must not render
//! theme-dependent content until [`ThemeController::is_ready`] returns true,
//! otherwise the first paint can show a theme that immediately flips.

use crate::theme::store::PreferenceStore;

/// The visual surface the resolved theme is applied to. In the browser this
/// is the `dark` class on `document.documentElement`; tests inject a
/// recording fake.
pub trait ThemeSurface {
    /// Sets or clears the dark-mode marker. Must be idempotent.
    fn apply(&mut self, dark: bool);
}

/// Surface that discards applies. Used on non-browser targets where there is
/// no document to mark.
#[derive(Debug, Default)]
pub struct NullSurface;

impl ThemeSurface for NullSurface {
    fn apply(&mut self, _dark: bool) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Uninitialized,
    Reconciling,
    Ready,
}

/// Resolves, applies, and persists the light/dark preference.
///
/// Exactly one instance exists per page load. All operations are synchronous
/// and run to completion on the UI thread.
pub struct ThemeController<S, D> {
    store: S,
    surface: D,
    is_dark: bool,
    phase: Phase,
}

impl<S: PreferenceStore, D: ThemeSurface> ThemeController<S, D> {
    /// Dark is the default for first-time visitors.
    pub const DEFAULT_DARK: bool = true;

    pub fn new(store: S, surface: D) -> Self {
        Self {
            store,
            surface,
            is_dark: Self::DEFAULT_DARK,
            phase: Phase::Uninitialized,
        }
    }

    /// Startup reconciliation: resolve the effective theme from the store (or
    /// the default), apply it to the surface, and become ready.
    ///
    /// On a first visit the default is written back so it becomes the durable
    /// preference. A stored value is honored without a write-back.
    pub fn reconcile(&mut self) {
        if self.phase == Phase::Ready {
            return;
        }
        self.phase = Phase::Reconciling;

        match self.store.get() {
            Some(saved) => {
                self.is_dark = saved;
                tracing::debug!(dark = saved, "restored saved theme preference");
            }
            None => {
                self.is_dark = Self::DEFAULT_DARK;
                self.store.set(Self::DEFAULT_DARK);
                tracing::debug!(dark = Self::DEFAULT_DARK, "no saved preference, persisting default");
            }
        }

        self.surface.apply(self.is_dark);
        self.phase = Phase::Ready;
    }

    /// Flips the theme: in-memory state, document marker, and persisted
    /// preference all change before control returns to the caller.
    ///
    /// Ignored until reconciliation has completed.
    pub fn toggle(&mut self) {
        if self.phase != Phase::Ready {
            tracing::warn!("toggle before reconciliation completed, ignoring");
            return;
        }
        let next = !self.is_dark;
        self.is_dark = next;
        self.surface.apply(next);
        self.store.set(next);
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::store::MemoryStore;

    /// Records every apply so tests can check both the final marker and that
    /// no intermediate wrong-theme frame was produced.
    #[derive(Debug, Default)]
    struct RecordingSurface {
        marker: Option<bool>,
        applies: Vec<bool>,
    }

    impl ThemeSurface for RecordingSurface {
        fn apply(&mut self, dark: bool) {
            self.marker = Some(dark);
            self.applies.push(dark);
        }
    }

    /// Store wrapper counting writes, to verify the no-write-back property.
    #[derive(Debug, Default)]
    struct CountingStore {
        inner: MemoryStore,
        writes: usize,
    }

    impl PreferenceStore for CountingStore {
        fn get(&self) -> Option<bool> {
            self.inner.get()
        }
        fn set(&mut self, value: bool) {
            self.writes += 1;
            self.inner.set(value);
        }
    }

    fn ready_controller(
        store: MemoryStore,
    ) -> ThemeController<MemoryStore, RecordingSurface> {
        let mut ctl = ThemeController::new(store, RecordingSurface::default());
        ctl.reconcile();
        ctl
    }

    #[test]
    fn test_first_visit_defaults_dark_and_persists() {
        let mut ctl = ThemeController::new(MemoryStore::new(), RecordingSurface::default());
        ctl.reconcile();

        assert!(ctl.is_ready());
        assert!(ctl.is_dark());
        assert_eq!(ctl.store.get(), Some(true));
        assert_eq!(ctl.surface.marker, Some(true));
    }

    #[test]
    fn test_saved_light_preference_restored_without_write_back() {
        let store = CountingStore {
            inner: MemoryStore::with_saved(false),
            writes: 0,
        };
        let mut ctl = ThemeController::new(store, RecordingSurface::default());
        ctl.reconcile();

        assert!(!ctl.is_dark());
        assert_eq!(ctl.surface.marker, Some(false));
        assert_eq!(ctl.store.writes, 0);
        assert_eq!(ctl.store.get(), Some(false));
    }

    #[test]
    fn test_saved_dark_preference_restored() {
        let ctl = ready_controller(MemoryStore::with_saved(true));
        assert!(ctl.is_dark());
        assert_eq!(ctl.surface.marker, Some(true));
    }

    #[test]
    fn test_toggle_updates_state_marker_and_store() {
        let mut ctl = ready_controller(MemoryStore::with_saved(true));
        ctl.toggle();

        assert!(!ctl.is_dark());
        assert_eq!(ctl.surface.marker, Some(false));
        assert_eq!(ctl.store.get(), Some(false));
    }

    #[test]
    fn test_double_toggle_is_a_round_trip() {
        let mut ctl = ready_controller(MemoryStore::with_saved(false));
        let before = (ctl.is_dark(), ctl.store.get(), ctl.surface.marker);

        ctl.toggle();
        ctl.toggle();

        assert_eq!((ctl.is_dark(), ctl.store.get(), ctl.surface.marker), before);
    }

    #[test]
    fn test_toggle_before_ready_is_ignored() {
        let mut ctl = ThemeController::new(MemoryStore::new(), RecordingSurface::default());
        ctl.toggle();

        assert!(!ctl.is_ready());
        assert_eq!(ctl.store.get(), None);
        assert_eq!(ctl.surface.marker, None, "no marker may be applied before reconciliation");
    }

    #[test]
    fn test_no_wrong_theme_frame_during_startup() {
        let mut ctl = ThemeController::new(MemoryStore::with_saved(false), RecordingSurface::default());
        ctl.reconcile();

        // Exactly one apply, carrying the resolved value. A dark frame
        // followed by a light one would be the flash this gate exists for.
        assert_eq!(ctl.surface.applies, vec![false]);
    }

    #[test]
    fn test_reconcile_is_idempotent_once_ready() {
        let mut ctl = ready_controller(MemoryStore::with_saved(false));
        ctl.reconcile();

        assert!(!ctl.is_dark());
        assert_eq!(ctl.surface.applies, vec![false]);
    }

    #[test]
    fn test_apply_idempotent_on_surface() {
        let mut surface = RecordingSurface::default();
        surface.apply(true);
        let after_once = surface.marker;
        surface.apply(true);
        assert_eq!(surface.marker, after_once);
    }
}
