//! Browser-backed store and surface (wasm32 only).

use crate::theme::controller::ThemeSurface;
use crate::theme::store::{self, PreferenceStore, StoreError, STORAGE_KEY};

/// Preference store backed by `window.localStorage`.
///
/// Storage can be unavailable (private browsing, disabled storage) or hold an
/// unparsable value; both degrade to "no stored value" and the page keeps
/// working with in-memory state for the session.
#[derive(Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn read(&self) -> Result<Option<bool>, StoreError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)?;
        let raw = storage
            .get_item(STORAGE_KEY)
            .map_err(|_| StoreError::Unavailable)?;
        match raw {
            Some(raw) => Ok(Some(store::decode(&raw)?)),
            None => Ok(None),
        }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self) -> Option<bool> {
        match self.read() {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(%err, "could not read saved theme, falling back to default");
                None
            }
        }
    }

    fn set(&mut self, value: bool) {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            tracing::debug!("localStorage unavailable, theme preference not persisted");
            return;
        };
        if storage.set_item(STORAGE_KEY, &store::encode(value)).is_err() {
            tracing::debug!("theme preference write failed, continuing with in-memory state");
        }
    }
}

/// Applies the theme by toggling the `dark` class on the document root,
/// which the stylesheet's class-strategy dark mode keys off.
#[derive(Debug, Default)]
pub struct DocumentSurface;

impl DocumentSurface {
    pub fn new() -> Self {
        Self
    }
}

impl ThemeSurface for DocumentSurface {
    fn apply(&mut self, dark: bool) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        // class_list.toggle with force is idempotent either way.
        let _ = root.class_list().toggle_with_force("dark", dark);
    }
}
