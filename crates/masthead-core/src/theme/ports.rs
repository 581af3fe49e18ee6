//! Platform seams used by [`ThemeController`](super::ThemeController)
//!
//! The browser implementations live in masthead-web; the in-memory ones here
//! back the CLI and the tests.

use crate::error::CoreError;
use masthead_types::Theme;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Persistent key-value storage (localStorage in the browser)
pub trait PreferenceStore {
    /// Returns `None` when the key is absent or the storage cannot be read.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
}

/// The environment's "prefers dark color scheme" signal
pub trait ColorSchemeHint {
    /// `None` when the platform offers no such signal.
    fn prefers_dark(&self) -> Option<bool>;
}

/// Where the active theme is mirrored (the `data-theme` attribute on `<html>`)
pub trait ThemeSurface {
    fn apply(&self, theme: Theme);
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        (**self).set(key, value)
    }
}

impl<T: ColorSchemeHint + ?Sized> ColorSchemeHint for &T {
    fn prefers_dark(&self) -> Option<bool> {
        (**self).prefers_dark()
    }
}

impl<T: ThemeSurface + ?Sized> ThemeSurface for &T {
    fn apply(&self, theme: Theme) {
        (**self).apply(theme)
    }
}

/// Volatile store, also used to simulate broken storage in tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    read_only: bool,
    writes: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .lock()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Store whose writes always fail
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        *self.writes.lock()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        if self.read_only {
            return Err(CoreError::StorageWrite {
                key: key.to_string(),
                message: "store is read-only".to_string(),
            });
        }
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        *self.writes.lock() += 1;
        Ok(())
    }
}

/// Color-scheme hint with a fixed answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedScheme(pub Option<bool>);

impl FixedScheme {
    pub fn dark() -> Self {
        Self(Some(true))
    }

    pub fn light() -> Self {
        Self(Some(false))
    }

    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl ColorSchemeHint for FixedScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

/// Records the last applied theme and how many times the surface was touched
#[derive(Debug, Default)]
pub struct MemorySurface {
    last: Mutex<Option<Theme>>,
    applies: Mutex<usize>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Theme> {
        *self.last.lock()
    }

    pub fn apply_count(&self) -> usize {
        *self.applies.lock()
    }
}

impl ThemeSurface for MemorySurface {
    fn apply(&self, theme: Theme) {
        *self.last.lock() = Some(theme);
        *self.applies.lock() += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_only_store_rejects_writes() {
        let store = MemoryStore::read_only();
        assert!(store.set("theme", "dark").is_err());
        assert_eq!(store.get("theme"), None);
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_memory_surface_tracks_last_theme() {
        let surface = MemorySurface::new();
        assert_eq!(surface.current(), None);

        surface.apply(Theme::Dark);
        surface.apply(Theme::Light);

        assert_eq!(surface.current(), Some(Theme::Light));
        assert_eq!(surface.apply_count(), 2);
    }

    #[test]
    fn test_memory_surface_keeps_only_last_theme() {
        let surface = MemorySurface::new();
        for i in 0..10_000 {
            surface.apply(if i % 2 == 0 { Theme::Dark } else { Theme::Light });
        }

        assert_eq!(surface.current(), Some(Theme::Light));
        assert_eq!(surface.apply_count(), 10_000);
    }
}
