//! Theme state: resolve once at mount, flip on toggle, persist and mirror
//!
//! Resolution order at mount:
//! 1. persisted `theme` key (`"light"` / `"dark"`)
//! 2. environment dark-mode preference
//! 3. [`Theme::Light`]

mod ports;

pub use ports::{
    ColorSchemeHint, FixedScheme, MemoryStore, MemorySurface, PreferenceStore, ThemeSurface,
};

use crate::error::CoreError;
use masthead_types::Theme;
use std::fmt;
use tracing::{debug, info, warn};

/// Storage key holding the persisted theme
pub const THEME_KEY: &str = "theme";

/// Where the mount-time theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    Stored,
    Environment,
    Fallback,
}

impl fmt::Display for ThemeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ThemeSource::Stored => "stored",
            ThemeSource::Environment => "environment",
            ThemeSource::Fallback => "fallback",
        })
    }
}

/// When the resolved theme is written back to storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersistPolicy {
    /// Storage is only written by an explicit toggle or set
    #[default]
    OnToggle,
    /// Mount also persists a theme that did not come from storage
    OnResolve,
}

/// Owns the active theme and its three collaborators
#[derive(Debug)]
pub struct ThemeController<S, P, D> {
    store: S,
    scheme: P,
    surface: D,
    policy: PersistPolicy,
    current: Theme,
    source: Option<ThemeSource>,
}

impl<S, P, D> ThemeController<S, P, D>
where
    S: PreferenceStore,
    P: ColorSchemeHint,
    D: ThemeSurface,
{
    pub fn new(store: S, scheme: P, surface: D) -> Self {
        Self {
            store,
            scheme,
            surface,
            policy: PersistPolicy::default(),
            current: Theme::default(),
            source: None,
        }
    }

    pub fn with_policy(mut self, policy: PersistPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Work out the mount-time theme without touching any state.
    ///
    /// A persisted value that is not a valid theme is ignored.
    pub fn resolve(&self) -> (Theme, ThemeSource) {
        if let Some(saved) = self.store.get(THEME_KEY) {
            match saved.parse::<Theme>() {
                Ok(theme) => return (theme, ThemeSource::Stored),
                Err(e) if saved.is_empty() => debug!("Empty persisted theme: {}", e),
                Err(e) => warn!("Ignoring persisted theme: {}", e),
            }
        }

        match self.scheme.prefers_dark() {
            Some(true) => (Theme::Dark, ThemeSource::Environment),
            Some(false) => (Theme::Light, ThemeSource::Environment),
            None => (Theme::Light, ThemeSource::Fallback),
        }
    }

    /// Mount initialization. Only the first call resolves and applies; later
    /// calls return the current theme unchanged.
    pub fn init(&mut self) -> Result<Theme, CoreError> {
        if self.source.is_some() {
            return Ok(self.current);
        }

        let (theme, source) = self.resolve();
        debug!(theme = %theme, source = %source, "Resolved initial theme");

        self.current = theme;
        self.source = Some(source);
        self.surface.apply(theme);

        if self.policy == PersistPolicy::OnResolve && source != ThemeSource::Stored {
            self.persist()?;
        }

        Ok(theme)
    }

    /// Active theme (`Light` before [`init`](Self::init))
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Where the mount-time theme came from, `None` before init
    pub fn source(&self) -> Option<ThemeSource> {
        self.source
    }

    /// Flip the theme, apply it, then persist it.
    ///
    /// On a storage failure the new theme stays active and applied; only the
    /// write is lost.
    pub fn toggle(&mut self) -> Result<Theme, CoreError> {
        let next = self.current.toggled();
        self.set(next)?;
        Ok(next)
    }

    /// Make `theme` active, apply it and persist it
    pub fn set(&mut self, theme: Theme) -> Result<(), CoreError> {
        self.current = theme;
        self.surface.apply(theme);
        self.persist()?;
        info!(theme = %theme, "Theme changed");
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    fn persist(&self) -> Result<(), CoreError> {
        self.store.set(THEME_KEY, self.current.as_str())
    }
}
