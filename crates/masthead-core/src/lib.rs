//! masthead-core - Core library for masthead
//!
//! Platform-free behavior of the page header: theme resolution and
//! persistence, the mobile menu state machine, outside-click dismissal,
//! search dispatch and configuration loading.

pub mod config;
pub mod dismiss;
pub mod error;
pub mod menu;
pub mod preferences;
pub mod search;
pub mod theme;

pub use config::{load_and_validate, load_config, unknown_fields, validate};
pub use dismiss::{ClickSource, OutsideClick, Region};
pub use error::{ConfigWarning, CoreError};
pub use menu::{MenuEvent, MenuState};
pub use preferences::FileStore;
pub use search::submit_search;
pub use theme::{
    ColorSchemeHint, FixedScheme, MemoryStore, MemorySurface, PersistPolicy, PreferenceStore,
    ThemeController, ThemeSource, ThemeSurface, THEME_KEY,
};

pub use masthead_types::{HeaderConfig, Logo, NavLink, Theme};
