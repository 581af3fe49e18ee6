//! File-backed preference storage for native hosts
//!
//! Stores preferences as a JSON object in `<dir>/masthead-preferences.json`,
//! the native stand-in for localStorage. Only string values are visible
//! through [`PreferenceStore`]; entries of other types written by other tools
//! are preserved on save.

use crate::error::CoreError;
use crate::theme::PreferenceStore;
use serde_json::{Map, Value};
use std::path::PathBuf;
use tracing::debug;

const FILE_NAME: &str = "masthead-preferences.json";

/// [`PreferenceStore`] persisted to a JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<config_dir>/masthead`, if the platform has a config directory
    pub fn default_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("masthead"))
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(FILE_NAME)
    }

    /// Load all entries. Returns an empty map on any I/O error or when the
    /// file is not a JSON object (graceful degradation).
    fn load(&self) -> Map<String, Value> {
        let path = self.path();
        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(Value::Object(entries)) => entries,
                Ok(_) => {
                    debug!("Ignoring non-object preferences file {}", path.display());
                    Map::new()
                }
                Err(e) => {
                    debug!("Ignoring corrupt preferences file {}: {}", path.display(), e);
                    Map::new()
                }
            },
            Err(_) => Map::new(),
        }
    }

    fn save(&self, entries: &Map<String, Value>) -> Result<(), CoreError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| CoreError::FileWrite {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.path();
        let content =
            serde_json::to_string_pretty(entries).map_err(|source| CoreError::JsonSerialize {
                path: path.clone(),
                source,
            })?;

        std::fs::write(&path, content).map_err(|source| CoreError::FileWrite { path, source })
    }
}

impl PreferenceStore for FileStore {
    /// Non-string values are treated as absent.
    fn get(&self, key: &str) -> Option<String> {
        match self.load().remove(key) {
            Some(Value::String(value)) => Some(value),
            _ => None,
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut entries = self.load();
        entries.insert(key.to_string(), Value::String(value.to_string()));
        self.save(&entries)
    }
}
