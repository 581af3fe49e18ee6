//! Error types for masthead-core
//!
//! None of these surface to the user of the header; they are returned to the
//! host so it can log them and keep rendering with defaults.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for masthead operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // IO Errors
    // ===================
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ===================
    // Parse Errors
    // ===================
    #[error("Failed to parse JSON in {path}: {message}")]
    JsonParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse YAML in {path}: {message}")]
    YamlParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to serialize JSON for {path}")]
    JsonSerialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid header config in {path}: {message}")]
    InvalidConfig {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported config format for {path} (expected .json, .yaml or .yml)")]
    UnsupportedConfigFormat { path: PathBuf },

    // ===================
    // Preference Storage
    // ===================
    #[error("Preference storage is unavailable")]
    StorageUnavailable,

    #[error("Failed to persist preference '{key}': {message}")]
    StorageWrite { key: String, message: String },
}

/// A non-fatal problem found in a header configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Two links share a label; labels are used as render keys
    DuplicateLabel { label: String },
    /// Link with an empty href renders as a dead anchor
    EmptyHref { label: String },
    /// Logo text is empty, leaving only the SVG mark
    EmptyLogoText,
    /// Key not recognized by the header config; its value is ignored
    UnknownField { field: String },
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::DuplicateLabel { label } => {
                write!(f, "duplicate nav link label '{}'", label)
            }
            ConfigWarning::EmptyHref { label } => {
                write!(f, "nav link '{}' has an empty href", label)
            }
            ConfigWarning::EmptyLogoText => write!(f, "logo text is empty"),
            ConfigWarning::UnknownField { field } => {
                write!(f, "unknown field '{}' is ignored", field)
            }
        }
    }
}
