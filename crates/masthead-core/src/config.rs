//! Header configuration loading and validation

use crate::error::{ConfigWarning, CoreError};
use masthead_types::HeaderConfig;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::path::Path;
use tracing::warn;

const CONFIG_FIELDS: &[&str] = &["logo", "navLinks", "avatar"];
const LOGO_FIELDS: &[&str] = &["text", "href"];
const LINK_FIELDS: &[&str] = &["label", "href"];

/// Load a [`HeaderConfig`] from a `.json`, `.yaml` or `.yml` file.
///
/// Missing fields take their defaults; an unknown extension is an error.
pub fn load_config(path: &Path) -> Result<HeaderConfig, CoreError> {
    let document = read_document(path)?;
    from_document(path, document)
}

/// Read the file as a generic document, whatever its format
fn read_document(path: &Path) -> Result<Value, CoreError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let content = std::fs::read_to_string(path).map_err(|source| CoreError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    match extension.as_deref() {
        Some("json") => serde_json::from_str(&content).map_err(|e| CoreError::JsonParse {
            path: path.to_path_buf(),
            message: e.to_string(),
            source: e,
        }),
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&content).map_err(|e| CoreError::YamlParse {
                path: path.to_path_buf(),
                message: e.to_string(),
                source: e,
            })
        }
        _ => Err(CoreError::UnsupportedConfigFormat {
            path: path.to_path_buf(),
        }),
    }
}

fn from_document(path: &Path, document: Value) -> Result<HeaderConfig, CoreError> {
    serde_json::from_value(document).map_err(|e| CoreError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
        source: e,
    })
}

/// Keys in `document` that [`HeaderConfig`] does not read, as dotted paths
/// (`nav_links`, `logo.url`, `navLinks[2].title`)
pub fn unknown_fields(document: &Value) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();
    let Some(root) = document.as_object() else {
        return warnings;
    };

    collect_unknown(root, CONFIG_FIELDS, "", &mut warnings);

    if let Some(logo) = root.get("logo").and_then(Value::as_object) {
        collect_unknown(logo, LOGO_FIELDS, "logo.", &mut warnings);
    }

    if let Some(links) = root.get("navLinks").and_then(Value::as_array) {
        for (i, link) in links.iter().enumerate() {
            if let Some(link) = link.as_object() {
                let prefix = format!("navLinks[{}].", i);
                collect_unknown(link, LINK_FIELDS, &prefix, &mut warnings);
            }
        }
    }

    warnings
}

fn collect_unknown(
    object: &Map<String, Value>,
    known: &[&str],
    prefix: &str,
    warnings: &mut Vec<ConfigWarning>,
) {
    for key in object.keys() {
        if !known.contains(&key.as_str()) {
            warnings.push(ConfigWarning::UnknownField {
                field: format!("{}{}", prefix, key),
            });
        }
    }
}

/// Non-fatal problems in `config`, in nav-link order
pub fn validate(config: &HeaderConfig) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.logo.text.trim().is_empty() {
        warnings.push(ConfigWarning::EmptyLogoText);
    }

    let mut seen = HashSet::new();
    for link in &config.nav_links {
        if !seen.insert(link.label.as_str()) {
            warnings.push(ConfigWarning::DuplicateLabel {
                label: link.label.clone(),
            });
        }
        if link.href.trim().is_empty() {
            warnings.push(ConfigWarning::EmptyHref {
                label: link.label.clone(),
            });
        }
    }

    warnings
}

/// Load a config and collect every warning: ignored keys first, then
/// [`validate`] findings. Each warning is logged.
pub fn load_and_validate(path: &Path) -> Result<(HeaderConfig, Vec<ConfigWarning>), CoreError> {
    let document = read_document(path)?;
    let mut warnings = unknown_fields(&document);
    let config = from_document(path, document)?;
    warnings.extend(validate(&config));

    for warning in &warnings {
        warn!("{}: {}", path.display(), warning);
    }
    Ok((config, warnings))
}
