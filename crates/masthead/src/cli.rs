//! Subcommand implementations
//!
//! Each `run_*` returns what `main` prints, so the commands can be tested
//! without capturing stdout.

use crate::ThemeAction;
use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Table};
use masthead_core::{
    load_and_validate, load_config, FileStore, FixedScheme, HeaderConfig, MemorySurface,
    PersistPolicy, Theme, ThemeController,
};
use std::fmt;
use std::path::Path;
use tracing::info;

// ============================================================================
// render
// ============================================================================

pub fn run_render(config: Option<&Path>, theme: Option<Theme>) -> Result<String> {
    let config = match config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load header config {}", path.display()))?,
        None => HeaderConfig::default(),
    };

    let header = masthead_web::render_to_html(&config);
    Ok(match theme {
        Some(theme) => format!(
            "<html data-theme=\"{}\"><body>{}</body></html>",
            theme, header
        ),
        None => header,
    })
}

// ============================================================================
// theme
// ============================================================================

/// Outcome of a `theme` subcommand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeReport {
    pub theme: Theme,
    /// Where the mount-time theme came from, before any change
    pub resolved_from: String,
    pub changed: bool,
}

impl fmt::Display for ThemeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.changed {
            write!(f, "{} (was resolved from {})", self.theme, self.resolved_from)
        } else {
            write!(f, "{} ({})", self.theme, self.resolved_from)
        }
    }
}

pub fn run_theme(
    state_dir: &Path,
    prefers_dark: Option<bool>,
    policy: PersistPolicy,
    action: ThemeAction,
) -> Result<ThemeReport> {
    let mut controller = ThemeController::new(
        FileStore::new(state_dir),
        FixedScheme(prefers_dark),
        MemorySurface::new(),
    )
    .with_policy(policy);

    controller
        .init()
        .context("Failed to persist resolved theme")?;
    let resolved_from = controller
        .source()
        .map(|s| s.to_string())
        .unwrap_or_default();

    let changed = match action {
        ThemeAction::Show => false,
        ThemeAction::Toggle => {
            controller.toggle().context("Failed to persist theme")?;
            true
        }
        ThemeAction::Set { theme } => {
            controller.set(theme).context("Failed to persist theme")?;
            true
        }
    };

    if changed {
        info!(
            path = %controller.store().path().display(),
            "Saved theme preference"
        );
    }

    Ok(ThemeReport {
        theme: controller.current(),
        resolved_from,
        changed,
    })
}

// ============================================================================
// check
// ============================================================================

pub fn run_check(path: &Path, no_color: bool) -> Result<()> {
    let (config, warnings) = load_and_validate(path)
        .with_context(|| format!("Invalid header config {}", path.display()))?;

    println!("Logo: {} -> {}", config.logo.text, config.logo.href);
    println!("{}", nav_table(&config, no_color));

    if warnings.is_empty() {
        println!("OK");
    } else {
        for warning in &warnings {
            println!("warning: {}", warning);
        }
    }

    Ok(())
}

fn nav_table(config: &HeaderConfig, no_color: bool) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if no_color {
        table.set_header(vec!["#", "Label", "Href"]);
    } else {
        table.set_header(vec![
            Cell::new("#").fg(Color::Cyan),
            Cell::new("Label").fg(Color::Cyan),
            Cell::new("Href").fg(Color::Cyan),
        ]);
    }

    for (i, link) in config.nav_links.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&link.label),
            Cell::new(&link.href),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use masthead_core::{PreferenceStore, THEME_KEY};
    use tempfile::TempDir;

    #[test]
    fn test_show_does_not_write_by_default() {
        let dir = TempDir::new().unwrap();
        let report = run_theme(dir.path(), Some(true), PersistPolicy::OnToggle, ThemeAction::Show)
            .unwrap();

        assert_eq!(report.theme, Theme::Dark);
        assert_eq!(report.resolved_from, "environment");
        assert!(!report.changed);
        assert_eq!(FileStore::new(dir.path()).get(THEME_KEY), None);
    }

    #[test]
    fn test_show_with_persist_on_resolve_writes() {
        let dir = TempDir::new().unwrap();
        run_theme(dir.path(), Some(true), PersistPolicy::OnResolve, ThemeAction::Show).unwrap();

        assert_eq!(
            FileStore::new(dir.path()).get(THEME_KEY).as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn test_toggle_twice_round_trips_through_file() {
        let dir = TempDir::new().unwrap();

        let first =
            run_theme(dir.path(), None, PersistPolicy::OnToggle, ThemeAction::Toggle).unwrap();
        assert_eq!(first.theme, Theme::Dark);
        assert_eq!(first.resolved_from, "fallback");

        let second =
            run_theme(dir.path(), None, PersistPolicy::OnToggle, ThemeAction::Toggle).unwrap();
        assert_eq!(second.theme, Theme::Light);
        assert_eq!(second.resolved_from, "stored");
        assert_eq!(
            FileStore::new(dir.path()).get(THEME_KEY).as_deref(),
            Some("light")
        );
    }

    #[test]
    fn test_set_overrides_environment() {
        let dir = TempDir::new().unwrap();
        run_theme(
            dir.path(),
            Some(true),
            PersistPolicy::OnToggle,
            ThemeAction::Set { theme: Theme::Light },
        )
        .unwrap();

        let report =
            run_theme(dir.path(), Some(true), PersistPolicy::OnToggle, ThemeAction::Show).unwrap();
        assert_eq!(report.theme, Theme::Light);
        assert_eq!(report.to_string(), "light (stored)");
    }

    #[test]
    fn test_render_wraps_with_theme_attribute() {
        let html = run_render(None, Some(Theme::Dark)).unwrap();
        assert!(html.starts_with("<html data-theme=\"dark\">"));
        assert!(html.contains("YourBrand"));
    }

    #[test]
    fn test_render_reports_bad_config_path() {
        let err = run_render(Some(Path::new("/nonexistent/header.json")), None).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/header.json"));
    }

    #[test]
    fn test_nav_table_lists_links_in_order() {
        let rendered = nav_table(&HeaderConfig::default(), true).to_string();
        let first = rendered.find("Головна").unwrap();
        let last = rendered.find("Контакти").unwrap();
        assert!(first < last);
    }
}
