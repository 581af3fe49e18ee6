//! masthead - render and inspect the page header from the command line

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use masthead_core::{FileStore, PersistPolicy, Theme};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "masthead",
    version,
    about = "Render and inspect the masthead page header",
    long_about = "Static rendering and theme-preference tooling for the masthead header.\n\
                  \n\
                  Examples:\n\
                    masthead render                      # Default header as HTML\n\
                    masthead render --config header.yml  # Custom logo and links\n\
                    masthead theme show                  # Active theme and where it came from\n\
                    masthead theme toggle                # Flip and persist\n\
                    masthead theme set dark              # Force a theme\n\
                    masthead check header.json           # Validate a config file\n\
                  \n\
                  Environment Variables:\n\
                    MASTHEAD_STATE_DIR                   # Override preferences directory\n\
                    MASTHEAD_PREFERS_DARK                # Simulate the color-scheme hint (true|false)\n\
                    MASTHEAD_NO_COLOR                    # Disable ANSI colors\n\
                    RUST_LOG                             # Log filter (default: warn)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding masthead-preferences.json
    #[arg(long, global = true, env = "MASTHEAD_STATE_DIR")]
    state_dir: Option<PathBuf>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, global = true, env = "MASTHEAD_NO_COLOR")]
    no_color: bool,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Render the header to static HTML
    Render {
        /// Header config (.json, .yaml or .yml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
        /// Wrap the output in <html data-theme="...">
        #[arg(long)]
        theme: Option<Theme>,
    },
    /// Inspect or change the persisted theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
        /// Environment dark-mode hint used when nothing is persisted
        /// (`--prefers-dark` alone means true)
        #[arg(
            long,
            env = "MASTHEAD_PREFERS_DARK",
            num_args = 0..=1,
            default_missing_value = "true",
            require_equals = true
        )]
        prefers_dark: Option<bool>,
        /// Persist the resolved theme even when it came from the environment
        #[arg(long)]
        persist_on_resolve: bool,
    },
    /// Validate a header config file
    Check {
        /// Header config (.json, .yaml or .yml)
        file: PathBuf,
    },
}

#[derive(Subcommand, Clone, Copy)]
pub enum ThemeAction {
    /// Print the active theme
    Show,
    /// Flip the theme and persist it
    Toggle,
    /// Persist a specific theme
    Set {
        theme: Theme,
    },
}

fn init_logging(verbose: bool, no_color: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.no_color);

    match cli.command {
        Command::Render { config, theme } => {
            let html = cli::run_render(config.as_deref(), theme)?;
            println!("{}", html);
        }
        Command::Theme {
            action,
            prefers_dark,
            persist_on_resolve,
        } => {
            let state_dir = cli
                .state_dir
                .or_else(FileStore::default_dir)
                .context("Could not determine preferences directory (use --state-dir)")?;
            let policy = if persist_on_resolve {
                PersistPolicy::OnResolve
            } else {
                PersistPolicy::OnToggle
            };

            let report = cli::run_theme(&state_dir, prefers_dark, policy, action)?;
            println!("{}", report);
        }
        Command::Check { file } => {
            cli::run_check(&file, cli.no_color)?;
        }
    }

    Ok(())
}
