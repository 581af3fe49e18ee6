//! masthead-types - Shared data types for masthead
//!
//! This crate contains pure data structures without heavy dependencies.
//! No browser bindings, no file system - just serde-serializable types.
//!
//! Used by:
//! - masthead-core (theme, menu and search behavior)
//! - masthead-web (Leptos component, WASM)
//! - masthead (CLI)

pub mod models;
pub mod theme;

pub use models::{HeaderConfig, Logo, NavLink};
pub use theme::{ParseThemeError, Theme};
