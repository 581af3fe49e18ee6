//! Leptos UI components

mod header;

pub use header::Header;
