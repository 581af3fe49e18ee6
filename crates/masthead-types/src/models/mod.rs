//! Header configuration models

mod header;

pub use header::{default_nav_links, HeaderConfig, Logo, NavLink, DEFAULT_AVATAR};
