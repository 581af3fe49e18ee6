use serde::{Deserialize, Serialize};

/// Initials shown in the static profile indicator
pub const DEFAULT_AVATAR: &str = "SG";

/// A single navigation entry, rendered in both the desktop list and the mobile panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Brand link shown at the left edge of the header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    pub text: String,
    pub href: String,
}

impl Default for Logo {
    fn default() -> Self {
        Self {
            text: "YourBrand".to_string(),
            href: "/".to_string(),
        }
    }
}

/// Navigation links used when the caller supplies none.
pub fn default_nav_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Головна", "#"),
        NavLink::new("Продукти", "#"),
        NavLink::new("Про нас", "#"),
        NavLink::new("Контакти", "#"),
    ]
}

fn default_avatar() -> String {
    DEFAULT_AVATAR.to_string()
}

/// Caller-supplied header configuration.
///
/// Every field is optional in serialized form; missing fields fall back to the
/// defaults above, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderConfig {
    #[serde(default)]
    pub logo: Logo,

    /// Ordered links; order is preserved when rendering
    #[serde(default = "default_nav_links")]
    pub nav_links: Vec<NavLink>,

    /// Initials for the profile indicator
    #[serde(default = "default_avatar")]
    pub avatar: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            logo: Logo::default(),
            nav_links: default_nav_links(),
            avatar: default_avatar(),
        }
    }
}
