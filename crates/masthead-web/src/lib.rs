//! masthead-web - Leptos page header for masthead
//!
//! Built with `csr` for the browser (see `index.html`), or with the default
//! `ssr` feature to render static HTML from native code.

#![recursion_limit = "1024"]

pub mod app;
pub mod browser;
pub mod components;
pub mod outside_click;

pub use app::App;
pub use components::Header;

#[cfg(feature = "ssr")]
pub use render::render_to_html;

#[cfg(feature = "ssr")]
mod render {
    use crate::components::Header;
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;
    use masthead_types::HeaderConfig;

    /// Render the header for `config` to an HTML string.
    ///
    /// Effects do not run during SSR, so the markup reflects the initial
    /// state: menu closed, light theme, empty search box.
    pub fn render_to_html(config: &HeaderConfig) -> String {
        let HeaderConfig {
            logo,
            nav_links,
            avatar,
        } = config.clone();

        Owner::new().with(move || {
            view! { <Header logo nav_links avatar /> }.to_html()
        })
    }
}
