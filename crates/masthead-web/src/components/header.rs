//! Header component

use crate::browser::browser_theme_controller;
use crate::outside_click::{use_click_outside, MenuRegion};
use leptos::html::{Button, Div};
use leptos::prelude::*;
use masthead_core::{submit_search, MenuEvent, MenuState, Theme};
use masthead_types::models::{default_nav_links, DEFAULT_AVATAR};
use masthead_types::{Logo, NavLink};

const LOGO_MARK_PATH: &str = "M12 2l9 5v10l-9 5-9-5V7l9-5zm0 3.2L6 8v8l6 3.2L18 16V8l-6-2.8z";

/// Icon shown on the theme toggle for the active theme
fn theme_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "🌙",
        Theme::Light => "☀️",
    }
}

/// The toggle's aria-label names the theme it switches to
fn theme_toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "Увімкнути світлу тему",
        Theme::Light => "Увімкнути темну тему",
    }
}

fn on_menu_button_click(menu: RwSignal<MenuState>) {
    menu.update(|m| m.handle(MenuEvent::Toggle));
}

fn on_mobile_link_click(menu: RwSignal<MenuState>) {
    menu.update(|m| m.handle(MenuEvent::LinkClick));
}

fn on_outside_click(menu: RwSignal<MenuState>) {
    menu.update(|m| m.handle(MenuEvent::OutsideClick));
}

/// Forward the trimmed query to `on_search`; blank queries are dropped
fn dispatch_query(raw: &str, on_search: Option<Callback<String>>) -> Option<String> {
    submit_search(raw, on_search.map(|cb| move |q: String| cb.run(q)))
}

/// Page header with logo, navigation, search, theme toggle and mobile menu
#[component]
pub fn Header(
    /// Brand link at the left edge
    #[prop(default = Logo::default())]
    logo: Logo,
    /// Links rendered in the desktop list and the mobile panel, in order
    #[prop(default = default_nav_links())]
    nav_links: Vec<NavLink>,
    /// Initials in the profile indicator
    #[prop(into, default = DEFAULT_AVATAR.to_string())]
    avatar: String,
    /// Receives the trimmed query on submit
    #[prop(optional, into)]
    on_search: Option<Callback<String>>,
) -> impl IntoView {
    let menu = RwSignal::new(MenuState::Closed);
    let query = RwSignal::new(String::new());
    let theme = RwSignal::new(browser_theme_controller());

    let panel_ref = NodeRef::<Div>::new();
    let toggle_ref = NodeRef::<Button>::new();

    // Mount: resolve the theme once and mirror it onto <html>
    Effect::new(move |_| {
        theme.update(|ctrl| {
            if let Err(e) = ctrl.init() {
                leptos::logging::error!("Failed to initialize theme: {}", e);
            }
        });
    });

    use_click_outside(
        MenuRegion {
            panel: panel_ref,
            toggle: toggle_ref,
        },
        Signal::derive(move || menu.get().is_open()),
        move || on_outside_click(menu),
    );

    let toggle_theme = move |_| {
        theme.update(|ctrl| {
            if let Err(e) = ctrl.toggle() {
                leptos::logging::error!("Failed to persist theme: {}", e);
            }
        });
    };

    let handle_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        dispatch_query(&query.get_untracked(), on_search);
    };

    let active_theme = move || theme.with(|ctrl| ctrl.current());

    let desktop_links = nav_links
        .iter()
        .map(|link| {
            view! {
                <li>
                    <a class="link" href=link.href.clone()>
                        {link.label.clone()}
                    </a>
                </li>
            }
        })
        .collect_view();

    let mobile_links = nav_links
        .into_iter()
        .map(|link| {
            view! {
                <li role="none">
                    <a
                        role="menuitem"
                        class="mobile-link"
                        href=link.href
                        on:click=move |_| on_mobile_link_click(menu)
                    >
                        {link.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class="header" role="banner">
            <nav class="navbar" aria-label="Головна навігація">
                <a class="logo" href=logo.href aria-label="На головну">
                    <svg class="logo-mark" viewBox="0 0 24 24" aria-hidden="true">
                        <path d=LOGO_MARK_PATH></path>
                    </svg>
                    <span class="logo-text">{logo.text}</span>
                </a>

                <button
                    node_ref=toggle_ref
                    class="icon-button menu-button"
                    aria-label="Відкрити меню"
                    aria-controls="mobile-menu"
                    aria-expanded=move || menu.get().aria_expanded()
                    on:click=move |_| on_menu_button_click(menu)
                >
                    <span class="burger"></span>
                </button>

                <ul class="links">{desktop_links}</ul>

                <div class="actions">
                    <form class="search" role="search" on:submit=handle_search>
                        <label class="sr-only" for="site-search">
                            "Пошук по сайту"
                        </label>
                        <input
                            id="site-search"
                            type="search"
                            placeholder="Пошук…"
                            class="search-input"
                            prop:value=move || query.get()
                            on:input=move |e| query.set(event_target_value(&e))
                        />
                        <button class="search-button" aria-label="Шукати">
                            "⌕"
                        </button>
                    </form>

                    <button
                        class="icon-button theme-toggle"
                        on:click=toggle_theme
                        aria-label=move || theme_toggle_label(active_theme())
                        title="Тема"
                    >
                        {move || theme_icon(active_theme())}
                    </button>

                    <div class="avatar" role="img" aria-label="Профіль" title="Профіль">
                        {avatar}
                    </div>
                </div>
            </nav>

            <div
                id="mobile-menu"
                node_ref=panel_ref
                class="mobile"
                class:mobile-open=move || menu.get().is_open()
            >
                <ul class="mobile-links" role="menu" aria-label="Мобільне меню">
                    {mobile_links}
                </ul>
            </div>
        </header>
    }
}
