//! Browser implementations of the masthead-core ports
//!
//! Every adapter is a unit struct that looks up `window()` on each call, so
//! they are `Send + Sync` and can live inside reactive signals. Under SSR none
//! of these are invoked.

use leptos::web_sys::{window, Event, EventTarget, Storage};
use masthead_core::dismiss::ClickHandler;
use masthead_core::{
    ClickSource, ColorSchemeHint, CoreError, PreferenceStore, Theme, ThemeController,
    ThemeSurface,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Attribute on `<html>` that stylesheets key the theme off
pub const THEME_ATTRIBUTE: &str = "data-theme";

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Theme controller wired to localStorage, matchMedia and `<html>`
pub type BrowserThemeController = ThemeController<LocalStorageStore, MediaQueryScheme, DocumentRoot>;

pub fn browser_theme_controller() -> BrowserThemeController {
    ThemeController::new(LocalStorageStore, MediaQueryScheme, DocumentRoot)
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let storage = local_storage().ok_or(CoreError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| CoreError::StorageWrite {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
    }
}

/// `window.matchMedia("(prefers-color-scheme: dark)")`
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaQueryScheme;

impl ColorSchemeHint for MediaQueryScheme {
    fn prefers_dark(&self) -> Option<bool> {
        let list = window()?.match_media(DARK_QUERY).ok().flatten()?;
        Some(list.matches())
    }
}

/// `document.documentElement`
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRoot;

impl ThemeSurface for DocumentRoot {
    fn apply(&self, theme: Theme) {
        let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };

        if let Err(e) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
            leptos::logging::warn!("Failed to set {}: {:?}", THEME_ATTRIBUTE, e);
        }
    }
}

/// Click listener on `document`
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentClicks;

/// Registered listener; `None` when the document was unavailable
pub type DocumentSubscription = Option<Closure<dyn FnMut(Event)>>;

impl ClickSource for DocumentClicks {
    type Target = EventTarget;
    type Subscription = DocumentSubscription;

    fn subscribe(&self, mut handler: ClickHandler<EventTarget>) -> DocumentSubscription {
        let document = window()?.document()?;

        let callback = Closure::wrap(Box::new(move |event: Event| {
            if let Some(target) = event.target() {
                handler(&target);
            }
        }) as Box<dyn FnMut(_)>);

        match document.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
        {
            Ok(()) => Some(callback),
            Err(e) => {
                leptos::logging::error!("Failed to add click listener: {:?}", e);
                None
            }
        }
    }

    fn unsubscribe(&self, subscription: DocumentSubscription) {
        let Some(callback) = subscription else {
            return;
        };
        let Some(document) = window().and_then(|w| w.document()) else {
            return;
        };

        if let Err(e) =
            document.remove_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
        {
            leptos::logging::error!("Failed to remove click listener: {:?}", e);
        }
        // `callback` is dropped here, after the listener is gone
    }
}
