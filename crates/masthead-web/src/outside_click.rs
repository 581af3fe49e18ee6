//! Leptos hook for dismiss-on-outside-click

use crate::browser::DocumentClicks;
use leptos::html::{Button, Div};
use leptos::prelude::*;
use leptos::web_sys::{EventTarget, Node};
use masthead_core::{OutsideClick, Region};
use wasm_bindgen::JsCast;

/// Where a click landed relative to the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickPlacement {
    pub in_panel: bool,
    pub on_toggle: bool,
}

impl ClickPlacement {
    /// Clicks on the toggle button count as inside the menu
    pub fn is_inside(self) -> bool {
        self.in_panel || self.on_toggle
    }
}

/// The mobile panel together with the button that toggles it.
///
/// The button counts as inside: it handles its own clicks, and the click
/// that opens the menu is still bubbling when the listener gets installed.
#[derive(Clone, Copy)]
pub struct MenuRegion {
    pub panel: NodeRef<Div>,
    pub toggle: NodeRef<Button>,
}

impl Region<EventTarget> for MenuRegion {
    fn is_mounted(&self) -> bool {
        self.panel.get_untracked().is_some()
    }

    fn contains(&self, target: &EventTarget) -> bool {
        let Some(node) = target.dyn_ref::<Node>() else {
            return false;
        };

        ClickPlacement {
            in_panel: self
                .panel
                .get_untracked()
                .is_some_and(|panel| panel.contains(Some(node))),
            on_toggle: self
                .toggle
                .get_untracked()
                .is_some_and(|toggle| toggle.contains(Some(node))),
        }
        .is_inside()
    }
}

/// Run `on_outside` for every document click outside `region` while `active`
/// is true.
///
/// The listener is installed when `active` turns true and removed when it
/// turns false. The guard lives in the component's owner, so unmounting drops
/// it and removes any listener still installed.
///
/// # Example
///
/// ```rust,ignore
/// let region = MenuRegion { panel: panel_ref, toggle: toggle_ref };
/// use_click_outside(region, Signal::derive(move || open.get()), move || open.set(false));
/// ```
pub fn use_click_outside<R, F>(region: R, active: Signal<bool>, on_outside: F)
where
    R: Region<EventTarget> + Clone + 'static,
    F: Fn() + Clone + 'static,
{
    let guard = StoredValue::new_local(OutsideClick::new(DocumentClicks));

    Effect::new(move |_| {
        let active = active.get();
        let region = region.clone();
        let on_outside = on_outside.clone();
        guard.update_value(|guard| guard.sync(active, region, on_outside));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_elsewhere_is_outside() {
        assert!(!ClickPlacement::default().is_inside());
    }

    #[test]
    fn test_panel_click_is_inside() {
        let placement = ClickPlacement {
            in_panel: true,
            on_toggle: false,
        };
        assert!(placement.is_inside());
    }

    #[test]
    fn test_toggle_button_click_is_inside() {
        // The opening click must not close the menu it just opened
        let placement = ClickPlacement {
            in_panel: false,
            on_toggle: true,
        };
        assert!(placement.is_inside());
    }
}
