//! Headless walk-through of the header's observable behavior
//!
//! Wires the menu state machine, the outside-click guard, the theme
//! controller and search dispatch together the way the Leptos component
//! does, with a fake document standing in for the browser.
//!
//! Run with:
//! ```bash
//! cargo test -p masthead-core --test header_behavior
//! ```

use masthead_core::dismiss::ClickHandler;
use masthead_core::{
    submit_search, ClickSource, FileStore, FixedScheme, MemoryStore, MemorySurface, MenuEvent,
    MenuState, OutsideClick, PreferenceStore, Region, Theme, ThemeController, THEME_KEY,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

// ============================================================================
// Fake document
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
enum Element {
    Body,
    MenuButton,
    PanelLink(usize),
    Panel,
}

#[derive(Default, Clone)]
struct Document {
    listeners: Rc<RefCell<Vec<(u64, ClickHandler<Element>)>>>,
    next_id: Rc<Cell<u64>>,
}

impl Document {
    fn dispatch(&self, target: Element) {
        // Handlers may re-enter the document, so run them on a snapshot of ids
        let ids: Vec<u64> = self.listeners.borrow().iter().map(|(id, _)| *id).collect();
        for id in ids {
            let handler = {
                let mut listeners = self.listeners.borrow_mut();
                listeners
                    .iter()
                    .position(|(lid, _)| *lid == id)
                    .map(|pos| listeners.remove(pos))
            };
            if let Some((id, mut handler)) = handler {
                handler(&target);
                self.listeners.borrow_mut().push((id, handler));
            }
        }
    }

    fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl ClickSource for Document {
    type Target = Element;
    type Subscription = u64;

    fn subscribe(&self, handler: ClickHandler<Element>) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, handler));
        id
    }

    fn unsubscribe(&self, subscription: u64) {
        self.listeners
            .borrow_mut()
            .retain(|(id, _)| *id != subscription);
    }
}

/// The mobile panel plus the button that controls it
struct MenuRegion;

impl Region<Element> for MenuRegion {
    fn contains(&self, target: &Element) -> bool {
        matches!(
            target,
            Element::Panel | Element::PanelLink(_) | Element::MenuButton
        )
    }
}

// ============================================================================
// Headless header
// ============================================================================

struct Header {
    document: Document,
    menu: Rc<Cell<MenuState>>,
    guard: OutsideClick<Document>,
}

impl Header {
    fn mount(document: Document) -> Self {
        Self {
            guard: OutsideClick::new(document.clone()),
            document,
            menu: Rc::new(Cell::new(MenuState::Closed)),
        }
    }

    /// Mirrors the reactive effect that tracks the menu state
    fn sync_listener(&mut self) {
        let menu = Rc::clone(&self.menu);
        self.guard.sync(self.menu.get().is_open(), MenuRegion, move || {
            menu.set(menu.get().apply(MenuEvent::OutsideClick))
        });
    }

    fn click(&mut self, target: Element) {
        match target {
            Element::MenuButton => self.menu.set(self.menu.get().apply(MenuEvent::Toggle)),
            Element::PanelLink(_) => self.menu.set(self.menu.get().apply(MenuEvent::LinkClick)),
            Element::Body | Element::Panel => {}
        }
        self.document.dispatch(target);
        self.sync_listener();
    }

    fn is_open(&self) -> bool {
        self.menu.get().is_open()
    }
}

// ============================================================================
// Menu
// ============================================================================

#[test]
fn test_menu_button_parity() {
    let mut header = Header::mount(Document::default());

    for n in 1..=5 {
        header.click(Element::MenuButton);
        assert_eq!(header.is_open(), n % 2 == 1);
    }
}

#[test]
fn test_outside_click_closes_open_panel() {
    let mut header = Header::mount(Document::default());
    header.click(Element::MenuButton);
    assert!(header.is_open());

    header.click(Element::Body);
    assert!(!header.is_open());
}

#[test]
fn test_click_inside_panel_keeps_it_open() {
    let mut header = Header::mount(Document::default());
    header.click(Element::MenuButton);

    header.click(Element::Panel);
    assert!(header.is_open());
}

#[test]
fn test_link_click_closes_and_does_not_reopen() {
    let mut header = Header::mount(Document::default());
    header.click(Element::MenuButton);

    header.click(Element::PanelLink(2));
    assert!(!header.is_open());

    header.click(Element::Body);
    assert!(!header.is_open());
}

#[test]
fn test_listener_only_installed_while_open() {
    let document = Document::default();
    let mut header = Header::mount(document.clone());
    assert_eq!(document.listener_count(), 0);

    header.click(Element::MenuButton);
    assert_eq!(document.listener_count(), 1);

    header.click(Element::MenuButton);
    header.click(Element::MenuButton);
    assert_eq!(document.listener_count(), 1);

    header.click(Element::Body);
    assert_eq!(document.listener_count(), 0);
}

#[test]
fn test_unmount_removes_listener() {
    let document = Document::default();
    let mut header = Header::mount(document.clone());
    header.click(Element::MenuButton);
    assert_eq!(document.listener_count(), 1);

    drop(header);
    assert_eq!(document.listener_count(), 0);
}

// ============================================================================
// Theme
// ============================================================================

#[test]
fn test_stored_dark_beats_light_environment() {
    let mut ctrl = ThemeController::new(
        MemoryStore::with_entry(THEME_KEY, "dark"),
        FixedScheme::light(),
        MemorySurface::new(),
    );
    assert_eq!(ctrl.init().unwrap(), Theme::Dark);
    assert_eq!(ctrl.surface().current(), Some(Theme::Dark));
}

#[test]
fn test_environment_dark_is_not_persisted_until_toggle() {
    let mut ctrl = ThemeController::new(MemoryStore::new(), FixedScheme::dark(), MemorySurface::new());
    assert_eq!(ctrl.init().unwrap(), Theme::Dark);
    assert_eq!(ctrl.store().write_count(), 0);

    ctrl.toggle().unwrap();
    assert_eq!(ctrl.store().get(THEME_KEY).as_deref(), Some("light"));
}

#[test]
fn test_double_toggle_from_light() {
    let mut ctrl = ThemeController::new(MemoryStore::new(), FixedScheme::light(), MemorySurface::new());
    assert_eq!(ctrl.init().unwrap(), Theme::Light);

    ctrl.toggle().unwrap();
    ctrl.toggle().unwrap();

    assert_eq!(ctrl.current(), Theme::Light);
    assert_eq!(ctrl.store().get(THEME_KEY).as_deref(), Some("light"));
    assert_eq!(ctrl.surface().current(), Some(Theme::Light));
}

#[test]
fn test_file_store_survives_remount() {
    let dir = tempfile::TempDir::new().unwrap();

    let mut first = ThemeController::new(
        FileStore::new(dir.path()),
        FixedScheme::light(),
        MemorySurface::new(),
    );
    first.init().unwrap();
    first.toggle().unwrap();

    let mut second = ThemeController::new(
        FileStore::new(dir.path()),
        FixedScheme::light(),
        MemorySurface::new(),
    );
    assert_eq!(second.init().unwrap(), Theme::Dark);
    assert_eq!(FileStore::new(dir.path()).get(THEME_KEY).as_deref(), Some("dark"));
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_search_dispatches_trimmed_query_once() {
    let calls = RefCell::new(Vec::new());
    submit_search("  shoes  ", Some(|q: String| calls.borrow_mut().push(q)));
    assert_eq!(calls.into_inner(), vec!["shoes".to_string()]);
}

#[test]
fn test_search_without_callback_does_nothing() {
    assert!(submit_search::<fn(String)>("  shoes  ", None).is_none());
}
