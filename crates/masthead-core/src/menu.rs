//! Mobile menu open/closed state machine

/// Whether the mobile panel is expanded. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Interactions that can change [`MenuState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Click on the menu button
    Toggle,
    /// Click whose target lies outside the menu region
    OutsideClick,
    /// Click on a link inside the mobile panel
    LinkClick,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Next state after `event`. Only the toggle can open the menu.
    pub fn apply(self, event: MenuEvent) -> Self {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Toggle) => MenuState::Open,
            (MenuState::Open, MenuEvent::Toggle) => MenuState::Closed,
            (_, MenuEvent::OutsideClick | MenuEvent::LinkClick) => MenuState::Closed,
        }
    }

    /// Apply `event` in place
    pub fn handle(&mut self, event: MenuEvent) {
        *self = self.apply(event);
    }

    /// Value for the menu button's `aria-expanded` attribute
    pub fn aria_expanded(&self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }
}
