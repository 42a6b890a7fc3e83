use log::debug;

use crate::dom::UiElement;

const OPEN_CLASS: &str = "active";
const BODY_LOCK_CLASS: &str = "menu-open";

/// Where a click landed relative to the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Toggle,
    Panel,
    Elsewhere,
}

/// Whether the caller should stop the click from bubbling further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Stop,
    Continue,
}

/// Open/closed state of the mobile navigation.
///
/// The state is the `active` class on the panel; the toggle button and the
/// page body mirror it (`active` and `menu-open`). All three flip together.
pub struct MenuController<E> {
    toggle: E,
    panel: E,
    body: E,
}

impl<E: UiElement> MenuController<E> {
    pub fn new(toggle: E, panel: E, body: E) -> Self {
        Self {
            toggle,
            panel,
            body,
        }
    }

    pub fn is_open(&self) -> bool {
        self.panel.has_class(OPEN_CLASS)
    }

    pub fn toggle(&self) {
        let open = self.panel.toggle_class(OPEN_CLASS);
        self.toggle.toggle_class(OPEN_CLASS);
        self.body.toggle_class(BODY_LOCK_CLASS);
        debug!("mobile menu {}", if open { "opened" } else { "closed" });
    }

    pub fn close(&self) {
        if self.is_open() {
            self.toggle();
        }
    }

    pub fn on_click(&self, target: ClickTarget) -> Propagation {
        match target {
            ClickTarget::Toggle => {
                self.toggle();
                Propagation::Stop
            }
            // Clicks inside the open panel must never reach the outside-click
            // handler.
            ClickTarget::Panel => Propagation::Stop,
            ClickTarget::Elsewhere => {
                self.close();
                Propagation::Continue
            }
        }
    }
}
