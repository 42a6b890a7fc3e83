use std::cell::Cell;

use log::debug;

use crate::dom::UiElement;

const HIDDEN_CLASS: &str = "scroll-down";
const REVEALED_CLASS: &str = "scroll-up";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarState {
    /// Resting at the top of the page, no scroll direction applied yet.
    Neutral,
    Hidden,
    Revealed,
}

/// Hides the navbar while scrolling down and brings it back on the way up.
pub struct NavbarController<E> {
    navbar: E,
    shadow: String,
    last_scroll: Cell<f64>,
}

impl<E: UiElement> NavbarController<E> {
    pub fn new(navbar: E, shadow: impl Into<String>) -> Self {
        Self {
            navbar,
            shadow: shadow.into(),
            last_scroll: Cell::new(0.0),
        }
    }

    pub fn state(&self) -> NavbarState {
        if self.navbar.has_class(HIDDEN_CLASS) {
            NavbarState::Hidden
        } else if self.navbar.has_class(REVEALED_CLASS) {
            NavbarState::Revealed
        } else {
            NavbarState::Neutral
        }
    }

    pub fn last_scroll(&self) -> f64 {
        self.last_scroll.get()
    }

    pub fn on_scroll(&self, current: f64) -> NavbarState {
        let last = self.last_scroll.replace(current);
        let before = self.state();

        if current <= 0.0 {
            self.navbar.remove_class(HIDDEN_CLASS);
            self.navbar.remove_class(REVEALED_CLASS);
            self.navbar.set_style("box-shadow", "none");
        } else if current > last && before != NavbarState::Hidden {
            self.navbar.remove_class(REVEALED_CLASS);
            self.navbar.add_class(HIDDEN_CLASS);
        } else if current < last && before == NavbarState::Hidden {
            self.navbar.remove_class(HIDDEN_CLASS);
            self.navbar.add_class(REVEALED_CLASS);
            self.navbar.set_style("box-shadow", &self.shadow);
        }

        let after = self.state();
        if after != before {
            debug!("navbar {:?} -> {:?} at {}", before, after, current);
        }
        after
    }
}
