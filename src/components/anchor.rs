use log::{debug, warn};

use crate::components::menu::MenuController;
use crate::dom::{ScrollBehavior, UiElement, Viewport};

/// The selector part of an in-page link, or `None` when the href doesn't
/// point at an element (`"#"`, `"/about"`).
pub fn target_selector(href: &str) -> Option<&str> {
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorOutcome {
    Scrolled { top: f64 },
    TargetMissing,
}

/// Smooth scrolling for `href="#..."` links, keeping the target clear of the
/// fixed header.
#[derive(Debug, Clone, Copy)]
pub struct AnchorNavigator {
    header_offset: f64,
    mobile_breakpoint: f64,
}

impl AnchorNavigator {
    pub fn new(header_offset: f64, mobile_breakpoint: f64) -> Self {
        Self {
            header_offset,
            mobile_breakpoint,
        }
    }

    /// `target_top` is relative to the viewport, `page_offset` is the current
    /// page scroll.
    pub fn scroll_destination(&self, target_top: f64, page_offset: f64) -> f64 {
        target_top + page_offset - self.header_offset
    }

    /// Handles one link click. `measure_target` is `None` when the href
    /// resolved to nothing; otherwise it reports the target's viewport-relative
    /// top and is only called once the mobile menu is out of the way.
    pub fn navigate<V, E, M>(
        &self,
        href: &str,
        measure_target: Option<M>,
        viewport: &V,
        menu: Option<&MenuController<E>>,
    ) -> AnchorOutcome
    where
        V: Viewport,
        E: UiElement,
        M: FnOnce() -> f64,
    {
        let Some(measure_target) = measure_target else {
            warn!("anchor target `{}` not found on page", href);
            return AnchorOutcome::TargetMissing;
        };

        if viewport.width() <= self.mobile_breakpoint {
            if let Some(menu) = menu {
                menu.close();
            }
        }

        // Closing the menu can shift layout, so both readings come after it.
        let top = self.scroll_destination(measure_target(), viewport.scroll_offset());
        debug!("scrolling to `{}` at {}", href, top);
        viewport.scroll_to(top, ScrollBehavior::Smooth);
        AnchorOutcome::Scrolled { top }
    }
}
