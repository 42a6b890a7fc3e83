//! The slice of the DOM the controllers need.
//!
//! Flags are CSS classes, so most of this is class-list access. The browser
//! implementations live in `web::element`.

/// An element whose classes, inline style, `data-*` attributes and text can be
/// read and written.
///
/// Mutations never fail from the caller's point of view: a class-list call
/// the browser rejects is simply dropped.
pub trait UiElement {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);

    /// Flips `class` and returns whether it is now present.
    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    /// Sets one inline style property, e.g. `("box-shadow", "none")`.
    fn set_style(&self, property: &str, value: &str);

    /// Reads `data-<key>`.
    fn data(&self, key: &str) -> Option<String>;
    fn set_data(&self, key: &str, value: &str);

    fn text(&self) -> String;
    fn set_text(&self, text: &str);
}

/// A form control with a current value (`<input>` or `<textarea>`).
pub trait FormInput {
    fn value(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

/// The window as seen by the scroll-driven controllers.
pub trait Viewport {
    /// Vertical page scroll offset in CSS pixels.
    fn scroll_offset(&self) -> f64;
    /// Layout viewport width in CSS pixels.
    fn width(&self) -> f64;
    fn scroll_to(&self, top: f64, behavior: ScrollBehavior);
}

/// Something that reports when elements cross into the viewport, i.e. an
/// `IntersectionObserver`.
pub trait Watcher<E> {
    fn watch(&self, element: &E);
    fn unwatch(&self, element: &E);
}
