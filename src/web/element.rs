use wasm_bindgen::JsCast;
use web_sys::{
    Element, EventTarget, HtmlElement, HtmlInputElement, HtmlTextAreaElement, ScrollToOptions,
    Window,
};

use crate::dom::{FormInput, ScrollBehavior, UiElement, Viewport};

// Class-list and dataset calls only fail on malformed tokens, which the
// controllers never produce.
impl UiElement for HtmlElement {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        let _ = self.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.class_list().remove_1(class);
    }

    fn set_style(&self, property: &str, value: &str) {
        let _ = self.style().set_property(property, value);
    }

    fn data(&self, key: &str) -> Option<String> {
        self.dataset().get(key)
    }

    fn set_data(&self, key: &str, value: &str) {
        let _ = self.dataset().set(key, value);
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }
}

/// The control inside a `.form-group`.
#[derive(Clone)]
pub enum FieldElement {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl FieldElement {
    pub fn from_element(element: Element) -> Option<Self> {
        match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(Self::Input(input)),
            Err(element) => element
                .dyn_into::<HtmlTextAreaElement>()
                .ok()
                .map(Self::TextArea),
        }
    }

    pub fn event_target(&self) -> &EventTarget {
        match self {
            Self::Input(input) => input.as_ref(),
            Self::TextArea(area) => area.as_ref(),
        }
    }
}

impl FormInput for FieldElement {
    fn value(&self) -> String {
        match self {
            Self::Input(input) => input.value(),
            Self::TextArea(area) => area.value(),
        }
    }
}

impl Viewport for Window {
    fn scroll_offset(&self) -> f64 {
        self.scroll_y().unwrap_or(0.0)
    }

    fn width(&self) -> f64 {
        self.inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(match behavior {
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        });
        self.scroll_to_with_scroll_to_options(&options);
    }
}
