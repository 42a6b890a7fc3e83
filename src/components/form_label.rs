use crate::dom::{FormInput, UiElement};

const LABEL_ACTIVE_CLASS: &str = "active";
const GROUP_FOCUSED_CLASS: &str = "focused";

/// Floats a form label above its field while the field is focused or filled.
pub struct FloatingLabel<E, I> {
    group: E,
    input: I,
    label: E,
}

impl<E: UiElement, I: FormInput> FloatingLabel<E, I> {
    pub fn new(group: E, input: I, label: E) -> Self {
        Self {
            group,
            input,
            label,
        }
    }

    /// Picks up values already present on load (autofill, restored forms).
    pub fn sync_initial(&self) {
        if !self.input.value().is_empty() {
            self.label.add_class(LABEL_ACTIVE_CLASS);
        }
    }

    pub fn on_focus(&self) {
        self.label.add_class(LABEL_ACTIVE_CLASS);
        self.group.add_class(GROUP_FOCUSED_CLASS);
    }

    pub fn on_blur(&self) {
        if self.input.value().is_empty() {
            self.label.remove_class(LABEL_ACTIVE_CLASS);
        }
        self.group.remove_class(GROUP_FOCUSED_CLASS);
    }
}
