use crate::dom::UiElement;

pub fn background_offset(scroll: f64, factor: f64) -> f64 {
    scroll * factor
}

/// Shifts the hero background at a fraction of the page scroll.
pub struct Parallax<E> {
    hero: E,
    factor: f64,
}

impl<E: UiElement> Parallax<E> {
    pub fn new(hero: E, factor: f64) -> Self {
        Self { hero, factor }
    }

    pub fn on_scroll(&self, current: f64) {
        let offset = background_offset(current, self.factor);
        self.hero
            .set_style("background-position-y", &format!("{}px", offset));
    }
}
