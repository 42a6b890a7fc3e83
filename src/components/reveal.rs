use log::debug;

use crate::dom::{UiElement, Watcher};

const REVEAL_CLASS: &str = "animate";
const STAGGERED_CLASS: &str = "skill-card";
const DELAY_KEY: &str = "delay";

/// One intersection report for a watched element.
#[derive(Debug, Clone)]
pub struct IntersectionEntry<E> {
    pub target: E,
    pub is_intersecting: bool,
}

/// Formats a delay in seconds without float noise (`0.3`, not
/// `0.30000000000000004`).
fn format_delay(seconds: f64) -> String {
    let rounded = (seconds * 1000.0).round() / 1000.0;
    format!("{}", rounded)
}

/// Marks elements `animate` the first time they scroll into view.
///
/// Revealing is one-way: the element is unwatched right after, so leaving and
/// re-entering the viewport changes nothing.
#[derive(Debug, Clone, Copy)]
pub struct RevealOnScroll {
    stagger_step: f64,
}

impl RevealOnScroll {
    pub fn new(stagger_step: f64) -> Self {
        Self { stagger_step }
    }

    /// Watches cards that reveal one after another. Each card's delay comes
    /// from its position in `cards` and is stored on the element once.
    pub fn register_staggered<E, W>(&self, watcher: &W, cards: &[E])
    where
        E: UiElement,
        W: Watcher<E>,
    {
        for (index, card) in cards.iter().enumerate() {
            card.set_data(DELAY_KEY, &format_delay(index as f64 * self.stagger_step));
            watcher.watch(card);
        }
    }

    pub fn register<E, W>(&self, watcher: &W, elements: &[E])
    where
        E: UiElement,
        W: Watcher<E>,
    {
        for element in elements {
            watcher.watch(element);
        }
    }

    /// Returns how many elements were revealed by this batch.
    pub fn handle_entries<E, W, I>(&self, watcher: &W, entries: I) -> usize
    where
        E: UiElement,
        W: Watcher<E>,
        I: IntoIterator<Item = IntersectionEntry<E>>,
    {
        let mut revealed = 0;
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            let target = entry.target;
            target.add_class(REVEAL_CLASS);
            if target.has_class(STAGGERED_CLASS) {
                let delay = target.data(DELAY_KEY).unwrap_or_else(|| "0".to_string());
                target.set_style("transition-delay", &format!("{}s", delay));
            }
            watcher.unwatch(&target);
            revealed += 1;
        }
        if revealed > 0 {
            debug!("revealed {} element(s)", revealed);
        }
        revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeElement, FakeWatcher};

    fn entry(target: &FakeElement, is_intersecting: bool) -> IntersectionEntry<FakeElement> {
        IntersectionEntry {
            target: target.clone(),
            is_intersecting,
        }
    }

    #[test]
    fn delays_are_clean_decimals() {
        assert_eq!(format_delay(0.0), "0");
        assert_eq!(format_delay(3.0 * 0.1), "0.3");
        assert_eq!(format_delay(7.0 * 0.1), "0.7");
        assert_eq!(format_delay(1.0), "1");
    }

    #[test]
    fn staggered_cards_get_indexed_delay() {
        let watcher = FakeWatcher::default();
        let cards: Vec<_> = (0..4)
            .map(|_| FakeElement::with_classes(&["skill-card"]))
            .collect();
        RevealOnScroll::new(0.1).register_staggered(&watcher, &cards);

        assert_eq!(watcher.len(), 4);
        assert_eq!(cards[0].data("delay").as_deref(), Some("0"));
        assert_eq!(cards[1].data("delay").as_deref(), Some("0.1"));
        assert_eq!(cards[3].data("delay").as_deref(), Some("0.3"));
    }

    #[test]
    fn intersecting_card_gets_transition_delay() {
        let watcher = FakeWatcher::default();
        let cards: Vec<_> = (0..3)
            .map(|_| FakeElement::with_classes(&["skill-card"]))
            .collect();
        let reveal = RevealOnScroll::new(0.1);
        reveal.register_staggered(&watcher, &cards);

        let revealed = reveal.handle_entries(&watcher, vec![entry(&cards[2], true)]);
        assert_eq!(revealed, 1);
        assert!(cards[2].has_class("animate"));
        assert_eq!(cards[2].style("transition-delay").as_deref(), Some("0.2s"));
        assert!(!watcher.is_watching(&cards[2]));
        assert!(watcher.is_watching(&cards[0]));
    }

    #[test]
    fn plain_sections_have_no_delay() {
        let watcher = FakeWatcher::default();
        let title = FakeElement::with_classes(&["section-title"]);
        let reveal = RevealOnScroll::new(0.1);
        reveal.register(&watcher, std::slice::from_ref(&title));

        reveal.handle_entries(&watcher, vec![entry(&title, true)]);
        assert!(title.has_class("animate"));
        assert_eq!(title.style("transition-delay"), None);
    }

    #[test]
    fn unregistered_card_defaults_to_zero_delay() {
        let watcher = FakeWatcher::default();
        let card = FakeElement::with_classes(&["skill-card"]);
        RevealOnScroll::new(0.1).handle_entries(&watcher, vec![entry(&card, true)]);
        assert_eq!(card.style("transition-delay").as_deref(), Some("0s"));
    }

    #[test]
    fn non_intersecting_entries_are_ignored() {
        let watcher = FakeWatcher::default();
        let about = FakeElement::with_classes(&["about-text"]);
        let reveal = RevealOnScroll::new(0.1);
        reveal.register(&watcher, std::slice::from_ref(&about));

        assert_eq!(reveal.handle_entries(&watcher, vec![entry(&about, false)]), 0);
        assert!(!about.has_class("animate"));
        assert!(watcher.is_watching(&about));
    }

    #[test]
    fn reveal_is_permanent() {
        let watcher = FakeWatcher::default();
        let card = FakeElement::with_classes(&["project-card"]);
        let reveal = RevealOnScroll::new(0.1);
        reveal.register(&watcher, std::slice::from_ref(&card));

        reveal.handle_entries(&watcher, vec![entry(&card, true)]);
        reveal.handle_entries(&watcher, vec![entry(&card, false)]);
        reveal.handle_entries(&watcher, vec![entry(&card, true), entry(&card, false)]);
        assert!(card.has_class("animate"));
        assert!(!watcher.is_watching(&card));
    }

    #[test]
    fn batch_reveals_only_intersecting() {
        let watcher = FakeWatcher::default();
        let a = FakeElement::with_classes(&["contact-form"]);
        let b = FakeElement::with_classes(&["contact-info"]);
        let reveal = RevealOnScroll::new(0.1);
        reveal.register(&watcher, &[a.clone(), b.clone()]);

        let revealed = reveal.handle_entries(&watcher, vec![entry(&a, true), entry(&b, false)]);
        assert_eq!(revealed, 1);
        assert!(a.has_class("animate"));
        assert!(!b.has_class("animate"));
        assert_eq!(watcher.len(), 1);
    }
}
