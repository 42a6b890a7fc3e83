use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::dom::UiElement;
use crate::scheduler::{Scheduler, TypingHandle};

/// Growing prefixes of a string, one character per step.
///
/// Characters are Unicode scalar values, so multi-byte text types one visible
/// character at a time.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    revealed: usize,
    interval_ms: u32,
}

impl Typewriter {
    pub fn new(text: &str, interval_ms: u32) -> Self {
        Self {
            chars: text.chars().collect(),
            revealed: 0,
            interval_ms,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn is_done(&self) -> bool {
        self.revealed >= self.chars.len()
    }

    /// Time from the first character to the final, empty step.
    pub fn duration_ms(&self) -> u32 {
        char_span_ms(self.chars.len(), self.interval_ms)
    }
}

impl Iterator for Typewriter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.revealed += 1;
        Some(self.chars[..self.revealed].iter().collect())
    }
}

fn char_span_ms(chars: usize, interval_ms: u32) -> u32 {
    u32::try_from(chars)
        .unwrap_or(u32::MAX)
        .saturating_mul(interval_ms)
}

/// Clears `element` and types `text` into it: the first character right away,
/// the rest one `interval_ms` apart.
pub fn type_into<E>(
    element: E,
    text: &str,
    interval_ms: u32,
    scheduler: Rc<dyn Scheduler>,
    handle: TypingHandle,
) where
    E: UiElement + 'static,
{
    element.set_text("");
    let steps = Rc::new(RefCell::new(Typewriter::new(text, interval_ms)));
    step(element, steps, scheduler, handle);
}

fn step<E>(
    element: E,
    steps: Rc<RefCell<Typewriter>>,
    scheduler: Rc<dyn Scheduler>,
    handle: TypingHandle,
) where
    E: UiElement + 'static,
{
    if handle.is_cancelled() {
        return;
    }
    let (next, interval) = {
        let mut steps = steps.borrow_mut();
        let next = steps.next();
        (next, steps.interval_ms())
    };
    if let Some(prefix) = next {
        element.set_text(&prefix);
        let later = Rc::clone(&scheduler);
        scheduler.schedule(
            interval,
            Box::new(move || step(element, steps, later, handle)),
        );
    }
}

/// Timing of the hero heading and subtitle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroTiming {
    pub title_interval_ms: u32,
    pub subtitle_interval_ms: u32,
    pub subtitle_pause_ms: u32,
}

impl Default for HeroTiming {
    fn default() -> Self {
        Self {
            title_interval_ms: 100,
            subtitle_interval_ms: 50,
            subtitle_pause_ms: 200,
        }
    }
}

impl HeroTiming {
    /// When the subtitle starts, counted from the start of the title.
    pub fn subtitle_start_ms(&self, title_chars: usize) -> u32 {
        char_span_ms(title_chars, self.title_interval_ms).saturating_add(self.subtitle_pause_ms)
    }
}

/// A running hero sequence. Remembers the full texts so the headings can be
/// put back when typing is abandoned partway.
#[derive(Debug)]
pub struct HeroTyping<E> {
    handle: TypingHandle,
    title: E,
    subtitle: E,
    title_text: String,
    subtitle_text: String,
}

impl<E: UiElement> HeroTyping<E> {
    pub fn handle(&self) -> &TypingHandle {
        &self.handle
    }

    /// Stops typing and leaves the headings as they are.
    pub fn cancel(&self) {
        self.handle.cancel();
    }

    /// Stops typing and writes both full texts back.
    pub fn restore(&self) {
        self.handle.cancel();
        self.title.set_text(&self.title_text);
        self.subtitle.set_text(&self.subtitle_text);
    }
}

/// Types the hero title, then the subtitle once the title has had time to
/// finish. Both elements are emptied immediately.
pub fn start_hero<E>(
    title: E,
    subtitle: E,
    timing: HeroTiming,
    scheduler: Rc<dyn Scheduler>,
) -> HeroTyping<E>
where
    E: UiElement + Clone + 'static,
{
    let handle = TypingHandle::new();
    let title_text = title.text();
    let subtitle_text = subtitle.text();
    subtitle.set_text("");

    let subtitle_start = timing.subtitle_start_ms(title_text.chars().count());
    debug!(
        "typing hero title ({} chars), subtitle at {}ms",
        title_text.chars().count(),
        subtitle_start
    );

    type_into(
        title.clone(),
        &title_text,
        timing.title_interval_ms,
        Rc::clone(&scheduler),
        handle.clone(),
    );

    let subtitle_element = subtitle.clone();
    let subtitle_typed = subtitle_text.clone();
    let subtitle_handle = handle.clone();
    let subtitle_scheduler = Rc::clone(&scheduler);
    scheduler.schedule(
        subtitle_start,
        Box::new(move || {
            if subtitle_handle.is_cancelled() {
                return;
            }
            type_into(
                subtitle_element,
                &subtitle_typed,
                timing.subtitle_interval_ms,
                subtitle_scheduler,
                subtitle_handle,
            );
        }),
    );

    HeroTyping {
        handle,
        title,
        subtitle,
        title_text,
        subtitle_text,
    }
}
