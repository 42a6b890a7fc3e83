//! In-memory stand-ins for the page, used by the component tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::dom::{FormInput, ScrollBehavior, UiElement, Viewport, Watcher};
use crate::scheduler::Scheduler;

#[derive(Debug, Default)]
struct ElementState {
    classes: BTreeSet<String>,
    style: BTreeMap<String, String>,
    data: BTreeMap<String, String>,
    text: String,
    value: String,
}

/// Cloning shares the underlying element, like holding two references to one
/// DOM node.
#[derive(Debug, Clone, Default)]
pub struct FakeElement(Rc<RefCell<ElementState>>);

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes(classes: &[&str]) -> Self {
        let element = Self::new();
        for class in classes {
            element.add_class(class);
        }
        element
    }

    pub fn with_text(text: &str) -> Self {
        let element = Self::new();
        element.set_text(text);
        element
    }

    pub fn set_value(&self, value: &str) {
        self.0.borrow_mut().value = value.to_string();
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().style.get(property).cloned()
    }
}

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl UiElement for FakeElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    fn add_class(&self, class: &str) {
        self.0.borrow_mut().classes.insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.remove(class);
    }

    fn set_style(&self, property: &str, value: &str) {
        self.0
            .borrow_mut()
            .style
            .insert(property.to_string(), value.to_string());
    }

    fn data(&self, key: &str) -> Option<String> {
        self.0.borrow().data.get(key).cloned()
    }

    fn set_data(&self, key: &str, value: &str) {
        self.0
            .borrow_mut()
            .data
            .insert(key.to_string(), value.to_string());
    }

    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }
}

impl FormInput for FakeElement {
    fn value(&self) -> String {
        self.0.borrow().value.clone()
    }
}

#[derive(Debug)]
pub struct FakeViewport {
    pub offset: Cell<f64>,
    pub width: Cell<f64>,
    pub scrolls: RefCell<Vec<(f64, ScrollBehavior)>>,
}

impl FakeViewport {
    pub fn new(offset: f64, width: f64) -> Self {
        Self {
            offset: Cell::new(offset),
            width: Cell::new(width),
            scrolls: RefCell::new(Vec::new()),
        }
    }
}

impl Viewport for FakeViewport {
    fn scroll_offset(&self) -> f64 {
        self.offset.get()
    }

    fn width(&self) -> f64 {
        self.width.get()
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        self.scrolls.borrow_mut().push((top, behavior));
    }
}

#[derive(Debug, Default)]
pub struct FakeWatcher {
    watched: RefCell<Vec<FakeElement>>,
}

impl FakeWatcher {
    pub fn is_watching(&self, element: &FakeElement) -> bool {
        self.watched.borrow().contains(element)
    }

    pub fn len(&self) -> usize {
        self.watched.borrow().len()
    }
}

impl Watcher<FakeElement> for FakeWatcher {
    fn watch(&self, element: &FakeElement) {
        if !self.is_watching(element) {
            self.watched.borrow_mut().push(element.clone());
        }
    }

    fn unwatch(&self, element: &FakeElement) {
        self.watched.borrow_mut().retain(|e| e != element);
    }
}

struct Pending {
    due: u64,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

/// A scheduler driven by hand: tasks only run inside [`advance_to`].
///
/// [`advance_to`]: ManualScheduler::advance_to
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<u64>,
    seq: Cell<u64>,
    pending: RefCell<Vec<Pending>>,
}

impl ManualScheduler {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn now(&self) -> u64 {
        self.now.get()
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Runs every task due at or before `time`, in due order, including tasks
    /// scheduled by the tasks it runs.
    pub fn advance_to(&self, time: u64) {
        loop {
            let next = {
                let mut pending = self.pending.borrow_mut();
                let idx = pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= time)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(idx, _)| idx);
                let next = idx.map(|idx| pending.remove(idx));
                next
            };
            match next {
                Some(p) => {
                    self.now.set(p.due);
                    (p.task)();
                }
                None => break,
            }
        }
        self.now.set(time);
    }

    pub fn run_all(&self) {
        loop {
            let latest = self.pending.borrow().iter().map(|p| p.due).max();
            match latest {
                Some(due) => self.advance_to(due),
                None => break,
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        self.pending.borrow_mut().push(Pending {
            due: self.now.get() + u64::from(delay_ms),
            seq,
            task,
        });
    }
}
