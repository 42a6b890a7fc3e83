use std::cell::Cell;
use std::rc::Rc;

/// Runs a task once after a delay. In the browser this is `setTimeout`.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Cancel hook shared by every step of a deferred sequence.
///
/// Cancelling doesn't unschedule anything; pending steps see the flag and do
/// nothing when they fire.
#[derive(Debug, Clone, Default)]
pub struct TypingHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TypingHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}
