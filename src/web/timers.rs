use gloo_timers::callback::Timeout;

use crate::scheduler::Scheduler;

/// `setTimeout`-backed scheduler. Timeouts are fire-and-forget; cancellation
/// goes through [`TypingHandle`](crate::scheduler::TypingHandle).
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}
