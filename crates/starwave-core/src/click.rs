use crate::schedule::{Scheduler, Task, TimerHandle};
use glam::DVec2;

/// Result of feeding one click to the dispatcher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClickOutcome {
    /// A single-click timer is armed; the click may still become a double.
    Pending,
    /// Second click inside the window: the pending single click was cancelled.
    DoubleClick { origin: DVec2 },
}

/// Wait-and-see click classifier.
///
/// A click arms a timer for the double-click window. A second click before it
/// fires cancels it and resolves as a double click, so the single-click action
/// never runs ahead of a double click.
#[derive(Debug)]
pub struct ClickDispatcher {
    window_ms: f64,
    last_click: Option<f64>,
    pending: Option<TimerHandle>,
}

impl ClickDispatcher {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last_click: None,
            pending: None,
        }
    }

    pub fn on_click<H: Scheduler + ?Sized>(
        &mut self,
        now: f64,
        origin: DVec2,
        sched: &mut H,
    ) -> ClickOutcome {
        if let Some(t) = self.pending.take() {
            sched.clear_timeout(t);
        }
        match self.last_click {
            Some(last) if now - last < self.window_ms => {
                self.last_click = None;
                log::debug!("[click] double click at ({:.0},{:.0})", origin.x, origin.y);
                ClickOutcome::DoubleClick { origin }
            }
            _ => {
                self.last_click = Some(now);
                let task = Task::SingleClick { origin };
                self.pending = Some(sched.set_timeout(self.window_ms, task));
                ClickOutcome::Pending
            }
        }
    }

    /// Single-click timer delivery. True when `handle` is the live pending
    /// timer, which is then consumed.
    pub fn on_single_click_timer(&mut self, handle: TimerHandle) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            log::debug!("[click] stale single-click timer {:?} ignored", handle);
            false
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel<H: Scheduler + ?Sized>(&mut self, sched: &mut H) {
        if let Some(t) = self.pending.take() {
            sched.clear_timeout(t);
        }
        self.last_click = None;
    }
}
