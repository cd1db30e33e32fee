//! Host event-loop seam.
//!
//! The core never owns a clock or a callback. It asks the host for a frame or
//! a delayed [`Task`] and gets back a handle; the host later calls the engine
//! with that same handle. Any delivery whose handle no longer matches what the
//! engine stored is stale and dropped, and every superseded request is
//! cancelled through the host.

use crate::stars::StarId;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u32);

/// Work the engine defers through [`Scheduler::set_timeout`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Task {
    /// Debounced single click; fires once no second click arrived.
    SingleClick { origin: DVec2 },
    /// Forces a running ripple back to idle.
    RippleSafety,
    ClearSparkle { star: StarId },
    GalleryAdvance,
    GalleryExitDone,
}

pub trait Scheduler {
    /// Ask for one callback on the next display refresh.
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
    /// Deliver `task` after at least `delay_ms`.
    fn set_timeout(&mut self, delay_ms: f64, task: Task) -> TimerHandle;
    fn clear_timeout(&mut self, handle: TimerHandle);
}

/// Outstanding host requests owned by one ripple run.
#[derive(Debug, Default)]
pub struct CancelToken {
    pub frame: Option<FrameHandle>,
    pub safety: Option<TimerHandle>,
}

impl CancelToken {
    /// Cancel everything still outstanding. Safe to call repeatedly.
    pub fn cancel_all<S: Scheduler + ?Sized>(&mut self, sched: &mut S) {
        if let Some(f) = self.frame.take() {
            sched.cancel_frame(f);
        }
        if let Some(t) = self.safety.take() {
            sched.clear_timeout(t);
        }
    }
}
