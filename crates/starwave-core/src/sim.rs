//! Deterministic host for running the engine off-browser.
//!
//! [`VirtualScheduler`] keeps timers and frame requests against a virtual
//! clock, [`RecordingSurface`] records every presentation toggle, and
//! [`Simulation`] advances time, delivering frames on a fixed refresh grid
//! (which can be changed or stalled) and timers in fire-time order.

use crate::click::ClickOutcome;
use crate::engine::Starfield;
use crate::geometry::Viewport;
use crate::ripple::WaveEvent;
use crate::schedule::{FrameHandle, Scheduler, Task, TimerHandle};
use crate::stars::StarId;
use crate::surface::{GallerySurface, Surface};
use fnv::{FnvHashMap, FnvHashSet};
use glam::DVec2;

#[derive(Clone, Copy, Debug)]
struct PendingTimer {
    fire_at: f64,
    seq: u32,
    task: Task,
}

#[derive(Debug, Default)]
pub struct VirtualScheduler {
    now: f64,
    next_id: u32,
    timers: FnvHashMap<TimerHandle, PendingTimer>,
    frames: Vec<FrameHandle>,
    pub frames_cancelled: u32,
    pub timers_cancelled: u32,
}

impl VirtualScheduler {
    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn live_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn live_frames(&self) -> usize {
        self.frames.len()
    }

    /// Pending tasks, earliest first.
    pub fn pending_tasks(&self) -> Vec<(f64, Task)> {
        let mut v: Vec<_> = self.timers.values().copied().collect();
        v.sort_by(|a, b| a.fire_at.total_cmp(&b.fire_at).then(a.seq.cmp(&b.seq)));
        v.into_iter().map(|p| (p.fire_at, p.task)).collect()
    }

    fn next_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn next_timer(&self) -> Option<(TimerHandle, PendingTimer)> {
        self.timers
            .iter()
            .min_by(|(_, a), (_, b)| a.fire_at.total_cmp(&b.fire_at).then(a.seq.cmp(&b.seq)))
            .map(|(h, p)| (*h, *p))
    }
}

impl Scheduler for VirtualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        let h = FrameHandle(self.next_id());
        self.frames.push(h);
        h
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.frames.len();
        self.frames.retain(|f| *f != handle);
        if self.frames.len() != before {
            self.frames_cancelled += 1;
        }
    }

    fn set_timeout(&mut self, delay_ms: f64, task: Task) -> TimerHandle {
        let id = self.next_id();
        let h = TimerHandle(id);
        self.timers.insert(
            h,
            PendingTimer {
                fire_at: self.now + delay_ms.max(0.0),
                seq: id,
                task,
            },
        );
        h
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        if self.timers.remove(&handle).is_some() {
            self.timers_cancelled += 1;
        }
    }
}

/// Surface that only remembers what it was told.
#[derive(Debug)]
pub struct RecordingSurface {
    pub viewport: Viewport,
    pub sparkling: FnvHashSet<StarId>,
    pub sparkle_events: FnvHashMap<StarId, u32>,
    pub wave_active: bool,
    pub wave_activations: u32,
    /// Activations that arrived while a wave was already active.
    pub overlapping_activations: u32,
    pub ripple_visible: bool,
    pub ripples_shown: Vec<WaveEvent>,
    pub gallery_mode: bool,
    pub gallery_exiting: bool,
    pub gallery_origin: Option<DVec2>,
    pub gallery_images: Vec<String>,
}

impl RecordingSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            sparkling: FnvHashSet::default(),
            sparkle_events: FnvHashMap::default(),
            wave_active: false,
            wave_activations: 0,
            overlapping_activations: 0,
            ripple_visible: false,
            ripples_shown: Vec::new(),
            gallery_mode: false,
            gallery_exiting: false,
            gallery_origin: None,
            gallery_images: Vec::new(),
        }
    }

    pub fn total_sparkles(&self) -> u32 {
        self.sparkle_events.values().sum()
    }
}

impl Surface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_sparkle(&mut self, star: StarId, on: bool) {
        if on {
            self.sparkling.insert(star);
            *self.sparkle_events.entry(star).or_insert(0) += 1;
        } else {
            self.sparkling.remove(&star);
        }
    }

    fn show_ripple(&mut self, wave: &WaveEvent) {
        self.ripple_visible = true;
        self.ripples_shown.push(*wave);
    }

    fn set_wave_active(&mut self, active: bool) {
        if active {
            if self.wave_active {
                self.overlapping_activations += 1;
            }
            self.wave_activations += 1;
        }
        self.wave_active = active;
    }

    fn clear_ripple(&mut self) {
        self.ripple_visible = false;
    }
}

impl GallerySurface for RecordingSurface {
    fn enter_gallery(&mut self, origin_percent: DVec2) {
        self.gallery_mode = true;
        self.gallery_origin = Some(origin_percent);
    }

    fn show_gallery_image(&mut self, src: &str) {
        self.gallery_images.push(src.to_string());
    }

    fn exit_gallery(&mut self) {
        self.gallery_mode = false;
        self.gallery_exiting = true;
    }

    fn finish_gallery_exit(&mut self) {
        self.gallery_exiting = false;
    }
}

pub struct Simulation {
    pub engine: Starfield,
    pub sched: VirtualScheduler,
    pub surface: RecordingSurface,
    frame_interval_ms: f64,
    frames_stalled: bool,
    frames_delivered: u64,
}

impl Simulation {
    pub fn new(engine: Starfield, viewport: Viewport, frame_interval_ms: f64) -> Self {
        Self {
            engine,
            sched: VirtualScheduler::default(),
            surface: RecordingSurface::new(viewport),
            frame_interval_ms: frame_interval_ms.max(1e-3),
            frames_stalled: false,
            frames_delivered: 0,
        }
    }

    pub fn now(&self) -> f64 {
        self.sched.now
    }

    pub fn frames_delivered(&self) -> u64 {
        self.frames_delivered
    }

    pub fn set_frame_interval(&mut self, frame_interval_ms: f64) {
        self.frame_interval_ms = frame_interval_ms.max(1e-3);
    }

    /// Stop (or resume) delivering frames, like a backgrounded tab.
    pub fn stall_frames(&mut self, stalled: bool) {
        self.frames_stalled = stalled;
    }

    /// Advance to `at`, then click at `origin`.
    pub fn click(&mut self, at: f64, origin: DVec2) -> ClickOutcome {
        self.run_until(at);
        self.engine
            .on_click(self.sched.now, origin, &mut self.sched, &mut self.surface)
    }

    /// Deliver every timer and frame due up to and including `until`.
    pub fn run_until(&mut self, until: f64) {
        loop {
            let next_frame = if self.frames_stalled || self.sched.frames.is_empty() {
                f64::INFINITY
            } else {
                self.next_vsync()
            };
            let next_timer = self.sched.next_timer();
            let timer_at = next_timer.map_or(f64::INFINITY, |(_, p)| p.fire_at);
            let next = timer_at.min(next_frame);
            if next > until {
                break;
            }
            match next_timer {
                Some((handle, pending)) if pending.fire_at <= next_frame => {
                    self.sched.timers.remove(&handle);
                    self.sched.now = self.sched.now.max(pending.fire_at);
                    self.engine.on_timer(
                        handle,
                        pending.task,
                        self.sched.now,
                        &mut self.sched,
                        &mut self.surface,
                    );
                }
                _ => {
                    self.sched.now = next_frame;
                    let due = std::mem::take(&mut self.sched.frames);
                    for handle in due {
                        self.frames_delivered += 1;
                        self.engine.on_frame(
                            handle,
                            self.sched.now,
                            &mut self.sched,
                            &mut self.surface,
                        );
                    }
                }
            }
        }
        self.sched.now = self.sched.now.max(until);
    }

    fn next_vsync(&self) -> f64 {
        let now = self.sched.now;
        let step = self.frame_interval_ms;
        let mut t = ((now / step).floor() + 1.0) * step;
        if t <= now {
            t += step;
        }
        t
    }
}
