//! Ripple animator: one expanding wave at a time, sparkling the stars its
//! front passes over.
//!
//! `Idle -> Running` on trigger, back to `Idle` when the wave has expanded for
//! its full duration or when the safety timer fires first. The state enum is
//! the reentrancy lock; nothing else is consulted to decide whether a wave is
//! in flight.

use crate::config::EffectConfig;
use crate::geometry::Viewport;
use crate::perf::PerformanceMonitor;
use crate::proximity::{detect, WaveFront};
use crate::schedule::{CancelToken, FrameHandle, Scheduler, Task, TimerHandle};
use crate::stars::{StarId, StarRegistry};
use crate::surface::Surface;
use glam::DVec2;

/// One ripple in progress. Everything is fixed at trigger time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveEvent {
    /// Click point in viewport pixels.
    pub origin: DVec2,
    pub start_time: f64,
    pub duration_ms: f64,
    pub max_radius: f64,
    /// Viewport at trigger, used for placing the visuals.
    pub viewport: Viewport,
    /// Final diameter of the wave layer in pixels.
    pub visual_size: f64,
}

impl WaveEvent {
    pub fn new(origin: DVec2, now: f64, viewport: Viewport, config: &EffectConfig) -> Self {
        let max_dim = viewport.max_dimension();
        Self {
            origin,
            start_time: now,
            duration_ms: config.wave_duration_ms,
            max_radius: max_dim * config.max_radius_factor,
            viewport,
            visual_size: max_dim * config.visual_size_factor,
        }
    }

    /// Elapsed time, clamped at zero: frame timestamps may predate the trigger.
    #[inline]
    pub fn elapsed(&self, now: f64) -> f64 {
        (now - self.start_time).max(0.0)
    }

    #[inline]
    pub fn radius_at(&self, now: f64) -> f64 {
        self.max_radius * (self.elapsed(now) / self.duration_ms)
    }

    #[inline]
    pub fn origin_percent(&self) -> DVec2 {
        self.viewport.to_percent(self.origin)
    }
}

#[derive(Debug)]
struct WaveRun {
    wave: WaveEvent,
    last_poll: Option<f64>,
    low_fps_ticks: u32,
    token: CancelToken,
}

#[derive(Debug)]
enum RippleState {
    Idle,
    Running(WaveRun),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    Complete,
    SafetyTimeout,
    Shutdown,
}

pub struct RippleAnimator {
    state: RippleState,
    perf: PerformanceMonitor,
    runs_started: u64,
    polls: u64,
    detections: u64,
}

impl RippleAnimator {
    pub fn new(config: &EffectConfig) -> Self {
        Self {
            state: RippleState::Idle,
            perf: PerformanceMonitor::new(config),
            runs_started: 0,
            polls: 0,
            detections: 0,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.state, RippleState::Running(_))
    }

    pub fn wave(&self) -> Option<&WaveEvent> {
        match &self.state {
            RippleState::Running(run) => Some(&run.wave),
            RippleState::Idle => None,
        }
    }

    pub fn perf(&self) -> &PerformanceMonitor {
        &self.perf
    }

    pub fn runs_started(&self) -> u64 {
        self.runs_started
    }

    /// Poll ticks reached, whether or not detection ran on them.
    pub fn polls(&self) -> u64 {
        self.polls
    }

    /// Number of proximity passes actually run (skipped ticks excluded).
    pub fn detections(&self) -> u64 {
        self.detections
    }

    /// Start a wave at `origin`. A no-op returning false while one is running.
    pub fn trigger<H, S>(
        &mut self,
        origin: DVec2,
        now: f64,
        config: &EffectConfig,
        sched: &mut H,
        surface: &mut S,
    ) -> bool
    where
        H: Scheduler + ?Sized,
        S: Surface + ?Sized,
    {
        if self.is_running() {
            log::debug!("[ripple] wave already running; trigger ignored");
            return false;
        }
        let viewport = surface.viewport();
        if viewport.is_degenerate() {
            log::debug!("[ripple] degenerate viewport {:?}; trigger ignored", viewport);
            return false;
        }
        let wave = WaveEvent::new(origin, now, viewport, config);
        self.perf.restart_window();
        surface.show_ripple(&wave);
        surface.set_wave_active(true);
        let token = CancelToken {
            frame: Some(sched.request_frame()),
            safety: Some(sched.set_timeout(config.safety_timeout_ms, Task::RippleSafety)),
        };
        self.state = RippleState::Running(WaveRun {
            wave,
            last_poll: None,
            low_fps_ticks: 0,
            token,
        });
        self.runs_started += 1;
        log::info!(
            "[ripple] start at ({:.0},{:.0}) max_radius={:.0}px",
            origin.x,
            origin.y,
            wave.max_radius
        );
        true
    }

    /// One animation step. Frames not requested by the live run are ignored.
    pub fn on_frame<H, S>(
        &mut self,
        handle: FrameHandle,
        now: f64,
        config: &EffectConfig,
        stars: &mut StarRegistry,
        sched: &mut H,
        surface: &mut S,
    ) where
        H: Scheduler + ?Sized,
        S: Surface + ?Sized,
    {
        let run = match &mut self.state {
            RippleState::Running(run) if run.token.frame == Some(handle) => run,
            _ => {
                log::debug!("[ripple] stale frame {:?} ignored", handle);
                return;
            }
        };
        run.token.frame = None;

        if run.wave.elapsed(now) >= run.wave.duration_ms {
            self.stop(StopReason::Complete, sched, surface);
            return;
        }

        let interval = self.perf.sample(now, config);
        let due = run.last_poll.map_or(true, |t| now - t >= interval);
        if due {
            run.last_poll = Some(now);
            self.polls += 1;
            if should_check(&mut run.low_fps_ticks, self.perf.fps(), config) {
                let front = WaveFront {
                    center: run.wave.origin,
                    radius: run.wave.radius_at(now),
                    max_radius: run.wave.max_radius,
                };
                let matches = detect(&front, surface.viewport(), config.thickness_fraction, stars);
                let applied = apply_sparkles(
                    &matches,
                    stars,
                    config.sparkle_clear_delay_ms,
                    sched,
                    surface,
                );
                self.detections += 1;
                log::debug!(
                    "[ripple] poll r={:.0}px ({:.0}%) sparkled={}",
                    front.radius,
                    front.progress() * 100.0,
                    applied
                );
            }
        }
        run.token.frame = Some(sched.request_frame());
    }

    /// Safety backstop: forces the run to idle if it is still going.
    pub fn on_safety_timeout<H, S>(&mut self, handle: TimerHandle, sched: &mut H, surface: &mut S)
    where
        H: Scheduler + ?Sized,
        S: Surface + ?Sized,
    {
        match &mut self.state {
            RippleState::Running(run) if run.token.safety == Some(handle) => {
                run.token.safety = None;
            }
            _ => {
                log::debug!("[ripple] stale safety timer {:?} ignored", handle);
                return;
            }
        }
        log::warn!("[ripple] safety timeout reached; forcing cleanup");
        self.stop(StopReason::SafetyTimeout, sched, surface);
    }

    /// Tear down the running wave, if any: cancel its outstanding host
    /// requests and clear the wave visuals, then release the lock.
    pub fn stop<H, S>(&mut self, reason: StopReason, sched: &mut H, surface: &mut S)
    where
        H: Scheduler + ?Sized,
        S: Surface + ?Sized,
    {
        if let RippleState::Running(run) = &mut self.state {
            run.token.cancel_all(sched);
            surface.set_wave_active(false);
            surface.clear_ripple();
            log::info!("[ripple] stopped ({:?})", reason);
            self.state = RippleState::Idle;
        }
    }
}

/// Low-fps skip policy: under the threshold only every Nth poll tick runs
/// detection, starting with the first low-fps tick.
fn should_check(low_fps_ticks: &mut u32, fps: u32, config: &EffectConfig) -> bool {
    if fps >= config.low_fps_threshold {
        *low_fps_ticks = 0;
        return true;
    }
    let check = *low_fps_ticks % config.low_fps_check_every == 0;
    *low_fps_ticks = (*low_fps_ticks + 1) % config.low_fps_check_every;
    check
}

/// Flag a detection batch as sparkling, each with its own clear timer.
/// Returns how many stars were newly flagged.
pub fn apply_sparkles<H, S>(
    matches: &[StarId],
    stars: &mut StarRegistry,
    clear_delay_ms: f64,
    sched: &mut H,
    surface: &mut S,
) -> usize
where
    H: Scheduler + ?Sized,
    S: Surface + ?Sized,
{
    let mut applied = 0;
    for &id in matches {
        if stars.get(id).map_or(true, |s| s.is_sparkling()) {
            continue;
        }
        let timer = sched.set_timeout(clear_delay_ms, Task::ClearSparkle { star: id });
        if stars.begin_sparkle(id, timer) {
            surface.set_sparkle(id, true);
            applied += 1;
        } else {
            sched.clear_timeout(timer);
        }
    }
    applied
}

/// Clear timer delivery for one star.
pub fn clear_sparkle<S>(
    star: StarId,
    handle: TimerHandle,
    stars: &mut StarRegistry,
    surface: &mut S,
) where
    S: Surface + ?Sized,
{
    if stars.end_sparkle(star, handle) {
        surface.set_sparkle(star, false);
    }
}
