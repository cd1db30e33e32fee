use crate::config::EffectConfig;
use crate::constants::INITIAL_FPS;

/// Frame-rate sampler driving the adaptive poll interval.
///
/// Frames are counted over a fixed window; at each window boundary the count
/// becomes the new `fps` and the poll interval is re-derived from the step
/// table. Between boundaries both values hold still, however irregular the
/// frames are.
#[derive(Clone, Debug)]
pub struct PerformanceMonitor {
    frame_count: u32,
    window_start: Option<f64>,
    window_ms: f64,
    fps: u32,
    poll_interval: f64,
}

impl PerformanceMonitor {
    pub fn new(config: &EffectConfig) -> Self {
        Self {
            frame_count: 0,
            window_start: None,
            window_ms: config.fps_window_ms,
            fps: INITIAL_FPS,
            poll_interval: config.default_poll_interval_ms,
        }
    }

    /// Count one frame at `now`; returns the current poll interval.
    pub fn sample(&mut self, now: f64, config: &EffectConfig) -> f64 {
        // The first frame only opens the window.
        let Some(start) = self.window_start else {
            self.window_start = Some(now);
            return self.poll_interval;
        };
        self.frame_count += 1;
        if now - start >= self.window_ms {
            self.fps = self.frame_count;
            self.frame_count = 0;
            self.window_start = Some(now);
            let next = config.poll_interval_for(self.fps);
            if next != self.poll_interval {
                log::debug!(
                    "[perf] fps={} poll interval {}ms -> {}ms",
                    self.fps,
                    self.poll_interval,
                    next
                );
            }
            self.poll_interval = next;
        }
        self.poll_interval
    }

    /// Drop the partial window so idle time between waves is not counted as
    /// slow frames. `fps` and the poll interval carry over.
    pub fn restart_window(&mut self) {
        self.frame_count = 0;
        self.window_start = None;
    }

    #[inline]
    pub fn poll_interval(&self) -> f64 {
        self.poll_interval
    }

    #[inline]
    pub fn fps(&self) -> u32 {
        self.fps
    }
}
