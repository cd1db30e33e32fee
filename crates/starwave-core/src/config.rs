//! Runtime configuration for the effect engine.
//!
//! Every tunable the engine reads lives in [`EffectConfig`]. Front-ends start
//! from `EffectConfig::default()` and override fields as needed; the engine
//! refuses to start with an inconsistent configuration.

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("wave thickness fraction {0} outside [0.05, 0.15]")]
    ThicknessOutOfRange(f64),
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("safety timeout {safety_ms}ms must exceed wave duration {wave_ms}ms")]
    SafetyTooShort { safety_ms: f64, wave_ms: f64 },
    #[error("poll step table is empty")]
    EmptyPollTable,
    #[error("poll step table must start at 0 fps and ascend strictly (step {0})")]
    UnorderedPollTable(usize),
    #[error("low-fps check cadence must be at least 1")]
    ZeroCadence,
}

/// One row of the fps -> poll interval step function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PollStep {
    pub min_fps: u32,
    pub interval_ms: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EffectConfig {
    pub star_count: usize,
    pub double_click_window_ms: f64,
    pub thickness_fraction: f64,
    pub wave_duration_ms: f64,
    pub max_radius_factor: f64,
    pub visual_size_factor: f64,
    pub sparkle_clear_delay_ms: f64,
    pub safety_timeout_ms: f64,
    pub fps_window_ms: f64,
    pub default_poll_interval_ms: f64,
    pub poll_steps: Vec<PollStep>,
    pub low_fps_threshold: u32,
    pub low_fps_check_every: u32,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            star_count: STAR_COUNT,
            double_click_window_ms: DOUBLE_CLICK_WINDOW_MS,
            thickness_fraction: WAVE_THICKNESS_FRACTION,
            wave_duration_ms: WAVE_DURATION_MS,
            max_radius_factor: WAVE_MAX_RADIUS_FACTOR,
            visual_size_factor: WAVE_VISUAL_SIZE_FACTOR,
            sparkle_clear_delay_ms: SPARKLE_CLEAR_DELAY_MS,
            safety_timeout_ms: RIPPLE_SAFETY_TIMEOUT_MS,
            fps_window_ms: FPS_WINDOW_MS,
            default_poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            poll_steps: POLL_STEPS
                .iter()
                .map(|&(min_fps, interval_ms)| PollStep {
                    min_fps,
                    interval_ms,
                })
                .collect(),
            low_fps_threshold: LOW_FPS_THRESHOLD,
            low_fps_check_every: LOW_FPS_CHECK_EVERY,
        }
    }
}

impl EffectConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(WAVE_THICKNESS_FRACTION_MIN..=WAVE_THICKNESS_FRACTION_MAX)
            .contains(&self.thickness_fraction)
        {
            return Err(ConfigError::ThicknessOutOfRange(self.thickness_fraction));
        }
        let positives = [
            ("double_click_window_ms", self.double_click_window_ms),
            ("wave_duration_ms", self.wave_duration_ms),
            ("max_radius_factor", self.max_radius_factor),
            ("visual_size_factor", self.visual_size_factor),
            ("sparkle_clear_delay_ms", self.sparkle_clear_delay_ms),
            ("safety_timeout_ms", self.safety_timeout_ms),
            ("fps_window_ms", self.fps_window_ms),
            ("default_poll_interval_ms", self.default_poll_interval_ms),
        ];
        for (name, value) in positives {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.safety_timeout_ms <= self.wave_duration_ms {
            return Err(ConfigError::SafetyTooShort {
                safety_ms: self.safety_timeout_ms,
                wave_ms: self.wave_duration_ms,
            });
        }
        validate_poll_steps(&self.poll_steps)?;
        if self.low_fps_check_every == 0 {
            return Err(ConfigError::ZeroCadence);
        }
        Ok(())
    }

    /// Poll interval for a measured frame rate.
    pub fn poll_interval_for(&self, fps: u32) -> f64 {
        self.poll_steps
            .iter()
            .rev()
            .find(|s| fps >= s.min_fps)
            .map(|s| s.interval_ms)
            .unwrap_or(self.default_poll_interval_ms)
    }
}

fn validate_poll_steps(steps: &[PollStep]) -> Result<(), ConfigError> {
    let first = steps.first().ok_or(ConfigError::EmptyPollTable)?;
    if first.min_fps != 0 {
        return Err(ConfigError::UnorderedPollTable(0));
    }
    for (i, pair) in steps.windows(2).enumerate() {
        if pair[1].min_fps <= pair[0].min_fps {
            return Err(ConfigError::UnorderedPollTable(i + 1));
        }
    }
    for (i, s) in steps.iter().enumerate() {
        if s.interval_ms.is_nan() || s.interval_ms <= 0.0 {
            return Err(ConfigError::UnorderedPollTable(i));
        }
    }
    Ok(())
}
