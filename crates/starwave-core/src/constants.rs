/// Timing and geometry tuning constants for the ripple/sparkle core.
///
/// All durations are milliseconds on the host's monotonic clock. These are
/// the defaults behind `EffectConfig::default()`.

// Starfield
pub const STAR_COUNT: usize = 175;
pub const STAR_LARGE_THRESHOLD: f64 = 0.7; // size draw above this -> large
pub const STAR_MEDIUM_THRESHOLD: f64 = 0.4; // size draw above this -> medium
pub const TWINKLE_DELAY_MAX_S: f64 = 3.0;
pub const TWINKLE_DURATION_MIN_S: f64 = 2.0;
pub const TWINKLE_DURATION_SPAN_S: f64 = 2.0;

// Click classification
pub const DOUBLE_CLICK_WINDOW_MS: f64 = 300.0;

// Wave front
pub const WAVE_DURATION_MS: f64 = 2100.0; // matches the CSS wave animation
pub const WAVE_MAX_RADIUS_FACTOR: f64 = 1.5; // x max(viewport w, h)
pub const WAVE_VISUAL_SIZE_FACTOR: f64 = 2.0; // wave-layer --max-size, x max(w, h)
pub const WAVE_THICKNESS_FRACTION: f64 = 0.06;
pub const WAVE_THICKNESS_FRACTION_MIN: f64 = 0.05;
pub const WAVE_THICKNESS_FRACTION_MAX: f64 = 0.15;
pub const RIPPLE_SAFETY_TIMEOUT_MS: f64 = 3000.0;

// Sparkle
pub const SPARKLE_CLEAR_DELAY_MS: f64 = 600.0; // matches the CSS sparkle animation

// Adaptive polling
pub const FPS_WINDOW_MS: f64 = 1000.0;
pub const INITIAL_FPS: u32 = 60;
pub const DEFAULT_POLL_INTERVAL_MS: f64 = 200.0;
pub const LOW_FPS_THRESHOLD: u32 = 45; // below this, detection runs every Nth poll
pub const LOW_FPS_CHECK_EVERY: u32 = 5;

/// `(min_fps, poll_interval_ms)` steps, ascending by fps. The last step whose
/// `min_fps` is <= the measured fps wins.
pub const POLL_STEPS: [(u32, f64); 4] = [(0, 300.0), (30, 200.0), (45, 150.0), (55, 120.0)];

// Gallery
pub const GALLERY_REVEAL_DELAY_MS: f64 = 800.0; // circular mask opening
pub const GALLERY_IMAGE_HOLD_MS: f64 = 2500.0;
pub const GALLERY_CROSSFADE_MS: f64 = 600.0;
pub const GALLERY_EXIT_MS: f64 = 1000.0;
pub const GALLERY_FAILED_LOAD_SKIP_MS: f64 = 100.0;
