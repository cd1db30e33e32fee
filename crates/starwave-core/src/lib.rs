//! Timing and geometry core for the starwave effect layer.
//!
//! Nothing in here touches a browser. Hosts implement [`Scheduler`] for their
//! event loop and [`Surface`] / [`GallerySurface`] for presentation, then feed
//! clicks, frames and timers into a [`Starfield`].

pub mod click;
pub mod config;
pub mod constants;
pub mod engine;
pub mod gallery;
pub mod geometry;
pub mod perf;
pub mod proximity;
pub mod ripple;
pub mod schedule;
pub mod sim;
pub mod stars;
pub mod surface;

pub use click::{ClickDispatcher, ClickOutcome};
pub use config::{ConfigError, EffectConfig, PollStep};
pub use engine::Starfield;
pub use gallery::{Gallery, GalleryTiming};
pub use geometry::Viewport;
pub use perf::PerformanceMonitor;
pub use proximity::{detect, Annulus, Matches, WaveFront};
pub use ripple::{RippleAnimator, StopReason, WaveEvent};
pub use schedule::{CancelToken, FrameHandle, Scheduler, Task, TimerHandle};
pub use stars::{Star, StarId, StarRegistry, StarSize};
pub use surface::{GallerySurface, Surface};
