use crate::click::{ClickDispatcher, ClickOutcome};
use crate::config::{ConfigError, EffectConfig};
use crate::gallery::{Gallery, GalleryTiming};
use crate::ripple::{clear_sparkle, RippleAnimator, StopReason};
use crate::schedule::{FrameHandle, Scheduler, Task, TimerHandle};
use crate::stars::StarRegistry;
use crate::surface::{GallerySurface, Surface};
use glam::DVec2;
use rand::Rng;

/// The whole effect layer: star population, ripple animator, click dispatcher
/// and gallery, owned in one place and driven by the host.
///
/// The host forwards three kinds of input: clicks, frames it was asked for,
/// and timers it was asked for. Each call gets the host's [`Scheduler`] and
/// presentation surface for the duration of the call.
pub struct Starfield {
    config: EffectConfig,
    stars: StarRegistry,
    ripple: RippleAnimator,
    clicks: ClickDispatcher,
    gallery: Gallery,
}

impl Starfield {
    pub fn new<R: Rng + ?Sized>(
        config: EffectConfig,
        gallery_images: Vec<String>,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let stars = StarRegistry::create_all(config.star_count, rng);
        let gallery = Gallery::new(gallery_images, GalleryTiming::default(), rng);
        Self::with_parts(config, stars, gallery)
    }

    /// Assemble from an explicit star layout and gallery.
    pub fn with_parts(
        config: EffectConfig,
        stars: StarRegistry,
        gallery: Gallery,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!("[engine] stars={} config ok", stars.len());
        Ok(Self {
            ripple: RippleAnimator::new(&config),
            clicks: ClickDispatcher::new(config.double_click_window_ms),
            config,
            stars,
            gallery,
        })
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    pub fn stars(&self) -> &StarRegistry {
        &self.stars
    }

    pub fn ripple(&self) -> &RippleAnimator {
        &self.ripple
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn clicks(&self) -> &ClickDispatcher {
        &self.clicks
    }

    pub fn on_click<H, S>(
        &mut self,
        now: f64,
        origin: DVec2,
        sched: &mut H,
        surface: &mut S,
    ) -> ClickOutcome
    where
        H: Scheduler + ?Sized,
        S: Surface + GallerySurface + ?Sized,
    {
        let outcome = self.clicks.on_click(now, origin, sched);
        if let ClickOutcome::DoubleClick { origin } = outcome {
            let viewport = surface.viewport();
            self.gallery.start(origin, viewport, sched, surface);
        }
        outcome
    }

    pub fn on_frame<H, S>(&mut self, handle: FrameHandle, now: f64, sched: &mut H, surface: &mut S)
    where
        H: Scheduler + ?Sized,
        S: Surface + ?Sized,
    {
        self.ripple
            .on_frame(handle, now, &self.config, &mut self.stars, sched, surface);
    }

    pub fn on_timer<H, S>(
        &mut self,
        handle: TimerHandle,
        task: Task,
        now: f64,
        sched: &mut H,
        surface: &mut S,
    ) where
        H: Scheduler + ?Sized,
        S: Surface + GallerySurface + ?Sized,
    {
        match task {
            Task::SingleClick { origin } => {
                if self.clicks.on_single_click_timer(handle) {
                    self.ripple
                        .trigger(origin, now, &self.config, sched, surface);
                }
            }
            Task::RippleSafety => self.ripple.on_safety_timeout(handle, sched, surface),
            Task::ClearSparkle { star } => {
                clear_sparkle(star, handle, &mut self.stars, surface);
            }
            Task::GalleryAdvance => self.gallery.on_advance_timer(handle, sched, surface),
            Task::GalleryExitDone => self.gallery.on_exit_timer(handle, surface),
        }
    }

    /// Host report that a gallery image could not be loaded.
    pub fn on_gallery_image_failed<H: Scheduler + ?Sized>(&mut self, src: &str, sched: &mut H) {
        self.gallery.on_image_failed(src, sched);
    }

    /// Cancel all outstanding work and clear every transient visual.
    pub fn shutdown<H, S>(&mut self, sched: &mut H, surface: &mut S)
    where
        H: Scheduler + ?Sized,
        S: Surface + GallerySurface + ?Sized,
    {
        self.clicks.cancel(sched);
        self.ripple.stop(StopReason::Shutdown, sched, surface);
        for (id, timer) in self.stars.clear_all() {
            sched.clear_timeout(timer);
            surface.set_sparkle(id, false);
        }
        self.gallery.abort(sched, surface);
    }
}
