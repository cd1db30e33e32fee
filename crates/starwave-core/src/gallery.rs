//! Double-click image gallery sequencing.
//!
//! Enter (mask opens) -> show each image once in random order -> return to the
//! page. All waiting goes through the host scheduler, so leaving the gallery
//! cancels whatever was queued.

use crate::constants::*;
use crate::geometry::Viewport;
use crate::schedule::{Scheduler, Task, TimerHandle};
use crate::surface::GallerySurface;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryTiming {
    pub reveal_delay_ms: f64,
    pub hold_ms: f64,
    pub crossfade_ms: f64,
    pub exit_ms: f64,
    /// Wait before moving on from an image that failed to load.
    pub failed_load_skip_ms: f64,
}

impl Default for GalleryTiming {
    fn default() -> Self {
        Self {
            reveal_delay_ms: GALLERY_REVEAL_DELAY_MS,
            hold_ms: GALLERY_IMAGE_HOLD_MS,
            crossfade_ms: GALLERY_CROSSFADE_MS,
            exit_ms: GALLERY_EXIT_MS,
            failed_load_skip_ms: GALLERY_FAILED_LOAD_SKIP_MS,
        }
    }
}

pub struct Gallery {
    images: Vec<String>,
    timing: GalleryTiming,
    shown: Vec<usize>,
    active: bool,
    advance: Option<TimerHandle>,
    exit: Option<TimerHandle>,
    rng: StdRng,
}

impl Gallery {
    pub fn new<R: Rng + ?Sized>(images: Vec<String>, timing: GalleryTiming, rng: &mut R) -> Self {
        Self {
            images,
            timing,
            shown: Vec::new(),
            active: false,
            advance: None,
            exit: None,
            rng: StdRng::seed_from_u64(rng.gen()),
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Images shown so far in the current visit, in display order.
    pub fn shown(&self) -> impl Iterator<Item = &str> {
        self.shown.iter().map(|&i| self.images[i].as_str())
    }

    pub fn start<H, S>(
        &mut self,
        origin: DVec2,
        viewport: Viewport,
        sched: &mut H,
        surface: &mut S,
    ) -> bool
    where
        H: Scheduler + ?Sized,
        S: GallerySurface + ?Sized,
    {
        if self.active {
            return false;
        }
        if let Some(t) = self.exit.take() {
            sched.clear_timeout(t);
            surface.finish_gallery_exit();
        }
        self.active = true;
        self.shown.clear();
        let origin_percent = if viewport.is_degenerate() {
            DVec2::splat(50.0)
        } else {
            viewport.to_percent(origin)
        };
        surface.enter_gallery(origin_percent);
        self.advance = Some(sched.set_timeout(self.timing.reveal_delay_ms, Task::GalleryAdvance));
        log::info!("[gallery] enter with {} image(s)", self.images.len());
        true
    }

    pub fn on_advance_timer<H, S>(&mut self, handle: TimerHandle, sched: &mut H, surface: &mut S)
    where
        H: Scheduler + ?Sized,
        S: GallerySurface + ?Sized,
    {
        if self.advance != Some(handle) {
            log::debug!("[gallery] stale advance timer {:?} ignored", handle);
            return;
        }
        self.advance = None;
        if self.active {
            self.show_next(sched, surface);
        }
    }

    pub fn on_exit_timer<S>(&mut self, handle: TimerHandle, surface: &mut S)
    where
        S: GallerySurface + ?Sized,
    {
        if self.exit == Some(handle) {
            self.exit = None;
            surface.finish_gallery_exit();
        }
    }

    /// The host could not load `src`. If it is the image on screen, cut its
    /// hold short and move on.
    pub fn on_image_failed<H>(&mut self, src: &str, sched: &mut H) -> bool
    where
        H: Scheduler + ?Sized,
    {
        let current = self.shown.last().map(|&i| self.images[i].as_str());
        if !self.active || current != Some(src) {
            return false;
        }
        if let Some(t) = self.advance.take() {
            sched.clear_timeout(t);
        }
        let delay = self.timing.failed_load_skip_ms;
        self.advance = Some(sched.set_timeout(delay, Task::GalleryAdvance));
        log::warn!("[gallery] failed to load {}; skipping", src);
        true
    }

    fn show_next<H, S>(&mut self, sched: &mut H, surface: &mut S)
    where
        H: Scheduler + ?Sized,
        S: GallerySurface + ?Sized,
    {
        let unused: Vec<usize> = (0..self.images.len())
            .filter(|i| !self.shown.contains(i))
            .collect();
        let Some(&next) = unused.choose(&mut self.rng) else {
            self.return_to_page(sched, surface);
            return;
        };
        let replacing = !self.shown.is_empty();
        self.shown.push(next);
        surface.show_gallery_image(&self.images[next]);
        let mut wait = self.timing.hold_ms;
        if replacing {
            wait += self.timing.crossfade_ms;
        }
        self.advance = Some(sched.set_timeout(wait, Task::GalleryAdvance));
        log::debug!("[gallery] showing {}", self.images[next]);
    }

    /// Leave gallery mode now; the exit animation finishes on its own timer.
    pub fn return_to_page<H, S>(&mut self, sched: &mut H, surface: &mut S)
    where
        H: Scheduler + ?Sized,
        S: GallerySurface + ?Sized,
    {
        if !self.active {
            return;
        }
        self.active = false;
        if let Some(t) = self.advance.take() {
            sched.clear_timeout(t);
        }
        surface.exit_gallery();
        self.exit = Some(sched.set_timeout(self.timing.exit_ms, Task::GalleryExitDone));
        log::info!("[gallery] return to page after {} image(s)", self.shown.len());
    }

    /// Drop out of the gallery immediately, exit animation included.
    pub fn abort<H, S>(&mut self, sched: &mut H, surface: &mut S)
    where
        H: Scheduler + ?Sized,
        S: GallerySurface + ?Sized,
    {
        if let Some(t) = self.advance.take() {
            sched.clear_timeout(t);
        }
        let exiting = match self.exit.take() {
            Some(t) => {
                sched.clear_timeout(t);
                true
            }
            None => false,
        };
        if self.active {
            self.active = false;
            surface.exit_gallery();
            surface.finish_gallery_exit();
        } else if exiting {
            surface.finish_gallery_exit();
        }
    }
}
