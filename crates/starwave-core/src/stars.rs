//! The fixed star population.
//!
//! Stars are created once at start-up and live for the whole page. The only
//! mutable state is the transient `sparkling` flag plus the handle of the
//! timer that will clear it.

use crate::constants::*;
use crate::schedule::TimerHandle;
use glam::DVec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StarId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarSize {
    Large,
    Medium,
    Default,
}

impl StarSize {
    fn from_draw(draw: f64) -> Self {
        if draw > STAR_LARGE_THRESHOLD {
            StarSize::Large
        } else if draw > STAR_MEDIUM_THRESHOLD {
            StarSize::Medium
        } else {
            StarSize::Default
        }
    }

    /// CSS modifier class, if any.
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            StarSize::Large => Some("large"),
            StarSize::Medium => Some("medium"),
            StarSize::Default => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Star {
    /// Percentage offsets within the viewport, each in [0, 100].
    pub position: DVec2,
    pub size: StarSize,
    pub twinkle_delay_s: f64,
    pub twinkle_duration_s: f64,
    sparkling: bool,
    clear_timer: Option<TimerHandle>,
}

impl Star {
    pub fn new(position: DVec2, size: StarSize) -> Self {
        Self {
            position,
            size,
            twinkle_delay_s: 0.0,
            twinkle_duration_s: TWINKLE_DURATION_MIN_S,
            sparkling: false,
            clear_timer: None,
        }
    }

    #[inline]
    pub fn is_sparkling(&self) -> bool {
        self.sparkling
    }
}

#[derive(Clone, Debug, Default)]
pub struct StarRegistry {
    stars: Vec<Star>,
}

impl StarRegistry {
    /// Populate `count` stars with independent uniform positions.
    pub fn create_all<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let stars = (0..count)
            .map(|_| {
                let size = StarSize::from_draw(rng.gen::<f64>());
                let position = DVec2::new(rng.gen::<f64>() * 100.0, rng.gen::<f64>() * 100.0);
                Star {
                    twinkle_delay_s: rng.gen::<f64>() * TWINKLE_DELAY_MAX_S,
                    twinkle_duration_s: TWINKLE_DURATION_MIN_S
                        + rng.gen::<f64>() * TWINKLE_DURATION_SPAN_S,
                    ..Star::new(position, size)
                }
            })
            .collect();
        Self { stars }
    }

    /// Build a registry from explicit stars; used by hosts with fixed layouts.
    pub fn from_stars(stars: Vec<Star>) -> Self {
        Self { stars }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn get(&self, id: StarId) -> Option<&Star> {
        self.stars.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StarId, &Star)> {
        self.stars.iter().enumerate().map(|(i, s)| (StarId(i), s))
    }

    pub fn sparkling_count(&self) -> usize {
        self.stars.iter().filter(|s| s.sparkling).count()
    }

    /// Flag a star as sparkling. Returns false (and changes nothing) when the
    /// star is unknown or already sparkling.
    pub fn begin_sparkle(&mut self, id: StarId, clear_timer: TimerHandle) -> bool {
        match self.stars.get_mut(id.0) {
            Some(s) if !s.sparkling => {
                s.sparkling = true;
                s.clear_timer = Some(clear_timer);
                true
            }
            _ => false,
        }
    }

    /// Clear the sparkle if `timer` is the star's live clear timer.
    pub fn end_sparkle(&mut self, id: StarId, timer: TimerHandle) -> bool {
        match self.stars.get_mut(id.0) {
            Some(s) if s.sparkling && s.clear_timer == Some(timer) => {
                s.sparkling = false;
                s.clear_timer = None;
                true
            }
            _ => false,
        }
    }

    /// Clear every sparkle now, handing back the timers that must be cancelled.
    pub fn clear_all(&mut self) -> Vec<(StarId, TimerHandle)> {
        let mut pending = Vec::new();
        for (i, s) in self.stars.iter_mut().enumerate() {
            if s.sparkling {
                s.sparkling = false;
                if let Some(t) = s.clear_timer.take() {
                    pending.push((StarId(i), t));
                }
            }
        }
        pending
    }
}
