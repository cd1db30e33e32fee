//! Annulus hit-test of the star population against an expanding wave front.

use crate::geometry::Viewport;
use crate::stars::{StarId, StarRegistry};
use glam::DVec2;
use smallvec::SmallVec;

/// Matches from one detection pass, applied by the caller as a batch.
pub type Matches = SmallVec<[StarId; 16]>;

/// A wave front at one instant: pixel center and radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveFront {
    pub center: DVec2,
    pub radius: f64,
    pub max_radius: f64,
}

impl WaveFront {
    /// Fraction of the full expansion reached, in [0, 1].
    pub fn progress(&self) -> f64 {
        if self.max_radius > 0.0 {
            (self.radius / self.max_radius).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

/// Squared ring bounds in percentage space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Annulus {
    pub center_percent: DVec2,
    pub inner_sq: f64,
    pub outer_sq: f64,
}

impl Annulus {
    pub fn new(front: &WaveFront, viewport: Viewport, thickness_fraction: f64) -> Self {
        let max_dim = viewport.max_dimension();
        let per_percent = viewport.max_dimension_percent();
        let thickness = max_dim * thickness_fraction;
        // A negative inner radius is fine: squaring keeps it a lower bound.
        let inner = (front.radius - thickness) / per_percent;
        let outer = (front.radius + thickness) / per_percent;
        Self {
            center_percent: viewport.to_percent(front.center),
            inner_sq: inner * inner,
            outer_sq: outer * outer,
        }
    }

    #[inline]
    pub fn contains(&self, position_percent: DVec2) -> bool {
        let d_sq = position_percent.distance_squared(self.center_percent);
        d_sq >= self.inner_sq && d_sq <= self.outer_sq
    }
}

/// Stars inside the wave's annulus that are not already sparkling.
pub fn detect(
    front: &WaveFront,
    viewport: Viewport,
    thickness_fraction: f64,
    stars: &StarRegistry,
) -> Matches {
    let mut out = Matches::new();
    if viewport.is_degenerate() {
        return out;
    }
    let ring = Annulus::new(front, viewport, thickness_fraction);
    for (id, star) in stars.iter() {
        if star.is_sparkling() {
            continue;
        }
        if ring.contains(star.position) {
            out.push(id);
        }
    }
    out
}
