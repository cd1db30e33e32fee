use glam::DVec2;

/// Viewport size in CSS pixels, read from the host on demand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn max_dimension(&self) -> f64 {
        self.width.max(self.height)
    }

    /// Pixels per percentage point of the larger dimension.
    #[inline]
    pub fn max_dimension_percent(&self) -> f64 {
        self.max_dimension() / 100.0
    }

    /// Zero-sized or non-finite viewports cannot host any geometry.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    /// Convert a pixel point to per-axis percentage space.
    #[inline]
    pub fn to_percent(&self, px: DVec2) -> DVec2 {
        DVec2::new(px.x / self.width * 100.0, px.y / self.height * 100.0)
    }
}
