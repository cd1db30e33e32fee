//! Presentation capabilities the core drives.
//!
//! Implementations only toggle visual state; they must tolerate repeated
//! calls and silently ignore targets that no longer exist.

use crate::geometry::Viewport;
use crate::ripple::WaveEvent;
use crate::stars::StarId;
use glam::DVec2;

pub trait Surface {
    fn viewport(&self) -> Viewport;
    fn set_sparkle(&mut self, star: StarId, on: bool);
    /// Place the ripple marker and wave layer for a new wave.
    fn show_ripple(&mut self, wave: &WaveEvent);
    fn set_wave_active(&mut self, active: bool);
    /// Remove the ripple marker and any wave layers.
    fn clear_ripple(&mut self);
}

pub trait GallerySurface {
    /// `origin_percent` is the double-click point in per-axis percentage space.
    fn enter_gallery(&mut self, origin_percent: DVec2);
    fn show_gallery_image(&mut self, src: &str);
    fn exit_gallery(&mut self);
    fn finish_gallery_exit(&mut self);
}
