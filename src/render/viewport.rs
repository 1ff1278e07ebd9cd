//! Viewport sizing and coordinate mapping.
//!
//! The viewport has a logical size in CSS pixels and a device pixel ratio.
//! The backing store is `logical * ratio` physical pixels; a scale transform
//! on the surface lets all drawing happen in logical pixels. Normalized world
//! coordinates therefore map through the logical size only.

use macroquad::math::{Vec2, vec2};

/// Logical drawing area plus device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
    scale: f32,
}

impl Viewport {
    /// Creates a viewport of logical size `width × height`.
    ///
    /// A missing, non-finite or non-positive `device_pixel_ratio` falls back to `1`.
    pub fn new(width: f32, height: f32, device_pixel_ratio: Option<f32>) -> Self {
        Self {
            width,
            height,
            scale: sanitize_ratio(device_pixel_ratio),
        }
    }

    /// Logical width in CSS pixels.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Logical height in CSS pixels.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Device pixel ratio.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Size of the backing store in physical pixels.
    pub fn physical_size(&self) -> Vec2 {
        vec2(self.width * self.scale, self.height * self.scale)
    }

    /// On-screen size in CSS pixels.
    pub fn display_size(&self) -> Vec2 {
        vec2(self.width, self.height)
    }

    /// Replaces the device pixel ratio, e.g. after the window moved to another monitor.
    ///
    /// Returns `true` if the ratio actually changed.
    pub fn set_device_pixel_ratio(&mut self, device_pixel_ratio: Option<f32>) -> bool {
        let scale = sanitize_ratio(device_pixel_ratio);
        let changed = (scale - self.scale).abs() > f32::EPSILON;
        self.scale = scale;
        changed
    }
}

/// Conversion from normalized world units to logical pixels.
pub trait ToScreen {
    /// Screen-space counterpart.
    type Output;

    /// Maps `self` into logical pixels of `viewport`.
    fn to_screen(&self, viewport: &Viewport) -> Self::Output;
}

impl ToScreen for Vec2 {
    type Output = Vec2;

    fn to_screen(&self, viewport: &Viewport) -> Vec2 {
        vec2(self.x * viewport.width, self.y * viewport.height)
    }
}

/// Lengths scale with the viewport width only, so shapes keep their aspect.
impl ToScreen for f32 {
    type Output = f32;

    fn to_screen(&self, viewport: &Viewport) -> f32 {
        self * viewport.width
    }
}

fn sanitize_ratio(device_pixel_ratio: Option<f32>) -> f32 {
    match device_pixel_ratio {
        Some(ratio) if ratio.is_finite() && ratio > 0.0 => ratio,
        _ => 1.0,
    }
}
