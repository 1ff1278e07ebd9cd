//! Triangle and circle primitives.
//!
//! Both take the surface explicitly and keep no state of their own. Coordinates
//! are logical pixels.

use macroquad::color::Color;
use macroquad::math::{Vec2, vec2};
use std::f32::consts::{PI, TAU};

use super::surface::DrawingSurface;
use crate::error::RenderError;

/// Angle between neighbouring triangle vertices as seen from the center.
pub const INTERIOR_ANGLE: f32 = 2.0 / 3.0 * PI;

/// How much further than the tail vertices the nose vertex sits.
pub const NOSE_COEFFICIENT: f32 = 1.5;

/// Vertices of an isosceles triangle centered at `center` pointing along `rotation`.
///
/// Returns `[nose, tail_a, tail_b]`. The nose is `NOSE_COEFFICIENT * size` from
/// the center, both tail vertices are `size` away.
pub fn triangle_vertices(center: Vec2, size: f32, rotation: f32) -> [Vec2; 3] {
    let nose = center + polar(rotation, size * NOSE_COEFFICIENT);
    let tail_a = center + polar(rotation + INTERIOR_ANGLE, size);
    let tail_b = center + polar(rotation + 2.0 * INTERIOR_ANGLE, size);
    [nose, tail_a, tail_b]
}

/// Draws a filled and stroked triangle pointing along `rotation`.
///
/// The path is nose, tail A, tail B, back to nose. It is filled with `fill`
/// and stroked with whatever stroke color the surface currently holds.
pub fn draw_triangle<D: DrawingSurface + ?Sized>(
    surface: &mut D,
    center: Vec2,
    size: f32,
    rotation: f32,
    fill: Color,
) {
    let [nose, tail_a, tail_b] = triangle_vertices(center, size, rotation);

    surface.begin_path();
    surface.move_to(nose.x, nose.y);
    surface.line_to(tail_a.x, tail_a.y);
    surface.line_to(tail_b.x, tail_b.y);
    surface.line_to(nose.x, nose.y);

    surface.set_fill_color(fill);
    surface.fill();
    surface.stroke();
}

/// Draws a filled circle without outline.
///
/// Negative, NaN or infinite radii are rejected before touching the surface.
pub fn draw_circle<D: DrawingSurface + ?Sized>(
    surface: &mut D,
    center: Vec2,
    radius: f32,
    fill: Color,
) -> Result<(), RenderError> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(RenderError::InvalidRadius(radius));
    }

    surface.begin_path();
    surface.arc(center.x, center.y, radius, 0.0, TAU);

    surface.set_fill_color(fill);
    surface.fill();
    Ok(())
}

fn polar(angle: f32, length: f32) -> Vec2 {
    vec2(angle.cos() * length, angle.sin() * length)
}
