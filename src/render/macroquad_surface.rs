//! Drawing surface backed by macroquad.
//!
//! macroquad has no path API, so paths are collected as polylines and turned
//! into triangles on `fill` and line segments on `stroke`. Fills use a
//! triangle fan per subpath, which is exact for the convex shapes drawn here.
//!
//! Coordinates pass through the surface transform into backing-store pixels,
//! and the backing store is stretched over the whole window.

use macroquad::color::Color;
use macroquad::math::{Vec2, vec2};
use macroquad::shapes as mq;
use macroquad::window::{clear_background, request_new_screen_size, screen_height, screen_width};
use std::f32::consts::TAU;

use super::surface::DrawingSurface;

/// Arc segments per physical pixel of radius.
const ARC_SEGMENTS_PER_PIXEL: f32 = 0.75;
const MIN_ARC_SEGMENTS: usize = 12;
const MAX_ARC_SEGMENTS: usize = 96;
/// Canvas default line width in transformed units.
const LINE_WIDTH: f32 = 1.0;

/// Segment count for an arc of `radius` physical pixels sweeping `sweep` radians.
pub fn arc_segments(radius: f32, sweep: f32) -> usize {
    ((radius * ARC_SEGMENTS_PER_PIXEL * sweep.abs() / TAU) as usize)
        .clamp(MIN_ARC_SEGMENTS, MAX_ARC_SEGMENTS)
}

/// Points along an arc, both ends included.
///
/// The sweep is clamped to one full turn either way.
pub fn arc_points(
    center: Vec2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    segments: usize,
) -> Vec<Vec2> {
    let sweep = (end_angle - start_angle).clamp(-TAU, TAU);
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| {
            let angle = start_angle + sweep * i as f32 / segments as f32;
            let (sin, cos) = angle.sin_cos();
            center + vec2(cos, sin) * radius
        })
        .collect()
}

/// Triangle fan over a subpath, anchored at its first point.
///
/// Fewer than three points give no triangles.
pub fn fan_triangles(subpath: &[Vec2]) -> Vec<[Vec2; 3]> {
    let Some((&anchor, rest)) = subpath.split_first() else {
        return Vec::new();
    };
    rest.windows(2)
        .map(|pair| [anchor, pair[0], pair[1]])
        .collect()
}

/// Line segments between consecutive points of a subpath.
pub fn path_segments(subpath: &[Vec2]) -> Vec<[Vec2; 2]> {
    subpath.windows(2).map(|pair| [pair[0], pair[1]]).collect()
}

/// [`DrawingSurface`] drawing into the macroquad window.
pub struct MacroquadSurface {
    backing: Vec2,
    display: Vec2,
    transform: f32,
    fill_color: Color,
    stroke_color: Color,
    backdrop: Color,
    subpaths: Vec<Vec<Vec2>>,
}

impl MacroquadSurface {
    /// Creates a surface covering the current window.
    ///
    /// `backdrop` is what [`DrawingSurface::clear_rect`] paints, since the
    /// window has nothing transparent to reveal.
    pub fn new(backdrop: Color) -> Self {
        let window = vec2(screen_width(), screen_height());
        Self {
            backing: window,
            display: window,
            transform: 1.0,
            fill_color: macroquad::color::BLACK,
            stroke_color: macroquad::color::BLACK,
            backdrop,
            subpaths: Vec::new(),
        }
    }

    /// Backing store size in physical pixels.
    pub fn backing_size(&self) -> Vec2 {
        self.backing
    }

    /// Display size in CSS pixels.
    pub fn display_size(&self) -> Vec2 {
        self.display
    }

    /// Window units per backing-store pixel.
    fn window_ratio(&self) -> Vec2 {
        vec2(
            screen_width() / self.backing.x.max(1.0),
            screen_height() / self.backing.y.max(1.0),
        )
    }

    fn to_window(&self, point: Vec2) -> Vec2 {
        point * self.transform * self.window_ratio()
    }

    fn current_subpath(&mut self) -> &mut Vec<Vec2> {
        if self.subpaths.is_empty() {
            self.subpaths.push(Vec::new());
        }
        let last = self.subpaths.len() - 1;
        &mut self.subpaths[last]
    }
}

impl DrawingSurface for MacroquadSurface {
    fn set_backing_size(&mut self, width: f32, height: f32) {
        self.backing = vec2(width, height);
        self.transform = 1.0;
    }

    fn set_display_size(&mut self, width: f32, height: f32) {
        self.display = vec2(width, height);
        if (screen_width() - width).abs() > 0.5 || (screen_height() - height).abs() > 0.5 {
            request_new_screen_size(width, height);
        }
    }

    fn scale(&mut self, factor: f32) {
        self.transform *= factor;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let min = vec2(x, y) * self.transform;
        let max = vec2(x + width, y + height) * self.transform;
        if min.x <= 0.0 && min.y <= 0.0 && max.x >= self.backing.x && max.y >= self.backing.y {
            clear_background(self.backdrop);
            return;
        }

        let top_left = self.to_window(vec2(x, y));
        let size = vec2(width, height) * self.transform * self.window_ratio();
        mq::draw_rectangle(top_left.x, top_left.y, size.x, size.y, self.backdrop);
    }

    fn begin_path(&mut self) {
        self.subpaths.clear();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        let point = self.to_window(vec2(x, y));
        self.subpaths.push(vec![point]);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let point = self.to_window(vec2(x, y));
        self.current_subpath().push(point);
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32) {
        let segments = arc_segments(radius * self.transform, end_angle - start_angle);
        let points: Vec<Vec2> =
            arc_points(vec2(x, y), radius, start_angle, end_angle, segments)
                .into_iter()
                .map(|point| self.to_window(point))
                .collect();

        // an arc continues the current subpath with a straight line to its start
        self.current_subpath().extend(points);
    }

    fn fill(&mut self) {
        for [a, b, c] in self.subpaths.iter().flat_map(|path| fan_triangles(path)) {
            mq::draw_triangle(a, b, c, self.fill_color);
        }
    }

    fn stroke(&mut self) {
        let thickness = LINE_WIDTH * self.transform * self.window_ratio().x;
        for [from, to] in self.subpaths.iter().flat_map(|path| path_segments(path)) {
            mq::draw_line(from.x, from.y, to.x, to.y, thickness, self.stroke_color);
        }
    }
}
