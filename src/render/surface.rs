//! Canvas-style drawing surface.
//!
//! The trait mirrors a 2D immediate-mode canvas: a backing store with its own
//! pixel size, a separate display size, a cumulative scale transform, path
//! construction and fill/stroke with settable colors.

use macroquad::color::Color;

/// A 2D immediate-mode drawing context.
pub trait DrawingSurface {
    /// Resizes the backing store to `width × height` physical pixels.
    ///
    /// Like an HTML canvas, this resets the transform to identity.
    fn set_backing_size(&mut self, width: f32, height: f32);

    /// Sets the on-screen size in CSS pixels.
    fn set_display_size(&mut self, width: f32, height: f32);

    /// Multiplies the current transform by a uniform scale.
    fn scale(&mut self, factor: f32);

    /// Color used by [`DrawingSurface::fill`].
    fn set_fill_color(&mut self, color: Color);

    /// Color used by [`DrawingSurface::stroke`].
    fn set_stroke_color(&mut self, color: Color);

    /// Clears a rectangle given in transformed coordinates.
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Discards the current path and starts a new one.
    fn begin_path(&mut self);

    /// Starts a new subpath at `(x, y)`.
    fn move_to(&mut self, x: f32, y: f32);

    /// Adds a straight segment to `(x, y)`.
    fn line_to(&mut self, x: f32, y: f32);

    /// Adds a clockwise arc around `(x, y)` from `start_angle` to `end_angle` radians.
    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32);

    /// Fills the current path with the fill color (non-zero winding).
    fn fill(&mut self);

    /// Strokes the current path with the stroke color.
    fn stroke(&mut self);
}

/// One recorded drawing call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// [`DrawingSurface::set_backing_size`]
    SetBackingSize {
        /// Physical width.
        width: f32,
        /// Physical height.
        height: f32,
    },
    /// [`DrawingSurface::set_display_size`]
    SetDisplaySize {
        /// CSS width.
        width: f32,
        /// CSS height.
        height: f32,
    },
    /// [`DrawingSurface::scale`]
    Scale(f32),
    /// [`DrawingSurface::set_fill_color`]
    SetFillColor(Color),
    /// [`DrawingSurface::set_stroke_color`]
    SetStrokeColor(Color),
    /// [`DrawingSurface::clear_rect`]
    ClearRect {
        /// Left edge.
        x: f32,
        /// Top edge.
        y: f32,
        /// Width.
        width: f32,
        /// Height.
        height: f32,
    },
    /// [`DrawingSurface::begin_path`]
    BeginPath,
    /// [`DrawingSurface::move_to`]
    MoveTo(f32, f32),
    /// [`DrawingSurface::line_to`]
    LineTo(f32, f32),
    /// [`DrawingSurface::arc`]
    Arc {
        /// Center x.
        x: f32,
        /// Center y.
        y: f32,
        /// Radius.
        radius: f32,
        /// Start angle in radians.
        start_angle: f32,
        /// End angle in radians.
        end_angle: f32,
    },
    /// [`DrawingSurface::fill`] with the fill color in effect.
    Fill(Color),
    /// [`DrawingSurface::stroke`] with the stroke color in effect.
    Stroke(Color),
}

/// Surface that records every call instead of drawing.
///
/// Tracks the same state a canvas would (sizes, transform, colors) so the
/// effect of a call sequence can be inspected without a window.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    backing_size: (f32, f32),
    display_size: (f32, f32),
    transform: f32,
    fill_color: Color,
    stroke_color: Color,
}

impl RecordingSurface {
    /// Creates a surface with a `width × height` backing store and matching display size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            commands: Vec::new(),
            backing_size: (width, height),
            display_size: (width, height),
            transform: 1.0,
            fill_color: macroquad::color::BLACK,
            stroke_color: macroquad::color::BLACK,
        }
    }

    /// Every recorded call, oldest first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Forgets recorded calls but keeps the surface state.
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Backing store size in physical pixels.
    pub fn backing_size(&self) -> (f32, f32) {
        self.backing_size
    }

    /// Display size in CSS pixels.
    pub fn display_size(&self) -> (f32, f32) {
        self.display_size
    }

    /// Current uniform scale transform.
    pub fn transform(&self) -> f32 {
        self.transform
    }

    /// Current fill color.
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    /// Current stroke color.
    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    /// Number of recorded fills.
    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Fill(_)))
            .count()
    }
}

impl DrawingSurface for RecordingSurface {
    fn set_backing_size(&mut self, width: f32, height: f32) {
        self.backing_size = (width, height);
        self.transform = 1.0;
        self.commands
            .push(DrawCommand::SetBackingSize { width, height });
    }

    fn set_display_size(&mut self, width: f32, height: f32) {
        self.display_size = (width, height);
        self.commands
            .push(DrawCommand::SetDisplaySize { width, height });
    }

    fn scale(&mut self, factor: f32) {
        self.transform *= factor;
        self.commands.push(DrawCommand::Scale(factor));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
        self.commands.push(DrawCommand::SetFillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
        self.commands.push(DrawCommand::SetStrokeColor(color));
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::LineTo(x, y));
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32) {
        self.commands.push(DrawCommand::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill(self.fill_color));
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke(self.stroke_color));
    }
}
