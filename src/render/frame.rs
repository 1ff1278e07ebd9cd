//! Render loop state and per-frame contract.
//!
//! A [`RenderLoop`] owns one simulation and one drawing surface for its whole
//! life. Initialization sizes the surface for the device pixel ratio once;
//! each frame then fetches a snapshot, steps the simulation, clears and draws
//! the snapshot. [`RenderLoop::run`] repeats this once per display refresh
//! until a [`StopSignal`] is raised or the frame limit is hit.

use macroquad::color::Color;
use macroquad::math::vec2;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error, info, trace, warn};

use super::shapes;
use super::surface::DrawingSurface;
use super::viewport::{ToScreen, Viewport};
use crate::config::{FailurePolicy, RenderConfig};
use crate::error::{ConfigError, RenderError};
use crate::simulation::snapshot::WorldSnapshot;
use crate::simulation::source::Simulation;

/// Shared flag asking a running loop to stop before its next frame.
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    /// Creates a signal that is not raised.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the signal. Every clone observes it.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether the signal has been raised.
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// What one successful frame drew.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// 1-based index of the frame.
    pub index: u64,
    /// Triangles drawn.
    pub animals: usize,
    /// Circles drawn.
    pub foods: usize,
}

/// Totals of a finished [`RenderLoop::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames drawn completely.
    pub frames: u64,
    /// Frames abandoned under [`FailurePolicy::SkipFrame`].
    pub skipped: u64,
}

#[derive(Debug, Clone, Copy)]
struct Style {
    animal_size_ratio: f32,
    food_radius_ratio: f32,
    background: Color,
    animal_fill: Color,
    animal_stroke: Color,
    food_fill: Color,
}

/// Application state of the visualizer.
pub struct RenderLoop<S, D> {
    simulation: S,
    surface: D,
    viewport: Viewport,
    style: Style,
    policy: FailurePolicy,
    max_frames: Option<u64>,
    frame_index: u64,
}

impl<S: Simulation, D: DrawingSurface> RenderLoop<S, D> {
    /// Takes ownership of the simulation and surface and sizes the surface.
    ///
    /// The logical size comes from `config`; `device_pixel_ratio` falls back
    /// to `1` when absent or unusable. An invalid `config` is rejected before
    /// the surface is touched.
    pub fn new(
        simulation: S,
        surface: D,
        config: &RenderConfig,
        device_pixel_ratio: Option<f32>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let viewport = Viewport::new(
            config.viewport_width,
            config.viewport_height,
            device_pixel_ratio,
        );
        let mut render_loop = Self {
            simulation,
            surface,
            viewport,
            style: Style {
                animal_size_ratio: config.animal_size_ratio,
                food_radius_ratio: config.food_radius_ratio,
                background: config.background_color(),
                animal_fill: config.animal_fill_color(),
                animal_stroke: config.animal_stroke_color(),
                food_fill: config.food_fill_color(),
            },
            policy: config.failure_policy,
            max_frames: config.max_frames,
            frame_index: 0,
        };
        render_loop.apply_viewport();

        info!(
            width = viewport.width(),
            height = viewport.height(),
            scale = viewport.scale(),
            "viewport initialized"
        );
        Ok(render_loop)
    }

    fn apply_viewport(&mut self) {
        let physical = self.viewport.physical_size();
        let display = self.viewport.display_size();

        self.surface.set_backing_size(physical.x, physical.y);
        self.surface.set_display_size(display.x, display.y);
        self.surface.scale(self.viewport.scale());

        // resizing the backing store drops colors along with the transform on a canvas
        self.surface.set_fill_color(self.style.background);
        self.surface.set_stroke_color(self.style.animal_stroke);
    }

    /// Re-sizes the surface for a new device pixel ratio.
    ///
    /// The display size is unchanged; the backing store follows the ratio.
    pub fn set_device_pixel_ratio(&mut self, device_pixel_ratio: Option<f32>) {
        if self.viewport.set_device_pixel_ratio(device_pixel_ratio) {
            debug!(scale = self.viewport.scale(), "device pixel ratio changed");
            self.apply_viewport();
        }
    }

    /// Runs one frame: snapshot, step, clear, draw.
    ///
    /// The snapshot is taken before stepping, so the frame shows the world as
    /// it was before this frame's step. Everything is drawn from that one snapshot.
    /// The surface is cleared only once the step succeeded, so a failed frame
    /// leaves the previous one on screen.
    pub fn frame(&mut self) -> Result<FrameReport, RenderError> {
        self.frame_index += 1;
        self.food_radius()?;

        let world = self.simulation.world();
        self.simulation.step()?;

        self.surface
            .clear_rect(0.0, 0.0, self.viewport.width(), self.viewport.height());
        self.draw_world(&world)?;

        Ok(FrameReport {
            index: self.frame_index,
            animals: world.animals.len(),
            foods: world.foods.len(),
        })
    }

    /// Paints every animal as a triangle and every food item as a circle.
    ///
    /// Sizes are checked up front; on error nothing is drawn.
    pub fn draw_world(&mut self, world: &WorldSnapshot) -> Result<(), RenderError> {
        let radius = self.food_radius()?;

        let size = self.style.animal_size_ratio.to_screen(&self.viewport);
        for animal in &world.animals {
            let center = vec2(animal.x, animal.y).to_screen(&self.viewport);
            shapes::draw_triangle(
                &mut self.surface,
                center,
                size,
                animal.rotation,
                self.style.animal_fill,
            );
        }

        for food in &world.foods {
            let center = vec2(food.x, food.y).to_screen(&self.viewport);
            shapes::draw_circle(&mut self.surface, center, radius, self.style.food_fill)?;
        }
        Ok(())
    }

    fn food_radius(&self) -> Result<f32, RenderError> {
        let radius = self.style.food_radius_ratio.to_screen(&self.viewport);
        if !radius.is_finite() || radius < 0.0 {
            return Err(RenderError::InvalidRadius(radius));
        }
        Ok(radius)
    }

    /// Drives frames until `stop` is raised or the frame limit is reached.
    ///
    /// `next_frame` is the host's frame primitive; it is awaited once after
    /// every frame, so frame bodies never overlap.
    pub async fn run<F, Fut>(
        &mut self,
        stop: &StopSignal,
        mut next_frame: F,
    ) -> Result<RunSummary, RenderError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ()>,
    {
        let mut summary = RunSummary::default();

        while !stop.is_stopped() && !self.frame_limit_reached() {
            match self.frame() {
                Ok(report) => {
                    summary.frames += 1;
                    trace!(
                        frame = report.index,
                        animals = report.animals,
                        foods = report.foods,
                        "frame drawn"
                    );
                }
                Err(err) => match self.policy {
                    FailurePolicy::Halt => {
                        error!(frame = self.frame_index, error = %err, "frame failed, halting");
                        return Err(err);
                    }
                    FailurePolicy::SkipFrame => {
                        summary.skipped += 1;
                        warn!(frame = self.frame_index, error = %err, "frame failed, skipping");
                    }
                },
            }
            next_frame().await;
        }

        info!(
            frames = summary.frames,
            skipped = summary.skipped,
            "render loop stopped"
        );
        Ok(summary)
    }

    fn frame_limit_reached(&self) -> bool {
        self.max_frames
            .is_some_and(|limit| self.frame_index >= limit)
    }

    /// Viewport in use.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Frames attempted so far, including failed ones.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// The driven simulation.
    pub fn simulation(&self) -> &S {
        &self.simulation
    }

    /// Mutable access to the driven simulation.
    pub fn simulation_mut(&mut self) -> &mut S {
        &mut self.simulation
    }

    /// The drawing surface.
    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Mutable access to the drawing surface.
    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }

    /// Tears the loop down and hands back its parts.
    pub fn into_parts(self) -> (S, D) {
        (self.simulation, self.surface)
    }
}
