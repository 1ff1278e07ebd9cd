#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use evo_viewport::config::RenderConfig;
use evo_viewport::render::frame::RenderLoop;
use evo_viewport::render::surface::{DrawCommand, RecordingSurface};
use evo_viewport::render::viewport::{ToScreen, Viewport};
use evo_viewport::simulation::drift::DriftSimulation;
use macroquad::math::vec2;

#[test]
fn test_device_pixel_ratio_defaults_to_one() {
    assert_eq!(Viewport::new(400.0, 300.0, None).scale(), 1.0);
    assert_eq!(Viewport::new(400.0, 300.0, Some(0.0)).scale(), 1.0);
    assert_eq!(Viewport::new(400.0, 300.0, Some(-2.0)).scale(), 1.0);
    assert_eq!(Viewport::new(400.0, 300.0, Some(f32::NAN)).scale(), 1.0);
    assert_eq!(Viewport::new(400.0, 300.0, Some(2.0)).scale(), 2.0);
}

#[test]
fn test_physical_size_follows_ratio() {
    let viewport = Viewport::new(400.0, 300.0, Some(2.0));

    assert_eq!(viewport.physical_size(), vec2(800.0, 600.0));
    assert_eq!(viewport.display_size(), vec2(400.0, 300.0));
}

#[test]
fn test_normalized_positions_map_through_logical_size() {
    // The ratio must not leak into the mapping; the surface transform handles it.
    let viewport = Viewport::new(400.0, 300.0, Some(3.0));

    for i in 0..=10 {
        for j in 0..=10 {
            let x = i as f32 / 10.0;
            let y = j as f32 / 10.0;
            let screen = vec2(x, y).to_screen(&viewport);
            assert_eq!(screen.x, x * 400.0);
            assert_eq!(screen.y, y * 300.0);
        }
    }
}

#[test]
fn test_lengths_scale_with_width() {
    let viewport = Viewport::new(400.0, 300.0, Some(2.0));

    assert!((0.01_f32.to_screen(&viewport) - 4.0).abs() < 1e-5);
    assert!((0.005_f32.to_screen(&viewport) - 2.0).abs() < 1e-5);
}

#[test]
fn test_initialization_sizes_surface() {
    let config = RenderConfig {
        viewport_width: 400.0,
        viewport_height: 300.0,
        ..RenderConfig::default()
    };
    let render_loop = RenderLoop::new(
        DriftSimulation::seeded(1),
        RecordingSurface::new(400.0, 300.0),
        &config,
        Some(2.0),
    )
    .expect("valid config");

    let surface = render_loop.surface();
    assert_eq!(surface.backing_size(), (800.0, 600.0));
    assert_eq!(surface.display_size(), (400.0, 300.0));
    assert_eq!(surface.transform(), 2.0);
    assert_eq!(surface.fill_color(), config.background_color());

    assert_eq!(
        &surface.commands()[..3],
        &[
            DrawCommand::SetBackingSize {
                width: 800.0,
                height: 600.0
            },
            DrawCommand::SetDisplaySize {
                width: 400.0,
                height: 300.0
            },
            DrawCommand::Scale(2.0),
        ]
    );
}

#[test]
fn test_changing_ratio_resizes_backing_only() {
    let config = RenderConfig {
        viewport_width: 400.0,
        viewport_height: 300.0,
        ..RenderConfig::default()
    };
    let mut render_loop = RenderLoop::new(
        DriftSimulation::seeded(1),
        RecordingSurface::new(400.0, 300.0),
        &config,
        Some(1.0),
    )
    .expect("valid config");

    render_loop.set_device_pixel_ratio(Some(1.5));

    let surface = render_loop.surface();
    assert_eq!(surface.backing_size(), (600.0, 450.0));
    assert_eq!(surface.display_size(), (400.0, 300.0));
    // resizing resets the transform, so the scale is not compounded
    assert_eq!(surface.transform(), 1.5);
    assert_eq!(render_loop.viewport().width(), 400.0);
}

#[test]
fn test_unchanged_ratio_does_not_touch_surface() {
    let config = RenderConfig::default();
    let mut render_loop = RenderLoop::new(
        DriftSimulation::seeded(1),
        RecordingSurface::new(800.0, 600.0),
        &config,
        Some(2.0),
    )
    .expect("valid config");
    render_loop.surface_mut().clear_commands();

    render_loop.set_device_pixel_ratio(Some(2.0));

    assert!(render_loop.surface().commands().is_empty());
}
