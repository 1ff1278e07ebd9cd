#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use evo_viewport::config::{DEFAULT_ANIMAL_FILL, DEFAULT_FOOD_FILL, RenderConfig, rgb};
use evo_viewport::error::RenderError;
use evo_viewport::render::shapes::{NOSE_COEFFICIENT, draw_circle, draw_triangle, triangle_vertices};
use evo_viewport::render::surface::{DrawCommand, DrawingSurface, RecordingSurface};
use macroquad::color::Color;
use macroquad::math::{Vec2, vec2};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

const EPS: f32 = 1e-4;
const ANIMAL_FILL: Color = Color::new(1.0, 1.0, 1.0, 1.0);

fn food_fill() -> Color {
    rgb(DEFAULT_FOOD_FILL)
}

fn assert_close(a: Vec2, b: Vec2) {
    assert!(
        (a - b).length() < EPS,
        "expected {:?} to be close to {:?}",
        a,
        b
    );
}

#[test]
fn test_nose_points_along_zero_rotation() {
    let [nose, _, _] = triangle_vertices(vec2(10.0, 20.0), 4.0, 0.0);

    assert_close(nose, vec2(10.0 + NOSE_COEFFICIENT * 4.0, 20.0));
}

#[test]
fn test_nose_points_down_at_quarter_turn() {
    // y grows downward, so a quarter turn points the nose down the screen
    let [nose, _, _] = triangle_vertices(vec2(0.0, 0.0), 2.0, FRAC_PI_2);

    assert_close(nose, vec2(0.0, 3.0));
}

#[test]
fn test_tail_vertices_are_symmetric() {
    let center = vec2(50.0, 50.0);
    let [nose, tail_a, tail_b] = triangle_vertices(center, 10.0, 0.0);

    assert!(((tail_a - center).length() - 10.0).abs() < EPS);
    assert!(((tail_b - center).length() - 10.0).abs() < EPS);
    assert!(((nose - center).length() - 15.0).abs() < EPS);
    // mirrored across the heading axis
    assert!((tail_a.x - tail_b.x).abs() < EPS);
    assert!((tail_a.y - center.y + (tail_b.y - center.y)).abs() < EPS);
}

#[test]
fn test_full_turn_gives_same_triangle() {
    for rotation in [0.0, 0.3, 1.0, PI, -2.5] {
        let a = triangle_vertices(vec2(100.0, 75.0), 4.0, rotation);
        let b = triangle_vertices(vec2(100.0, 75.0), 4.0, rotation + TAU);
        for (va, vb) in a.iter().zip(b.iter()) {
            assert_close(*va, *vb);
        }
    }
}

#[test]
fn test_triangle_path_is_closed_filled_and_stroked() {
    let mut surface = RecordingSurface::new(100.0, 100.0);
    let stroke = Color::from_rgba(10, 20, 30, 255);
    surface.set_stroke_color(stroke);
    surface.clear_commands();

    draw_triangle(&mut surface, vec2(10.0, 10.0), 2.0, 0.0, rgb(DEFAULT_ANIMAL_FILL));

    let commands = surface.commands();
    assert_eq!(commands.len(), 8);
    assert_eq!(commands[0], DrawCommand::BeginPath);
    let DrawCommand::MoveTo(x0, y0) = commands[1] else {
        panic!("expected move_to, got {:?}", commands[1]);
    };
    assert_close(vec2(x0, y0), vec2(13.0, 10.0));
    assert!(matches!(commands[2], DrawCommand::LineTo(..)));
    assert!(matches!(commands[3], DrawCommand::LineTo(..)));
    assert_eq!(commands[4], DrawCommand::LineTo(x0, y0));
    assert_eq!(commands[5], DrawCommand::SetFillColor(ANIMAL_FILL));
    assert_eq!(commands[6], DrawCommand::Fill(ANIMAL_FILL));
    assert_eq!(commands[7], DrawCommand::Stroke(stroke));
}

#[test]
fn test_circle_spans_full_turn() {
    let mut surface = RecordingSurface::new(100.0, 100.0);

    draw_circle(&mut surface, vec2(25.0, 30.0), 2.0, food_fill()).expect("valid radius");

    assert_eq!(
        surface.commands(),
        &[
            DrawCommand::BeginPath,
            DrawCommand::Arc {
                x: 25.0,
                y: 30.0,
                radius: 2.0,
                start_angle: 0.0,
                end_angle: TAU,
            },
            DrawCommand::SetFillColor(food_fill()),
            DrawCommand::Fill(food_fill()),
        ]
    );
}

#[test]
fn test_circle_has_no_outline() {
    let mut surface = RecordingSurface::new(100.0, 100.0);

    draw_circle(&mut surface, vec2(1.0, 1.0), 0.0, food_fill()).expect("zero radius is allowed");

    assert!(
        !surface
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::Stroke(_)))
    );
}

#[test]
fn test_default_colors() {
    let config = RenderConfig::default();

    assert_eq!(config.food_fill_color(), Color::from_rgba(0, 150, 0, 255));
    assert_eq!(config.animal_fill_color(), ANIMAL_FILL);
    assert_eq!(rgb(DEFAULT_ANIMAL_FILL), ANIMAL_FILL);
    assert_eq!(config.background_color(), Color::from_rgba(0, 0, 0, 255));
}

#[test]
fn test_invalid_radius_is_rejected_without_drawing() {
    for radius in [-1.0, f32::NAN, f32::INFINITY] {
        let mut surface = RecordingSurface::new(100.0, 100.0);

        let result = draw_circle(&mut surface, vec2(1.0, 1.0), radius, food_fill());

        assert!(matches!(result, Err(RenderError::InvalidRadius(_))));
        assert!(surface.commands().is_empty());
    }
}
