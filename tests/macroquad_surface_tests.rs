#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use evo_viewport::render::macroquad_surface::{
    arc_points, arc_segments, fan_triangles, path_segments,
};
use evo_viewport::render::shapes::triangle_vertices;
use macroquad::math::{Vec2, vec2};
use std::f32::consts::{FRAC_PI_2, TAU};

const EPS: f32 = 1e-4;

fn assert_close(a: Vec2, b: Vec2) {
    assert!(
        (a - b).length() < EPS,
        "expected {:?} to be close to {:?}",
        a,
        b
    );
}

#[test]
fn test_closed_triangle_path_fans_from_first_point() {
    let [nose, tail_a, tail_b] = triangle_vertices(vec2(10.0, 10.0), 2.0, 0.0);
    let path = [nose, tail_a, tail_b, nose];

    let triangles = fan_triangles(&path);

    assert_eq!(triangles.len(), 2);
    assert_eq!(triangles[0], [nose, tail_a, tail_b]);
    // the closing point makes a degenerate second triangle
    assert_eq!(triangles[1], [nose, tail_b, nose]);
    assert!(triangles.iter().all(|t| t[0] == nose));
}

#[test]
fn test_short_paths_fill_nothing() {
    assert!(fan_triangles(&[]).is_empty());
    assert!(fan_triangles(&[vec2(1.0, 1.0)]).is_empty());
    assert!(fan_triangles(&[vec2(1.0, 1.0), vec2(2.0, 2.0)]).is_empty());
}

#[test]
fn test_segments_join_consecutive_points() {
    let path = [vec2(0.0, 0.0), vec2(4.0, 0.0), vec2(4.0, 3.0), vec2(0.0, 0.0)];

    let segments = path_segments(&path);

    assert_eq!(segments.len(), path.len() - 1);
    assert_eq!(segments[0], [path[0], path[1]]);
    assert_eq!(segments[2], [path[2], path[3]]);
    assert!(path_segments(&[vec2(1.0, 1.0)]).is_empty());
}

#[test]
fn test_full_circle_points_close_on_start() {
    let center = vec2(25.0, 30.0);
    let points = arc_points(center, 2.0, 0.0, TAU, 16);

    assert_eq!(points.len(), 17);
    assert_close(points[0], vec2(27.0, 30.0));
    assert_close(points[16], points[0]);
    assert_close(points[4], vec2(25.0, 32.0));
    for point in &points {
        assert!(((*point - center).length() - 2.0).abs() < EPS);
    }
}

#[test]
fn test_quarter_arc_and_clamped_sweep() {
    let quarter = arc_points(Vec2::ZERO, 1.0, 0.0, FRAC_PI_2, 1);
    assert_eq!(quarter.len(), 2);
    assert_close(quarter[1], vec2(0.0, 1.0));

    // more than a full turn is drawn as one turn
    let over = arc_points(Vec2::ZERO, 1.0, 0.0, 3.0 * TAU, 4);
    assert_close(over[2], vec2(-1.0, 0.0));
}

#[test]
fn test_arc_segments_are_bounded() {
    assert_eq!(arc_segments(0.0, TAU), 12);
    assert_eq!(arc_segments(10_000.0, TAU), 96);
    assert_eq!(arc_segments(64.0, TAU), 48);
}
