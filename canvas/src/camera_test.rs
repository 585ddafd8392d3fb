#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_equality() {
    assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
    assert_ne!(Point::new(1.0, 2.0), Point::new(1.0, 3.0));
}

// --- Camera defaults ---

#[test]
fn camera_default_is_identity() {
    let cam = Camera::default();
    assert_eq!(cam.pan_x, 0.0);
    assert_eq!(cam.pan_y, 0.0);
    assert_eq!(cam.zoom, 1.0);
}

// --- screen_to_world / world_to_screen ---

#[test]
fn screen_to_world_identity() {
    let cam = Camera::default();
    let world = cam.screen_to_world(Point::new(50.0, 75.0));
    assert!(point_approx_eq(world, Point::new(50.0, 75.0)));
}

#[test]
fn screen_to_world_with_zoom_and_pan() {
    let cam = Camera { pan_x: 100.0, pan_y: 50.0, zoom: 2.0 };
    let world = cam.screen_to_world(Point::new(300.0, 250.0));
    assert!(point_approx_eq(world, Point::new(100.0, 100.0)));
}

#[test]
fn world_to_screen_inverts_screen_to_world() {
    let cam = Camera { pan_x: -37.5, pan_y: 12.25, zoom: 3.3 };
    let screen = Point::new(123.0, 456.0);
    let back = cam.world_to_screen(cam.screen_to_world(screen));
    assert!(point_approx_eq(screen, back));
}

#[test]
fn screen_dist_to_world_divides_by_zoom() {
    let cam = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 4.0 };
    assert!(approx_eq(cam.screen_dist_to_world(8.0), 2.0));
}

// --- pan_by ---

#[test]
fn pan_by_accumulates() {
    let mut cam = Camera::default();
    cam.pan_by(10.0, -5.0);
    cam.pan_by(2.5, 1.0);
    assert!(approx_eq(cam.pan_x, 12.5));
    assert!(approx_eq(cam.pan_y, -4.0));
    assert_eq!(cam.zoom, 1.0);
}

// --- zoom_at ---

#[test]
fn zoom_at_keeps_pivot_fixed() {
    let mut cam = Camera { pan_x: 20.0, pan_y: -10.0, zoom: 1.5 };
    let pivot = Point::new(200.0, 150.0);
    let before = cam.screen_to_world(pivot);
    assert!(cam.zoom_at(pivot, 1.8));
    let after = cam.screen_to_world(pivot);
    assert!(point_approx_eq(before, after));
    assert!(approx_eq(cam.zoom, 2.7));
}

#[test]
fn zoom_at_clamps_to_max() {
    let mut cam = Camera::default();
    cam.zoom_at(Point::new(0.0, 0.0), 100.0);
    assert_eq!(cam.zoom, ZOOM_MAX);
}

#[test]
fn zoom_at_clamps_to_min() {
    let mut cam = Camera::default();
    cam.zoom_at(Point::new(0.0, 0.0), 0.001);
    assert_eq!(cam.zoom, ZOOM_MIN);
}

#[test]
fn zoom_at_reports_no_change_at_limit() {
    let mut cam = Camera { pan_x: 3.0, pan_y: 4.0, zoom: ZOOM_MAX };
    assert!(!cam.zoom_at(Point::new(10.0, 10.0), 2.0));
    assert_eq!(cam.pan_x, 3.0);
    assert_eq!(cam.pan_y, 4.0);
}

#[test]
fn reset_returns_to_identity() {
    let mut cam = Camera { pan_x: 3.0, pan_y: 4.0, zoom: 2.0 };
    cam.reset();
    assert_eq!(cam.zoom, 1.0);
    assert_eq!(cam.pan_x, 0.0);
    assert_eq!(cam.pan_y, 0.0);
}
