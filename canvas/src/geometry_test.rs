#![allow(clippy::float_cmp)]

use super::*;

const TOLERANCE: f64 = 1e-6;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

fn norm(x_center: f64, y_center: f64, width: f64, height: f64) -> NormalizedRect {
    NormalizedRect { x_center, y_center, width, height }
}

// --- normalized_to_canvas ---

#[test]
fn normalized_to_canvas_centered_box() {
    let rect = normalized_to_canvas(norm(0.5, 0.5, 0.2, 0.4), 640.0, 480.0);
    assert!(close(rect.left, 256.0));
    assert!(close(rect.top, 96.0));
    assert!(close(rect.width, 128.0));
    assert!(close(rect.height, 192.0));
}

#[test]
fn normalized_to_canvas_allows_overhang() {
    let rect = normalized_to_canvas(norm(0.05, 0.5, 0.2, 0.2), 100.0, 100.0);
    assert!(close(rect.left, -5.0));
}

// --- canvas_to_normalized ---

#[test]
fn canvas_to_normalized_applies_scale() {
    let rect = CanvasRect::new(100.0, 100.0, 50.0, 20.0);
    let n = canvas_to_normalized(rect, 2.0, 3.0, 400.0, 200.0);
    assert!(close(n.width, 0.25));
    assert!(close(n.height, 0.3));
    assert!(close(n.x_center, (100.0 + 50.0) / 400.0));
    assert!(close(n.y_center, (100.0 + 30.0) / 200.0));
}

#[test]
fn round_trip_within_tolerance() {
    let boxes = [
        norm(0.5, 0.5, 0.2, 0.4),
        norm(0.1, 0.9, 0.05, 0.01),
        norm(0.999, 0.001, 0.3, 0.7),
        norm(0.33333, 0.66667, 0.123_456, 0.654_321),
    ];
    let sizes = [(640.0, 480.0), (1.0, 1.0), (1920.0, 1080.0), (333.3, 17.0)];
    for b in boxes {
        for (w, h) in sizes {
            let back = canvas_to_normalized(normalized_to_canvas(b, w, h), 1.0, 1.0, w, h);
            assert!(close(back.x_center, b.x_center), "{b:?} at {w}x{h}");
            assert!(close(back.y_center, b.y_center), "{b:?} at {w}x{h}");
            assert!(close(back.width, b.width), "{b:?} at {w}x{h}");
            assert!(close(back.height, b.height), "{b:?} at {w}x{h}");
        }
    }
}

// --- fit_scale / Stage ---

#[test]
fn fit_scale_never_upscales() {
    assert_eq!(fit_scale(320.0, 240.0, 1280.0, 960.0), 1.0);
}

#[test]
fn fit_scale_limited_by_tighter_axis() {
    assert!(close(fit_scale(1920.0, 1080.0, 960.0, 1080.0), 0.5));
    assert!(close(fit_scale(1000.0, 2000.0, 1000.0, 500.0), 0.25));
}

#[test]
fn fit_scale_degenerate_image_is_one() {
    assert_eq!(fit_scale(0.0, 100.0, 500.0, 500.0), 1.0);
}

#[test]
fn stage_fit_logical_size() {
    let stage = Stage::fit(1280.0, 960.0, 640.0, 600.0);
    assert!(close(stage.scale, 0.5));
    assert!(close(stage.width(), 640.0));
    assert!(close(stage.height(), 480.0));
}

// --- CanvasRect ---

#[test]
fn from_corners_normalizes_drag_direction() {
    let r = CanvasRect::from_corners(Point::new(50.0, 80.0), Point::new(10.0, 20.0));
    assert_eq!(r, CanvasRect::new(10.0, 20.0, 40.0, 60.0));
}

#[test]
fn contains_includes_border() {
    let r = CanvasRect::new(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains(Point::new(10.0, 0.0)));
    assert!(!r.contains(Point::new(10.1, 5.0)));
}
