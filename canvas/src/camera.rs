#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{ZOOM_MAX, ZOOM_MIN};

/// A point in either screen or canvas (world) space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Camera state for pan/zoom on top of the fitted frame.
///
/// World space is the unzoomed logical canvas (the frame image scaled by the
/// fit factor). `pan_x` / `pan_y` are in CSS pixels. `zoom` is a scale factor
/// (1.0 = no zoom) kept within [`ZOOM_MIN`, `ZOOM_MAX`].
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point { x: (screen.x - self.pan_x) / self.zoom, y: (screen.y - self.pan_y) / self.zoom }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point { x: world.x * self.zoom + self.pan_x, y: world.y * self.zoom + self.pan_y }
    }

    /// Convert a screen-space distance (pixels) to world-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Shift the view by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Multiply the zoom by `factor` while keeping the world point under
    /// `pivot` (screen space) fixed. The result is clamped to the zoom limits.
    ///
    /// Returns `true` if the camera changed.
    pub fn zoom_at(&mut self, pivot: Point, factor: f64) -> bool {
        let new_zoom = (self.zoom * factor).clamp(ZOOM_MIN, ZOOM_MAX);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return false;
        }
        let world = self.screen_to_world(pivot);
        self.zoom = new_zoom;
        self.pan_x = pivot.x - world.x * new_zoom;
        self.pan_y = pivot.y - world.y * new_zoom;
        true
    }

    /// Return to identity: `zoom = 1`, no pan.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
