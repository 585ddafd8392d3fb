//! Coordinate transforms between normalized label space and the logical canvas.
//!
//! Labels are stored center-based and normalized to the frame dimensions. The
//! editor works in the *logical* canvas: the frame image scaled once by the
//! fit-to-container factor. Zoom and pan are layered on top by
//! [`crate::camera::Camera`] and never baked into stored coordinates.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;

/// Corner-based rectangle in logical canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Rectangle spanned by two corners in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self { left: a.x.min(b.x), top: a.y.min(b.y), width: (b.x - a.x).abs(), height: (b.y - a.y).abs() }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether `pt` lies inside or on the border of the rectangle.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.left && pt.x <= self.right() && pt.y >= self.top && pt.y <= self.bottom()
    }
}

/// Center-based rectangle normalized to the frame dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NormalizedRect {
    pub x_center: f64,
    pub y_center: f64,
    pub width: f64,
    pub height: f64,
}

/// Convert a normalized box into logical canvas pixels.
///
/// `canvas_width` / `canvas_height` are the unzoomed logical canvas size.
#[must_use]
pub fn normalized_to_canvas(rect: NormalizedRect, canvas_width: f64, canvas_height: f64) -> CanvasRect {
    CanvasRect {
        left: (rect.x_center - rect.width / 2.0) * canvas_width,
        top: (rect.y_center - rect.height / 2.0) * canvas_height,
        width: rect.width * canvas_width,
        height: rect.height * canvas_height,
    }
}

/// Convert a canvas rectangle back into normalized form.
///
/// `scale_x` / `scale_y` are the handle's pending scale factors; the effective
/// size is the stored size multiplied by them.
#[must_use]
pub fn canvas_to_normalized(
    rect: CanvasRect,
    scale_x: f64,
    scale_y: f64,
    canvas_width: f64,
    canvas_height: f64,
) -> NormalizedRect {
    let width = rect.width * scale_x;
    let height = rect.height * scale_y;
    NormalizedRect {
        x_center: (rect.left + width / 2.0) / canvas_width,
        y_center: (rect.top + height / 2.0) / canvas_height,
        width: width / canvas_width,
        height: height / canvas_height,
    }
}

/// Factor that fits an image inside a container without upscaling.
///
/// Degenerate image dimensions yield `1.0`.
#[must_use]
pub fn fit_scale(image_width: f64, image_height: f64, container_width: f64, container_height: f64) -> f64 {
    if image_width <= 0.0 || image_height <= 0.0 {
        return 1.0;
    }
    (container_width / image_width).min(container_height / image_height).min(1.0)
}

/// The displayed frame: native image size plus the fit factor computed at load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    pub image_width: f64,
    pub image_height: f64,
    pub scale: f64,
}

impl Default for Stage {
    fn default() -> Self {
        Self { image_width: 0.0, image_height: 0.0, scale: 1.0 }
    }
}

impl Stage {
    /// Fit an image of the given size into a container.
    #[must_use]
    pub fn fit(image_width: f64, image_height: f64, container_width: f64, container_height: f64) -> Self {
        Self { image_width, image_height, scale: fit_scale(image_width, image_height, container_width, container_height) }
    }

    /// Logical canvas width in CSS pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.image_width * self.scale
    }

    /// Logical canvas height in CSS pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.image_height * self.scale
    }
}
