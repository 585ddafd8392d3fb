//! Shared numeric constants for the canvas crate.

// ── Camera ──────────────────────────────────────────────────────

/// Lower bound for the viewport zoom factor.
pub const ZOOM_MIN: f64 = 0.5;

/// Upper bound for the viewport zoom factor.
pub const ZOOM_MAX: f64 = 5.0;

/// Per-pixel wheel zoom base: `zoom *= WHEEL_ZOOM_BASE.powf(delta_y)`.
pub const WHEEL_ZOOM_BASE: f64 = 0.999;

// ── Drawing ─────────────────────────────────────────────────────

/// Minimum width and height, in logical canvas pixels, for a drawn box to be kept.
pub const MIN_DRAW_SIZE_PX: f64 = 10.0;

/// Smallest size a resize gesture can shrink a box to, in logical canvas pixels.
pub const MIN_RESIZE_PX: f64 = 1.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels for resize handles.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

// ── Rendering ───────────────────────────────────────────────────

/// Stroke width of annotation rectangles in screen pixels.
pub const BOX_STROKE_PX: f64 = 2.0;

/// Label tag font size in screen pixels.
pub const TAG_FONT_PX: f64 = 12.0;
