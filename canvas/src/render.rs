//! Rendering: draws the editor scene to a 2D context.
//!
//! Nothing else in the crate holds a [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of the engine state and produces pixels; it
//! does not mutate any application state. Everything is drawn in logical
//! canvas space under the camera transform, so stroke widths and handle sizes
//! are divided by the zoom to stay constant on screen.
//!
//! Context calls that can throw return `Result<(), JsValue>`;
//! [`crate::engine::Engine::render`] passes the error up to JavaScript.

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::classes::class_color;
use crate::consts::{BOX_STROKE_PX, HANDLE_RADIUS_PX, TAG_FONT_PX};
use crate::doc::Annotation;
use crate::engine::EngineCore;
use crate::geometry::CanvasRect;
use crate::hit::ResizeAnchor;

/// Selection and pending-rect dash segment length in screen pixels.
const DASH_PX: f64 = 4.0;

/// Tag text inset from the box edge, in screen pixels.
const TAG_PAD_PX: f64 = 3.0;

const SELECTION_COLOR: &str = "#1E90FF";
const TAG_TEXT_COLOR: &str = "#000";

/// Paint one frame of the editor in back-to-front order.
///
/// # Errors
///
/// Returns `Err` when the context rejects a call, such as drawing an image
/// that has not finished decoding.
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore, background: Option<&HtmlImageElement>) -> Result<(), JsValue> {
    let camera = core.camera;
    let zoom = camera.zoom;

    // Reset to device pixels and clear.
    ctx.set_transform(core.dpr, 0.0, 0.0, core.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, core.viewport_width, core.viewport_height);
    ctx.translate(camera.pan_x, camera.pan_y)?;
    ctx.scale(zoom, zoom)?;

    // Frame image, scaled to the logical canvas.
    if let Some(image) = background {
        ctx.draw_image_with_html_image_element_and_dw_and_dh(image, 0.0, 0.0, core.stage.width(), core.stage.height())?;
    }

    // Boxes in insertion order.
    for annotation in core.set.iter() {
        draw_annotation(ctx, annotation, zoom)?;
    }

    // Handles for the selected box.
    if let Some(selected) = core.ui.selected_id.and_then(|id| core.set.get(&id)) {
        draw_selection(ctx, &selected.effective_rect(), zoom)?;
    }

    // The box being drawn.
    if let Some(rect) = core.input.pending_rect() {
        let class_id = core.ui.new_box_class;
        draw_pending(ctx, &rect, class_id, core.classes.name(class_id), zoom)?;
    }

    Ok(())
}

fn draw_annotation(ctx: &CanvasRenderingContext2d, annotation: &Annotation, zoom: f64) -> Result<(), JsValue> {
    let rect = annotation.effective_rect();
    let color = annotation.color();

    ctx.save();
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(BOX_STROKE_PX / zoom);
    ctx.stroke_rect(rect.left, rect.top, rect.width, rect.height);
    draw_tag(ctx, &annotation.tag_text(), color, rect.left, rect.top, zoom)?;
    ctx.restore();
    Ok(())
}

/// Filled tag with the class label, sitting on the top edge of the box.
fn draw_tag(ctx: &CanvasRenderingContext2d, text: &str, color: &str, x: f64, y: f64, zoom: f64) -> Result<(), JsValue> {
    let font_px = TAG_FONT_PX / zoom;
    let pad = TAG_PAD_PX / zoom;
    ctx.set_font(&format!("{font_px}px sans-serif"));
    let text_w = measured_text_width(ctx, text);
    let tag_h = font_px + pad * 2.0;

    ctx.set_fill_style_str(color);
    ctx.fill_rect(x, y - tag_h, text_w + pad * 2.0, tag_h);
    ctx.set_fill_style_str(TAG_TEXT_COLOR);
    ctx.fill_text(text, x + pad, y - pad)?;
    Ok(())
}

fn measured_text_width(ctx: &CanvasRenderingContext2d, text: &str) -> f64 {
    match ctx.measure_text(text) {
        Ok(metrics) => metrics.width(),
        Err(_) => 0.0,
    }
}

fn set_dash(ctx: &CanvasRenderingContext2d, zoom: f64) -> Result<(), JsValue> {
    let dash_world = DASH_PX / zoom;
    let dash_array = js_sys::Array::new();
    dash_array.push(&dash_world.into());
    dash_array.push(&dash_world.into());
    ctx.set_line_dash(&dash_array)
}

// =============================================================
// Handles
// =============================================================

fn draw_selection(ctx: &CanvasRenderingContext2d, rect: &CanvasRect, zoom: f64) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_stroke_style_str(SELECTION_COLOR);
    ctx.set_line_width(1.0 / zoom);
    set_dash(ctx, zoom)?;
    ctx.stroke_rect(rect.left, rect.top, rect.width, rect.height);
    ctx.set_line_dash(&js_sys::Array::new())?;

    // Resize handles, constant size on screen.
    let half = HANDLE_RADIUS_PX / 2.0 / zoom;
    ctx.set_fill_style_str("#fff");
    for anchor in ResizeAnchor::ALL {
        let p = anchor.position(rect);
        ctx.fill_rect(p.x - half, p.y - half, half * 2.0, half * 2.0);
        ctx.stroke_rect(p.x - half, p.y - half, half * 2.0, half * 2.0);
    }
    ctx.restore();
    Ok(())
}

fn draw_pending(
    ctx: &CanvasRenderingContext2d,
    rect: &CanvasRect,
    class_id: u32,
    class_name: &str,
    zoom: f64,
) -> Result<(), JsValue> {
    let color = class_color(class_id);
    ctx.save();
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(BOX_STROKE_PX / zoom);
    set_dash(ctx, zoom)?;
    ctx.stroke_rect(rect.left, rect.top, rect.width, rect.height);
    ctx.set_line_dash(&js_sys::Array::new())?;
    draw_tag(ctx, class_name, color, rect.left, rect.top, zoom)?;
    ctx.restore();
    Ok(())
}
