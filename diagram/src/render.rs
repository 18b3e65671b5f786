//! Rendering: paints a [`Scene`] onto a 2D canvas context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a finished scene and produces pixels. It does not compute
//! geometry and does not mutate any application state.
//!
//! Scene angles are counterclockwise on screen; Canvas2D angles run clockwise,
//! so every angle is negated on the way in.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::dispatch`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::scene::{Arc, Label, Marker, Polygon, Primitive, Scene, Segment, Stroke, TextAlign};
use crate::style;

/// Draw the full scene.
///
/// `dpr` is the device pixel ratio; the backing store is expected to be
/// `dpr` times the scene's viewport.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, scene: &Scene, dpr: f64) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, scene.viewport.width, scene.viewport.height);
    if !scene.viewport.is_drawable() {
        return Ok(());
    }

    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    for primitive in &scene.primitives {
        draw_primitive(ctx, primitive)?;
    }
    Ok(())
}

// =============================================================
// Primitive dispatch
// =============================================================

fn draw_primitive(ctx: &CanvasRenderingContext2d, primitive: &Primitive) -> Result<(), JsValue> {
    match primitive {
        Primitive::Polygon(p) => {
            draw_polygon(ctx, p);
            Ok(())
        }
        Primitive::Arc(a) => draw_arc(ctx, a),
        Primitive::Segment(s) => {
            draw_segment(ctx, s);
            Ok(())
        }
        Primitive::Marker(m) => draw_marker(ctx, m),
        Primitive::Label(l) => draw_label(ctx, l),
    }
}

// =============================================================
// Shape renderers
// =============================================================

fn draw_polygon(ctx: &CanvasRenderingContext2d, poly: &Polygon) {
    let Some((first, rest)) = poly.points.split_first() else {
        return;
    };

    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    if poly.closed {
        ctx.close_path();
    }

    if let Some(role) = poly.fill {
        ctx.set_fill_style_str(style::color(role));
        ctx.fill();
    }
    if let Some(stroke) = poly.stroke {
        apply_stroke(ctx, stroke);
        ctx.stroke();
    }
}

fn draw_arc(ctx: &CanvasRenderingContext2d, arc: &Arc) -> Result<(), JsValue> {
    if arc.radius <= 0.0 {
        return Ok(());
    }
    ctx.begin_path();
    ctx.arc_with_anticlockwise(arc.center.x, arc.center.y, arc.radius, -arc.start, -arc.end, arc.end > arc.start)?;
    apply_stroke(ctx, arc.stroke);
    ctx.stroke();
    Ok(())
}

fn draw_segment(ctx: &CanvasRenderingContext2d, seg: &Segment) {
    ctx.begin_path();
    ctx.move_to(seg.from.x, seg.from.y);
    ctx.line_to(seg.to.x, seg.to.y);
    apply_stroke(ctx, seg.stroke);
    ctx.stroke();
}

fn draw_marker(ctx: &CanvasRenderingContext2d, marker: &Marker) -> Result<(), JsValue> {
    if marker.radius <= 0.0 {
        return Ok(());
    }
    ctx.begin_path();
    ctx.arc(marker.center.x, marker.center.y, marker.radius, 0.0, std::f64::consts::TAU)?;
    ctx.set_fill_style_str(style::color(marker.role));
    ctx.fill();
    Ok(())
}

// =============================================================
// Text
// =============================================================

fn draw_label(ctx: &CanvasRenderingContext2d, label: &Label) -> Result<(), JsValue> {
    if label.text.is_empty() || label.size <= 0.0 {
        return Ok(());
    }
    ctx.save();
    ctx.translate(label.anchor.x, label.anchor.y)?;
    if label.rotation != 0.0 {
        ctx.rotate(-label.rotation)?;
    }
    ctx.set_fill_style_str(style::color(label.role));
    ctx.set_font(&style::font(label));
    ctx.set_text_align(text_align(label.align));
    ctx.set_text_baseline("alphabetic");
    ctx.fill_text(&label.text, 0.0, 0.0)?;
    ctx.restore();
    Ok(())
}

fn text_align(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "left",
        TextAlign::Center => "center",
        TextAlign::Right => "right",
    }
}

// =============================================================
// Helpers
// =============================================================

fn apply_stroke(ctx: &CanvasRenderingContext2d, stroke: Stroke) {
    ctx.set_stroke_style_str(style::stroke_color(stroke.role));
    ctx.set_line_width(stroke.width);
}
