//! SVG painter for scenes, the headless counterpart of the canvas renderer.
//!
//! Output uses the same palette and fonts as the browser. Scene angles are
//! counterclockwise on screen while SVG rotations and arc sweeps run
//! clockwise, so rotations are negated and counterclockwise arcs use
//! sweep-flag 0.

#[cfg(test)]
#[path = "svg_out_test.rs"]
mod svg_out_test;

use std::f64::consts::{PI, TAU};

use diagram::angle::{round, to_degrees};
use diagram::scene::{Arc, Label, Marker, Polygon, Primitive, Scene, Segment, Stroke, TextAlign};
use diagram::style;
use svg::Document;
use svg::node::element::{Circle, Line, Path, Polygon as SvgPolygon, Polyline, Rectangle, Text};

/// Sweeps within this many radians of a full turn are drawn as circles.
const FULL_TURN_EPSILON: f64 = 1e-9;

/// Decimal places kept for coordinates in the output.
const COORD_DECIMALS: u32 = 2;

/// Build the SVG document for `scene`.
#[must_use]
pub fn to_document(scene: &Scene) -> Document {
    let (w, h) = (scene.viewport.width.max(0.0), scene.viewport.height.max(0.0));
    let mut doc = Document::new()
        .set("width", num(w))
        .set("height", num(h))
        .set("viewBox", format!("0 0 {} {}", num(w), num(h)))
        .add(Rectangle::new().set("width", "100%").set("height", "100%").set("fill", "white"));

    for primitive in &scene.primitives {
        doc = match primitive {
            Primitive::Polygon(p) => add_polygon(doc, p),
            Primitive::Arc(a) => add_arc(doc, a),
            Primitive::Segment(s) => doc.add(segment(s)),
            Primitive::Marker(m) => add_marker(doc, m),
            Primitive::Label(l) => add_label(doc, l),
        };
    }
    doc
}

/// Render `scene` as SVG text.
#[must_use]
pub fn render(scene: &Scene) -> String {
    to_document(scene).to_string()
}

// =============================================================
// Shapes
// =============================================================

fn add_polygon(doc: Document, poly: &Polygon) -> Document {
    if poly.points.is_empty() {
        return doc;
    }
    let points = poly
        .points
        .iter()
        .map(|p| format!("{},{}", num(p.x), num(p.y)))
        .collect::<Vec<_>>()
        .join(" ");
    let fill = poly.fill.map_or("none", style::color);

    if poly.closed {
        let el = SvgPolygon::new().set("points", points).set("fill", fill);
        doc.add(match poly.stroke {
            Some(stroke) => with_stroke(el, stroke),
            None => el,
        })
    } else {
        let el = Polyline::new().set("points", points).set("fill", fill);
        doc.add(match poly.stroke {
            Some(stroke) => with_stroke(el, stroke),
            None => el,
        })
    }
}

fn add_arc(doc: Document, arc: &Arc) -> Document {
    let sweep = arc.sweep();
    if arc.radius <= 0.0 || sweep == 0.0 || !sweep.is_finite() {
        return doc;
    }

    if sweep.abs() >= TAU - FULL_TURN_EPSILON {
        let el = Circle::new()
            .set("cx", num(arc.center.x))
            .set("cy", num(arc.center.y))
            .set("r", num(arc.radius))
            .set("fill", "none");
        return doc.add(with_stroke(el, arc.stroke));
    }

    let from = arc.point_at(arc.start);
    let to = arc.point_at(arc.end);
    let large = u8::from(sweep.abs() > PI);
    let clockwise = u8::from(sweep < 0.0);
    let r = num(arc.radius);
    let d = format!(
        "M {} {} A {r} {r} 0 {large} {clockwise} {} {}",
        num(from.x),
        num(from.y),
        num(to.x),
        num(to.y)
    );
    let el = Path::new().set("d", d).set("fill", "none");
    doc.add(with_stroke(el, arc.stroke))
}

fn segment(seg: &Segment) -> Line {
    let el = Line::new()
        .set("x1", num(seg.from.x))
        .set("y1", num(seg.from.y))
        .set("x2", num(seg.to.x))
        .set("y2", num(seg.to.y));
    with_stroke(el, seg.stroke)
}

fn add_marker(doc: Document, marker: &Marker) -> Document {
    if marker.radius <= 0.0 {
        return doc;
    }
    doc.add(
        Circle::new()
            .set("cx", num(marker.center.x))
            .set("cy", num(marker.center.y))
            .set("r", num(marker.radius))
            .set("fill", style::color(marker.role)),
    )
}

// =============================================================
// Text
// =============================================================

fn add_label(doc: Document, label: &Label) -> Document {
    if label.text.is_empty() || label.size <= 0.0 {
        return doc;
    }
    let (x, y) = (num(label.anchor.x), num(label.anchor.y));
    let mut el = Text::new()
        .set("x", x.clone())
        .set("y", y.clone())
        .set("fill", style::color(label.role))
        .set("font-family", style::font_family(label.face))
        .set("font-size", num(label.size))
        .set("text-anchor", text_anchor(label.align));
    if label.bold {
        el = el.set("font-weight", "bold");
    }
    if label.rotation != 0.0 {
        let deg = num(-to_degrees(label.rotation));
        el = el.set("transform", format!("rotate({deg} {x} {y})"));
    }
    doc.add(el.add(svg::node::Text::new(label.text.clone())))
}

fn text_anchor(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "start",
        TextAlign::Center => "middle",
        TextAlign::Right => "end",
    }
}

// =============================================================
// Helpers
// =============================================================

fn with_stroke<T: svg::Node>(el: T, stroke: Stroke) -> T {
    let mut el = el;
    el.assign("stroke", style::stroke_color(stroke.role));
    el.assign("stroke-width", num(stroke.width));
    el.assign("stroke-linecap", "round");
    el.assign("stroke-linejoin", "round");
    el
}

/// Compact decimal form of a coordinate.
fn num(value: f64) -> String {
    round(value, COORD_DECIMALS).to_string()
}
