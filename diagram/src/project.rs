//! Geometry projection: angle + viewport in, [`Scene`] out.
//!
//! One projector serves both diagrams; [`project`] dispatches on
//! [`DiagramKind`]. Each call rebuilds the scene from nothing, so a one-degree
//! change produces a complete new scene.
//!
//! Every pixel constant is designed at the diagram's desired size and
//! multiplied by the viewport's `scale` (see [`ViewportSize::scale_for`]).
//! That covers paddings, offsets, radii, stroke widths, and font sizes alike,
//! so a scene projected into a viewport twice as large is exactly twice as
//! large in every linear measurement.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::angle::{format_degrees, to_radians};
use crate::config::DiagramConfig;
use crate::consts::{
    AXIS_OVERHANG_PX, FONT_LARGE_PX, FONT_MEDIUM_PX, FONT_SMALL_PX, POINT_MARKER_RADIUS_PX, RIGHT_ANGLE_TICK_PX,
    SIDE_LABEL_OFFSET_PX, STROKE_PX, SWEEP_ARC_RATIO, SWEEP_LABEL_RATIO, THIN_STROKE_PX, TICK_STROKE_PX,
    TRIANGLE_ARC_RADIUS_PX, TRIANGLE_EXTENT_FRACTION, TRIANGLE_PADDING_PX, UNIT_CIRCLE_MARGIN_PX,
};
use crate::scene::{DiagramKind, Role, Scene, SceneBuilder, TextAlign};
use crate::viewport::{Point, UnitFrame, ViewportSize};

/// Gap between the vertical leg and its rotated label.
const OPPOSITE_LABEL_GAP_PX: f64 = 8.0;

/// Lift of the θ symbol above the half-angle point of the arc.
const THETA_LIFT_PX: f64 = 5.0;

/// Vertex label offsets from their vertex: apex, right angle, base corner.
const APEX_LABEL_OFFSET: (f64, f64) = (-15.0, -10.0);
const RIGHT_ANGLE_LABEL_OFFSET: (f64, f64) = (-20.0, 20.0);
const BASE_LABEL_OFFSET: (f64, f64) = (10.0, 20.0);

/// Axis endpoint labels as (text, dx, dy) relative to the circle's extremes.
const AXIS_LABELS: [(&str, AxisEnd, f64, f64); 5] = [
    ("1", AxisEnd::Right, 15.0, 5.0),
    ("-1", AxisEnd::Left, -20.0, 5.0),
    ("1", AxisEnd::Top, -5.0, -10.0),
    ("-1", AxisEnd::Bottom, -10.0, 20.0),
    ("0", AxisEnd::Origin, 5.0, 15.0),
];

#[derive(Debug, Clone, Copy)]
enum AxisEnd {
    Right,
    Left,
    Top,
    Bottom,
    Origin,
}

// =============================================================
// Entry points
// =============================================================

/// Project `kind` at `angle_deg` degrees into `viewport`.
#[must_use]
pub fn project(kind: DiagramKind, angle_deg: f64, viewport: ViewportSize, config: &DiagramConfig) -> Scene {
    log::trace!(
        "project {kind} at {angle_deg}° into {}x{}",
        viewport.width,
        viewport.height
    );
    match kind {
        DiagramKind::Triangle => triangle_scene(angle_deg, viewport, config),
        DiagramKind::UnitCircle => unit_circle_scene(angle_deg, viewport, config),
    }
}

/// Right-triangle scene with the default configuration.
#[must_use]
pub fn project_triangle(angle_deg: f64, viewport: ViewportSize) -> Scene {
    project(DiagramKind::Triangle, angle_deg, viewport, &DiagramConfig::default())
}

/// Unit-circle scene with the default configuration.
#[must_use]
pub fn project_unit_circle(angle_deg: f64, viewport: ViewportSize) -> Scene {
    project(DiagramKind::UnitCircle, angle_deg, viewport, &DiagramConfig::default())
}

// =============================================================
// Right triangle
// =============================================================

/// Pixel layout of the right triangle.
///
/// Meaningful for angles strictly between 0° and 90°. Outside that range the
/// legs collapse to zero or turn negative; the geometry is still computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleGeometry {
    pub scale: f64,
    pub padding: f64,
    /// Hypotenuse length; side of the square the triangle is fitted into.
    pub extent: f64,
    pub angle_rad: f64,
    /// Vertex A, above the right angle.
    pub apex: Point,
    /// Vertex B, the right angle.
    pub right_angle: Point,
    /// Vertex C, at the end of the base.
    pub base_corner: Point,
}

impl TriangleGeometry {
    /// Lay out the triangle for `angle_deg` in `viewport`.
    #[must_use]
    pub fn new(angle_deg: f64, viewport: ViewportSize, config: &DiagramConfig) -> Self {
        let scale = viewport.scale_for(config.triangle_size);
        let padding = TRIANGLE_PADDING_PX * scale;
        let extent =
            (viewport.width - 2.0 * padding).min(viewport.height - 2.0 * padding) * TRIANGLE_EXTENT_FRACTION;

        let angle_rad = to_radians(angle_deg);
        let height = angle_rad.sin() * extent;
        let base = angle_rad.cos() * extent;

        // The square of side `extent` is centered horizontally; B sits on its
        // left edge so the corner stays put while the angle changes.
        let right_angle = Point::new((viewport.width - extent) * 0.5, viewport.height - padding);
        let base_corner = right_angle.offset(base, 0.0);
        let apex = right_angle.offset(0.0, -height);

        Self { scale, padding, extent, angle_rad, apex, right_angle, base_corner }
    }

    /// Length of the side opposite the angle (A–B).
    #[must_use]
    pub fn opposite(&self) -> f64 {
        self.right_angle.y - self.apex.y
    }

    /// Length of the side adjacent to the angle (B–C).
    #[must_use]
    pub fn adjacent(&self) -> f64 {
        self.base_corner.x - self.right_angle.x
    }
}

fn triangle_scene(angle_deg: f64, viewport: ViewportSize, config: &DiagramConfig) -> Scene {
    let geo = TriangleGeometry::new(angle_deg, viewport, config);
    let scale = geo.scale;
    let (a, b, c) = (geo.apex, geo.right_angle, geo.base_corner);
    let mut out = SceneBuilder::new(scale);

    // Body.
    out.polygon(vec![b, c, a], true, Some(Role::Shape), None);
    let outline = out.stroke(Role::Outline, STROKE_PX);
    out.polygon(vec![b, c, a], true, None, Some(outline));

    // Right-angle square in the corner at B.
    let tick = RIGHT_ANGLE_TICK_PX * scale;
    let tick_stroke = out.stroke(Role::Indicator, TICK_STROKE_PX);
    out.polygon(
        vec![b.offset(0.0, -tick), b.offset(tick, -tick), b.offset(tick, 0.0)],
        false,
        None,
        Some(tick_stroke),
    );

    // Angle indicator.
    let arc_radius = TRIANGLE_ARC_RADIUS_PX * scale;
    let arc_stroke = out.stroke(Role::Indicator, STROKE_PX);
    out.arc(b, arc_radius, 0.0, geo.angle_rad, arc_stroke);

    // Side names.
    let opposite_at = a.midpoint(b).offset(-OPPOSITE_LABEL_GAP_PX * scale, 0.0);
    let label = out.text("opposite", opposite_at, FONT_MEDIUM_PX, Role::Text).mono().rotated(FRAC_PI_2);
    out.label(label);

    let adjacent_at = b.midpoint(c).offset(0.0, SIDE_LABEL_OFFSET_PX * scale);
    let label = out.text("adjacent", adjacent_at, FONT_MEDIUM_PX, Role::Text).mono();
    out.label(label);

    let (nx, ny) = outward_normal(a, c);
    let hyp_at = a.midpoint(c).offset(nx * SIDE_LABEL_OFFSET_PX * scale, ny * SIDE_LABEL_OFFSET_PX * scale);
    let slope = geo.opposite().atan2(geo.adjacent());
    let label = out.text("hypotenuse", hyp_at, FONT_MEDIUM_PX, Role::Text).mono().rotated(-slope);
    out.label(label);

    // θ beside the arc.
    let half = geo.angle_rad * 0.5;
    let theta_at = Point::new(b.x + arc_radius * half.cos(), b.y - arc_radius * half.sin() - THETA_LIFT_PX * scale);
    let label = out.text("θ", theta_at, FONT_LARGE_PX, Role::Indicator).bold().aligned(TextAlign::Left);
    out.label(label);

    // Vertex names.
    for (name, vertex, (dx, dy)) in [
        ("A", a, APEX_LABEL_OFFSET),
        ("B", b, RIGHT_ANGLE_LABEL_OFFSET),
        ("C", c, BASE_LABEL_OFFSET),
    ] {
        let label = out.text(name, vertex.offset(dx * scale, dy * scale), FONT_MEDIUM_PX, Role::Text).bold();
        out.label(label.aligned(TextAlign::Left));
    }

    // Current value in the bottom-right corner.
    let value_at = Point::new(viewport.width - geo.padding, viewport.height - geo.padding);
    let text = format!("θ = {}°", format_degrees(angle_deg));
    let label = out.text(text, value_at, FONT_SMALL_PX, Role::Muted).mono().aligned(TextAlign::Right);
    out.label(label);

    out.finish(DiagramKind::Triangle, angle_deg, viewport)
}

/// Unit normal of `from`–`to` pointing up and to the right of the segment
/// (away from the right angle). Straight up for a zero-length segment.
fn outward_normal(from: Point, to: Point) -> (f64, f64) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let len = dx.hypot(dy);
    if len > 0.0 { (dy / len, -dx / len) } else { (0.0, -1.0) }
}

// =============================================================
// Unit circle
// =============================================================

/// Pixel layout of the unit circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitCircleGeometry {
    pub scale: f64,
    pub center: Point,
    pub radius: f64,
    pub angle_rad: f64,
    /// The point at the angle on the circle.
    pub point: Point,
    /// Projection of `point` onto the horizontal axis.
    pub foot: Point,
}

impl UnitCircleGeometry {
    /// Lay out the unit circle for `angle_deg` in `viewport`.
    #[must_use]
    pub fn new(angle_deg: f64, viewport: ViewportSize, config: &DiagramConfig) -> Self {
        let scale = viewport.scale_for(config.circle_size);
        let center = viewport.center();
        let radius = viewport.min_side() * 0.5 - UNIT_CIRCLE_MARGIN_PX * scale;
        let angle_rad = to_radians(angle_deg);

        let frame = UnitFrame { origin: center, unit: radius };
        let point = frame.on_circle(angle_rad);
        let foot = Point::new(point.x, center.y);

        Self { scale, center, radius, angle_rad, point, foot }
    }

    /// Pixel mapping of math coordinates for this circle.
    #[must_use]
    pub fn frame(&self) -> UnitFrame {
        UnitFrame { origin: self.center, unit: self.radius }
    }
}

fn unit_circle_scene(angle_deg: f64, viewport: ViewportSize, config: &DiagramConfig) -> Scene {
    let geo = UnitCircleGeometry::new(angle_deg, viewport, config);
    let scale = geo.scale;
    let (center, radius, point) = (geo.center, geo.radius, geo.point);
    let mut out = SceneBuilder::new(scale);

    let circle = out.stroke(Role::Circle, STROKE_PX);
    out.arc(center, radius, 0.0, TAU, circle);

    let reach = radius + AXIS_OVERHANG_PX * scale;
    let axis = out.stroke(Role::Axis, THIN_STROKE_PX);
    out.segment(center.offset(-reach, 0.0), center.offset(reach, 0.0), axis);
    out.segment(center.offset(0.0, -reach), center.offset(0.0, reach), axis);

    let ray = out.stroke(Role::Outline, STROKE_PX);
    out.segment(center, point, ray);

    let sweep_radius = radius * SWEEP_ARC_RATIO;
    let sweep = out.stroke(Role::Indicator, STROKE_PX);
    out.arc(center, sweep_radius, 0.0, geo.angle_rad, sweep);

    let guide = out.stroke(Role::Guide, THIN_STROKE_PX);
    out.polygon(vec![point, geo.foot, center], true, Some(Role::Guide), Some(guide));

    out.marker(point, POINT_MARKER_RADIUS_PX, Role::Outline);

    // Leg names.
    let cos_at = Point::new((center.x + point.x) * 0.5, center.y + SIDE_LABEL_OFFSET_PX * scale);
    let label = out.text("cos θ", cos_at, FONT_SMALL_PX, Role::Highlight).bold().mono();
    out.label(label);

    let sin_at = Point::new(point.x + SIDE_LABEL_OFFSET_PX * scale, (center.y + point.y) * 0.5);
    let label = out.text("sin θ", sin_at, FONT_SMALL_PX, Role::Highlight).bold().mono();
    out.label(label);

    // Coordinates of the point.
    let ev = config.evaluator();
    let coords = format!("({}, {})", ev.round(geo.angle_rad.cos()), ev.round(geo.angle_rad.sin()));
    let label = out.text(coords, point.offset(0.0, -SIDE_LABEL_OFFSET_PX * scale), FONT_SMALL_PX, Role::Muted).mono();
    out.label(label);

    // Angle value along the half-angle, just outside the sweep arc.
    let half = geo.angle_rad * 0.5;
    let reach = sweep_radius * SWEEP_LABEL_RATIO;
    let value_at = Point::new(center.x + reach * half.cos(), center.y - reach * half.sin());
    let label = out.text(format!("{}°", format_degrees(angle_deg)), value_at, FONT_MEDIUM_PX, Role::Indicator);
    out.label(label.bold());

    for (text, end, dx, dy) in AXIS_LABELS {
        let base = match end {
            AxisEnd::Right => center.offset(radius, 0.0),
            AxisEnd::Left => center.offset(-radius, 0.0),
            AxisEnd::Top => center.offset(0.0, -radius),
            AxisEnd::Bottom => center.offset(0.0, radius),
            AxisEnd::Origin => center,
        };
        let label = out.text(text, base.offset(dx * scale, dy * scale), FONT_SMALL_PX, Role::AxisLabel).bold();
        out.label(label);
    }

    out.finish(DiagramKind::UnitCircle, angle_deg, viewport)
}
