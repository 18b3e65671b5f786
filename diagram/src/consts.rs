//! Shared numeric constants for the diagram crate.
//!
//! Every pixel length below is expressed at the diagram's desired canvas size
//! and multiplied by the scene's `scale` when projected.

// ── Evaluation ──────────────────────────────────────────────────

/// Decimal places used for every displayed trigonometric value.
pub const DEFAULT_DECIMALS: u32 = 3;

/// Largest supported rounding precision; `10^15` is still exact in an `f64`.
pub const MAX_DECIMALS: u32 = 15;

// ── Desired canvas sizes ────────────────────────────────────────

/// Desired width of the triangle canvas in CSS pixels.
pub const TRIANGLE_DESIRED_WIDTH: f64 = 400.0;

/// Desired height of the triangle canvas in CSS pixels (4:3 aspect).
pub const TRIANGLE_DESIRED_HEIGHT: f64 = 300.0;

/// Desired side of the square unit-circle canvas in CSS pixels.
pub const UNIT_CIRCLE_DESIRED_SIZE: f64 = 350.0;

/// Floor applied to desired dimensions before dividing by them.
pub const MIN_DESIRED_PX: f64 = 1.0;

// ── Triangle ────────────────────────────────────────────────────

/// Padding between the viewport edge and the triangle.
pub const TRIANGLE_PADDING_PX: f64 = 40.0;

/// Share of the padded square actually used by the triangle; the rest is
/// room for labels.
pub const TRIANGLE_EXTENT_FRACTION: f64 = 0.85;

/// Leg length of the right-angle tick mark.
pub const RIGHT_ANGLE_TICK_PX: f64 = 15.0;

/// Radius of the angle indicator arc.
pub const TRIANGLE_ARC_RADIUS_PX: f64 = 30.0;

/// Offset of side labels from the side they name.
pub const SIDE_LABEL_OFFSET_PX: f64 = 15.0;

// ── Unit circle ─────────────────────────────────────────────────

/// Gap between the circle and the viewport edge.
pub const UNIT_CIRCLE_MARGIN_PX: f64 = 20.0;

/// How far the axes extend past the circle.
pub const AXIS_OVERHANG_PX: f64 = 10.0;

/// Radius of the dot drawn at the angle point.
pub const POINT_MARKER_RADIUS_PX: f64 = 5.0;

/// Swept-angle arc radius as a fraction of the circle radius.
pub const SWEEP_ARC_RATIO: f64 = 0.3;

/// Distance of the angle value label from the center, relative to the
/// swept-angle arc radius.
pub const SWEEP_LABEL_RATIO: f64 = 1.2;

// ── Strokes and type ────────────────────────────────────────────

/// Width of primary outlines (triangle, radius line, circle).
pub const STROKE_PX: f64 = 2.0;

/// Width of secondary lines (axes, reference triangle).
pub const THIN_STROKE_PX: f64 = 1.0;

/// Width of the right-angle tick.
pub const TICK_STROKE_PX: f64 = 1.5;

/// Font size for side labels and values.
pub const FONT_SMALL_PX: f64 = 12.0;

/// Font size for vertex and side labels.
pub const FONT_MEDIUM_PX: f64 = 14.0;

/// Font size for the θ symbol.
pub const FONT_LARGE_PX: f64 = 16.0;

// ── Shell ───────────────────────────────────────────────────────

/// Lowest value of the triangle slider.
pub const SLIDER_MIN_DEG: f64 = 1.0;

/// Highest value of the triangle slider.
pub const SLIDER_MAX_DEG: f64 = 89.0;

/// Angle shown on the triangle and the calculator at load.
pub const INITIAL_TRIANGLE_DEG: f64 = 30.0;

/// Angle shown on the unit circle at load.
pub const INITIAL_CIRCLE_DEG: f64 = 0.0;
