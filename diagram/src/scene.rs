//! Scene model: the renderer-agnostic output of a projection.
//!
//! A [`Scene`] is an ordered list of [`Primitive`]s in pixel coordinates,
//! already scaled to the viewport it was projected for. Renderers walk the
//! list front to back; later primitives paint over earlier ones.
//!
//! Angles stored in primitives (arc start/end, label rotation) are radians
//! measured counterclockwise as seen on screen. Canvas and SVG both treat
//! positive angles as clockwise, so renderers negate them.
//!
//! Primitives carry a [`Role`] rather than a color; mapping roles to paint is
//! the renderer's job (see [`crate::style`]).

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DiagramError;
use crate::viewport::{Point, ViewportSize};

/// Which diagram a scene depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagramKind {
    /// Right triangle with labelled sides.
    Triangle,
    /// Unit circle with the sine/cosine reference triangle.
    UnitCircle,
}

impl DiagramKind {
    pub const ALL: [Self; 2] = [Self::Triangle, Self::UnitCircle];

    /// Short name used on the command line and in the browser binding.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Triangle => "triangle",
            Self::UnitCircle => "circle",
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiagramKind {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "triangle" => Ok(Self::Triangle),
            "circle" | "unit-circle" | "unit_circle" => Ok(Self::UnitCircle),
            other => Err(DiagramError::UnknownDiagram(other.to_owned())),
        }
    }
}

/// Semantic paint slot of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Translucent fill of the main shape.
    Shape,
    /// Outline of the main shape and the radius line.
    Outline,
    /// Angle arcs, the right-angle tick, and the θ symbol.
    Indicator,
    /// The unit circle itself.
    Circle,
    /// Coordinate axes.
    Axis,
    /// Reference triangle inside the unit circle.
    Guide,
    /// Side and vertex labels.
    Text,
    /// Secondary text (angle value, coordinates).
    Muted,
    /// The cos θ / sin θ leg labels.
    Highlight,
    /// Axis endpoint labels.
    AxisLabel,
}

/// A stroke: paint role plus width in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub role: Role,
    pub width: f64,
}

/// Horizontal alignment of a label relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Typeface family of a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFace {
    /// Proportional face for names and symbols.
    #[default]
    Sans,
    /// Monospace face for numbers and formulas.
    Mono,
}

/// A polyline or polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Point>,
    /// Closed polygons connect the last point back to the first.
    pub closed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,
}

/// A circular arc swept counterclockwise (on screen) from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    /// Start angle in radians.
    pub start: f64,
    /// End angle in radians. `end < start` sweeps clockwise.
    pub end: f64,
    pub stroke: Stroke,
}

impl Arc {
    /// Signed sweep in radians.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }

    /// The pixel point at `angle_rad` on this arc's circle.
    #[must_use]
    pub fn point_at(&self, angle_rad: f64) -> Point {
        Point::new(
            self.center.x + self.radius * angle_rad.cos(),
            self.center.y - self.radius * angle_rad.sin(),
        )
    }
}

/// A straight line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub stroke: Stroke,
}

/// A filled dot marking a point of interest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub center: Point,
    pub radius: f64,
    pub role: Role,
}

/// A text label anchored at a point (alphabetic baseline).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub anchor: Point,
    /// Rotation about the anchor in radians, counterclockwise on screen.
    pub rotation: f64,
    pub align: TextAlign,
    /// Font size in pixels.
    pub size: f64,
    pub bold: bool,
    pub face: FontFace,
    pub role: Role,
}

impl Label {
    #[must_use]
    pub fn rotated(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub fn aligned(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn mono(mut self) -> Self {
        self.face = FontFace::Mono;
        self
    }
}

/// One drawable element of a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    Polygon(Polygon),
    Arc(Arc),
    Segment(Segment),
    Marker(Marker),
    Label(Label),
}

/// The complete, immutable output of one projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub kind: DiagramKind,
    /// Angle the scene was projected for, in degrees.
    pub angle: f64,
    pub viewport: ViewportSize,
    /// Ratio of `viewport` to the diagram's desired size.
    pub scale: f64,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    /// All point markers, in paint order.
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Marker(m) => Some(m),
            _ => None,
        })
    }

    /// All arcs, in paint order.
    pub fn arcs(&self) -> impl Iterator<Item = &Arc> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Arc(a) => Some(a),
            _ => None,
        })
    }

    /// All labels, in paint order.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Label(l) => Some(l),
            _ => None,
        })
    }

    /// The first label whose text is exactly `text`.
    #[must_use]
    pub fn label(&self, text: &str) -> Option<&Label> {
        self.labels().find(|l| l.text == text)
    }

    /// The first point marker (the angle point on the unit circle).
    #[must_use]
    pub fn point_marker(&self) -> Option<&Marker> {
        self.markers().next()
    }

    /// Number of primitives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Returns `true` if the scene has no primitives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

/// Incremental scene assembly used by the projector.
pub(crate) struct SceneBuilder {
    scale: f64,
    primitives: Vec<Primitive>,
}

impl SceneBuilder {
    pub(crate) fn new(scale: f64) -> Self {
        Self { scale, primitives: Vec::new() }
    }

    /// A stroke whose width is given at desired size.
    pub(crate) fn stroke(&self, role: Role, width_px: f64) -> Stroke {
        Stroke { role, width: width_px * self.scale }
    }

    pub(crate) fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub(crate) fn polygon(&mut self, points: Vec<Point>, closed: bool, fill: Option<Role>, stroke: Option<Stroke>) {
        self.push(Primitive::Polygon(Polygon { points, closed, fill, stroke }));
    }

    pub(crate) fn segment(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.push(Primitive::Segment(Segment { from, to, stroke }));
    }

    pub(crate) fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64, stroke: Stroke) {
        self.push(Primitive::Arc(Arc { center, radius, start, end, stroke }));
    }

    pub(crate) fn marker(&mut self, center: Point, radius_px: f64, role: Role) {
        let radius = radius_px * self.scale;
        self.push(Primitive::Marker(Marker { center, radius, role }));
    }

    /// A label with font size given at desired size, centered and unrotated.
    pub(crate) fn text(&self, text: impl Into<String>, anchor: Point, size_px: f64, role: Role) -> Label {
        Label {
            text: text.into(),
            anchor,
            rotation: 0.0,
            align: TextAlign::Center,
            size: size_px * self.scale,
            bold: false,
            face: FontFace::Sans,
            role,
        }
    }

    pub(crate) fn label(&mut self, label: Label) {
        self.push(Primitive::Label(label));
    }

    pub(crate) fn finish(self, kind: DiagramKind, angle: f64, viewport: ViewportSize) -> Scene {
        Scene { kind, angle, viewport, scale: self.scale, primitives: self.primitives }
    }
}
