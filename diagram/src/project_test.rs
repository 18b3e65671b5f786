#![allow(clippy::float_cmp)]

use std::f64::consts::{FRAC_PI_2, TAU};

use super::*;
use crate::scene::Primitive;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON * a.abs().max(b.abs()).max(1.0)
}

fn assert_point(actual: Point, expected: Point) {
    assert!(
        approx_eq(actual.x, expected.x) && approx_eq(actual.y, expected.y),
        "expected {expected:?}, got {actual:?}"
    );
}

fn triangle_view() -> ViewportSize {
    ViewportSize::new(400.0, 300.0)
}

fn circle_view() -> ViewportSize {
    ViewportSize::square(350.0)
}

// =============================================================
// Unit circle
// =============================================================

#[test]
fn unit_circle_zero_marker_on_positive_x_axis() {
    let scene = project_unit_circle(0.0, circle_view());
    let geo = UnitCircleGeometry::new(0.0, circle_view(), &DiagramConfig::default());
    let marker = scene.point_marker().unwrap();
    assert_point(marker.center, Point::new(geo.center.x + geo.radius, geo.center.y));
}

#[test]
fn unit_circle_geometry_at_desired_size() {
    let geo = UnitCircleGeometry::new(0.0, circle_view(), &DiagramConfig::default());
    assert_eq!(geo.scale, 1.0);
    assert_eq!(geo.center, Point::new(175.0, 175.0));
    assert_eq!(geo.radius, 155.0);
}

#[test]
fn unit_circle_marker_follows_cos_and_flipped_sin() {
    for angle in [0.0, 30.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 300.0, 360.0, -45.0, 725.0] {
        let scene = project_unit_circle(angle, circle_view());
        let geo = UnitCircleGeometry::new(angle, circle_view(), &DiagramConfig::default());
        let rad = to_radians(angle);
        let expected = Point::new(geo.center.x + geo.radius * rad.cos(), geo.center.y - geo.radius * rad.sin());
        assert_point(scene.point_marker().unwrap().center, expected);
    }
}

#[test]
fn unit_circle_ninety_is_straight_up() {
    let scene = project_unit_circle(90.0, circle_view());
    let marker = scene.point_marker().unwrap();
    assert_point(marker.center, Point::new(175.0, 20.0));
}

#[test]
fn unit_circle_draws_full_circle_then_sweep() {
    let scene = project_unit_circle(120.0, circle_view());
    let arcs: Vec<_> = scene.arcs().collect();
    assert_eq!(arcs.len(), 2);
    assert_eq!(arcs[0].start, 0.0);
    assert_eq!(arcs[0].end, TAU);
    assert_eq!(arcs[0].radius, 155.0);
    assert!(approx_eq(arcs[1].end, to_radians(120.0)));
    assert!(approx_eq(arcs[1].radius, 155.0 * 0.3));
}

#[test]
fn unit_circle_primitive_order() {
    let scene = project_unit_circle(45.0, circle_view());
    let p = &scene.primitives;
    assert!(matches!(p[0], Primitive::Arc(_)));
    assert!(matches!(p[1], Primitive::Segment(_)));
    assert!(matches!(p[2], Primitive::Segment(_)));
    assert!(matches!(p[3], Primitive::Segment(_)));
    assert!(matches!(p[4], Primitive::Arc(_)));
    assert!(matches!(p[5], Primitive::Polygon(_)));
    assert!(matches!(p[6], Primitive::Marker(_)));
    assert!(p[7..].iter().all(|prim| matches!(prim, Primitive::Label(_))));
}

#[test]
fn unit_circle_reference_triangle_drops_to_axis() {
    let scene = project_unit_circle(60.0, circle_view());
    let Some(Primitive::Polygon(tri)) = scene.primitives.iter().find(|p| matches!(p, Primitive::Polygon(_))) else {
        panic!("missing reference triangle");
    };
    assert!(tri.closed);
    assert_eq!(tri.fill, Some(Role::Guide));
    let [point, foot, center] = tri.points.as_slice() else { panic!("expected three points") };
    assert_eq!(foot.x, point.x);
    assert_eq!(foot.y, center.y);
    assert_eq!(*center, Point::new(175.0, 175.0));
}

#[test]
fn unit_circle_labels() {
    let scene = project_unit_circle(30.0, circle_view());
    assert!(scene.label("cos θ").is_some());
    assert!(scene.label("sin θ").is_some());
    assert!(scene.label("(0.866, 0.5)").is_some());
    assert!(scene.label("30°").is_some());
    assert!(scene.label("0").is_some());
    assert_eq!(scene.labels().filter(|l| l.text == "1" || l.text == "-1").count(), 4);
}

#[test]
fn unit_circle_coordinates_follow_configured_precision() {
    let cfg = DiagramConfig::default().with_decimals(1).unwrap();
    let scene = project(DiagramKind::UnitCircle, 30.0, circle_view(), &cfg);
    assert!(scene.label("(0.9, 0.5)").is_some());
}

#[test]
fn unit_circle_scales_with_viewport() {
    let small = UnitCircleGeometry::new(0.0, ViewportSize::square(175.0), &DiagramConfig::default());
    assert_eq!(small.scale, 0.5);
    assert_eq!(small.radius, 87.5 - 10.0);

    let scene = project_unit_circle(0.0, ViewportSize::square(175.0));
    assert_eq!(scene.point_marker().unwrap().radius, 2.5);
}

// =============================================================
// Right triangle
// =============================================================

#[test]
fn triangle_geometry_at_desired_size() {
    let geo = TriangleGeometry::new(30.0, triangle_view(), &DiagramConfig::default());
    assert_eq!(geo.scale, 1.0);
    assert_eq!(geo.padding, 40.0);
    assert!(approx_eq(geo.extent, 220.0 * 0.85));
    assert_eq!(geo.right_angle.y, 260.0);
    assert!(approx_eq(geo.opposite(), geo.extent * 0.5));
    assert!(approx_eq(geo.adjacent(), geo.extent * to_radians(30.0).cos()));
}

#[test]
fn triangle_sides_satisfy_pythagoras() {
    for angle in [10.0, 30.0, 45.0, 60.0, 89.0] {
        let geo = TriangleGeometry::new(angle, triangle_view(), &DiagramConfig::default());
        assert!(approx_eq(geo.apex.distance(geo.base_corner), geo.extent));
        assert_eq!(geo.apex.x, geo.right_angle.x);
        assert_eq!(geo.base_corner.y, geo.right_angle.y);
    }
}

#[test]
fn triangle_stays_inside_viewport() {
    let view = triangle_view();
    for angle in [1.0, 45.0, 89.0] {
        let geo = TriangleGeometry::new(angle, view, &DiagramConfig::default());
        for p in [geo.apex, geo.right_angle, geo.base_corner] {
            assert!(p.x >= 0.0 && p.x <= view.width, "{p:?} outside at {angle}");
            assert!(p.y >= 0.0 && p.y <= view.height, "{p:?} outside at {angle}");
        }
    }
}

#[test]
fn triangle_arc_centered_at_right_angle() {
    let geo = TriangleGeometry::new(40.0, triangle_view(), &DiagramConfig::default());
    let scene = project_triangle(40.0, triangle_view());
    let arc = scene.arcs().next().unwrap();
    assert_eq!(arc.center, geo.right_angle);
    assert_eq!(arc.radius, 30.0);
    assert_eq!(arc.start, 0.0);
    assert!(approx_eq(arc.end, to_radians(40.0)));
}

#[test]
fn triangle_labels_present() {
    let scene = project_triangle(30.0, triangle_view());
    for text in ["opposite", "adjacent", "hypotenuse", "θ", "A", "B", "C", "θ = 30°"] {
        assert!(scene.label(text).is_some(), "missing label {text}");
    }
    assert_eq!(scene.label("opposite").unwrap().rotation, FRAC_PI_2);
    assert_eq!(scene.label("θ = 30°").unwrap().align, TextAlign::Right);
}

#[test]
fn hypotenuse_label_follows_slope() {
    let scene = project_triangle(30.0, triangle_view());
    let label = scene.label("hypotenuse").unwrap();
    assert!(approx_eq(label.rotation, -to_radians(30.0)));
}

#[test]
fn triangle_primitive_order() {
    let scene = project_triangle(50.0, triangle_view());
    let p = &scene.primitives;
    let Primitive::Polygon(fill) = &p[0] else { panic!("expected fill") };
    assert_eq!(fill.fill, Some(Role::Shape));
    let Primitive::Polygon(outline) = &p[1] else { panic!("expected outline") };
    assert!(outline.stroke.is_some() && outline.fill.is_none());
    let Primitive::Polygon(tick) = &p[2] else { panic!("expected tick") };
    assert!(!tick.closed);
    assert!(matches!(p[3], Primitive::Arc(_)));
    assert!(p[4..].iter().all(|prim| matches!(prim, Primitive::Label(_))));
}

#[test]
fn triangle_is_scale_invariant() {
    let small = project_triangle(35.0, triangle_view());
    let large = project_triangle(35.0, triangle_view().scaled(2.0));
    assert_eq!(large.scale, 2.0 * small.scale);
    assert_eq!(small.len(), large.len());

    let twice = |a: f64, b: f64| assert!(approx_eq(b, 2.0 * a), "{b} != 2 * {a}");
    let twice_point = |a: Point, b: Point| {
        twice(a.x, b.x);
        twice(a.y, b.y);
    };

    for (s, l) in small.primitives.iter().zip(&large.primitives) {
        match (s, l) {
            (Primitive::Polygon(s), Primitive::Polygon(l)) => {
                s.points.iter().zip(&l.points).for_each(|(a, b)| twice_point(*a, *b));
                if let (Some(a), Some(b)) = (s.stroke, l.stroke) {
                    twice(a.width, b.width);
                }
            }
            (Primitive::Arc(s), Primitive::Arc(l)) => {
                twice_point(s.center, l.center);
                twice(s.radius, l.radius);
                twice(s.stroke.width, l.stroke.width);
                assert!(approx_eq(s.start, l.start) && approx_eq(s.end, l.end));
            }
            (Primitive::Label(s), Primitive::Label(l)) => {
                assert_eq!(s.text, l.text);
                twice_point(s.anchor, l.anchor);
                twice(s.size, l.size);
                assert!(approx_eq(s.rotation, l.rotation));
            }
            (s, l) => panic!("primitive mismatch: {s:?} vs {l:?}"),
        }
    }
}

#[test]
fn triangle_uses_tighter_axis_for_scale() {
    let geo = TriangleGeometry::new(30.0, ViewportSize::new(800.0, 300.0), &DiagramConfig::default());
    assert_eq!(geo.scale, 1.0);
}

#[test]
fn triangle_degenerate_angles_do_not_panic() {
    for angle in [0.0, 90.0, 120.0, -30.0] {
        let scene = project_triangle(angle, triangle_view());
        assert!(!scene.is_empty());
    }
    let flat = TriangleGeometry::new(0.0, triangle_view(), &DiagramConfig::default());
    assert_eq!(flat.opposite(), 0.0);
    let scene = project_triangle(0.0, triangle_view());
    assert!(scene.label("hypotenuse").unwrap().anchor.x.is_finite());
}

#[test]
fn zero_viewport_projects_without_panicking() {
    let scene = project(DiagramKind::Triangle, 30.0, ViewportSize::square(0.0), &DiagramConfig::default());
    assert_eq!(scene.scale, 0.0);
    let scene = project(DiagramKind::UnitCircle, 30.0, ViewportSize::square(0.0), &DiagramConfig::default());
    assert_eq!(scene.kind, DiagramKind::UnitCircle);
}

#[test]
fn project_dispatches_on_kind() {
    let cfg = DiagramConfig::default();
    assert_eq!(project(DiagramKind::Triangle, 30.0, triangle_view(), &cfg).kind, DiagramKind::Triangle);
    let scene = project(DiagramKind::UnitCircle, 30.0, circle_view(), &cfg);
    assert_eq!(scene.kind, DiagramKind::UnitCircle);
    assert_eq!(scene.angle, 30.0);
    assert_eq!(scene.viewport, circle_view());
}

#[test]
fn unit_circle_frame_maps_math_coordinates() {
    let geo = UnitCircleGeometry::new(30.0, circle_view(), &DiagramConfig::default());
    let frame = geo.frame();
    assert_point(frame.to_screen(0.0, -1.0), Point::new(175.0, 330.0));
    let (x, y) = frame.to_math(geo.point);
    assert!(approx_eq(x, to_radians(30.0).cos()));
    assert!(approx_eq(y, 0.5));
}
