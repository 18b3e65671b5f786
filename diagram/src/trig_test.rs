#![allow(clippy::float_cmp)]

use super::*;
use crate::angle::{round3, to_radians};

fn tan_value(result: &TrigResult) -> f64 {
    match result.tangent {
        Tangent::Value(v) => v,
        Tangent::Undefined => panic!("expected a finite tangent for {}", result.angle),
    }
}

// =============================================================
// Concrete scenarios
// =============================================================

#[test]
fn evaluate_zero() {
    let r = evaluate(0.0);
    assert_eq!(r.sine, 0.0);
    assert_eq!(r.cosine, 1.0);
    assert_eq!(r.tangent, Tangent::Value(0.0));
}

#[test]
fn evaluate_thirty() {
    let r = evaluate(30.0);
    assert_eq!(r.sine, 0.5);
    assert_eq!(r.cosine, 0.866);
    assert_eq!(r.tangent, Tangent::Value(0.577));
}

#[test]
fn evaluate_forty_five() {
    let r = evaluate(45.0);
    assert_eq!(r.sine, 0.707);
    assert_eq!(r.cosine, 0.707);
    assert_eq!(r.tangent, Tangent::Value(1.0));
}

#[test]
fn evaluate_sixty() {
    let r = evaluate(60.0);
    assert_eq!(r.sine, 0.866);
    assert_eq!(r.cosine, 0.5);
    assert_eq!(r.tangent, Tangent::Value(1.732));
}

#[test]
fn evaluate_ninety_is_undefined() {
    let r = evaluate(90.0);
    assert_eq!(r.sine, 1.0);
    assert_eq!(r.cosine, 0.0);
    assert_eq!(r.tangent, Tangent::Undefined);
}

#[test]
fn evaluate_keeps_input_angle() {
    assert_eq!(evaluate(123.4).angle, 123.4);
}

// =============================================================
// Special angles
// =============================================================

#[test]
fn odd_multiples_of_ninety_have_undefined_tangent() {
    for deg in [90.0, 270.0, 450.0, 630.0, -90.0, -270.0] {
        assert!(evaluate(deg).tangent.is_undefined(), "{deg}");
    }
}

#[test]
fn even_multiples_of_ninety_have_finite_tangent() {
    for deg in [0.0, 180.0, 360.0, 540.0, -180.0, -360.0] {
        let r = evaluate(deg);
        assert_eq!(tan_value(&r), round3(to_radians(deg).tan()), "{deg}");
        assert_eq!(tan_value(&r), 0.0, "{deg}");
    }
}

#[test]
fn special_angles_have_exact_unit_components() {
    let r = evaluate(180.0);
    assert_eq!(r.sine, 0.0);
    assert_eq!(r.cosine, -1.0);

    let r = evaluate(270.0);
    assert_eq!(r.sine, -1.0);
    assert_eq!(r.cosine, 0.0);
    assert!(r.cosine.is_sign_positive());
}

#[test]
fn near_ninety_is_a_large_number_not_undefined() {
    let r = evaluate(89.999);
    assert!(tan_value(&r) > 10_000.0);
}

// =============================================================
// Properties
// =============================================================

#[test]
fn sine_and_cosine_match_rounded_std() {
    let mut deg = -720.0;
    while deg <= 720.0 {
        let r = evaluate(deg);
        let rad = to_radians(deg);
        assert_eq!(r.sine, round3(rad.sin()), "sin {deg}");
        assert_eq!(r.cosine, round3(rad.cos()), "cos {deg}");
        deg += 7.5;
    }
}

#[test]
fn non_special_tangent_matches_rounded_std() {
    for deg in [1.0, 15.0, 30.0, 44.5, 120.0, 135.0, 200.0, 315.0, -30.0] {
        assert_eq!(tan_value(&evaluate(deg)), round3(to_radians(deg).tan()), "{deg}");
    }
}

#[test]
fn non_finite_input_does_not_panic() {
    let r = evaluate(f64::NAN);
    assert!(r.sine.is_nan());
    assert!(r.cosine.is_nan());
    assert!(matches!(r.tangent, Tangent::Value(v) if v.is_nan()));

    let r = evaluate(f64::INFINITY);
    assert!(r.sine.is_nan());
}

// =============================================================
// Evaluator precision
// =============================================================

#[test]
fn evaluator_custom_precision() {
    let ev = Evaluator::new(5).unwrap();
    let r = ev.evaluate(30.0);
    assert_eq!(r.cosine, 0.86603);
    assert_eq!(r.tangent, Tangent::Value(0.57735));
}

#[test]
fn evaluator_zero_decimals() {
    let r = Evaluator::new(0).unwrap().evaluate(60.0);
    assert_eq!(r.sine, 1.0);
    assert_eq!(r.cosine, 1.0);
    assert_eq!(r.tangent, Tangent::Value(2.0));
}

#[test]
fn evaluator_rejects_excess_precision() {
    assert_eq!(Evaluator::new(16), Err(DiagramError::InvalidDecimals(16)));
    assert!(Evaluator::new(MAX_DECIMALS).is_ok());
}

#[test]
fn evaluator_default_is_three_decimals() {
    assert_eq!(Evaluator::default().decimals(), 3);
}

// =============================================================
// Display and serde
// =============================================================

#[test]
fn tangent_display() {
    assert_eq!(Tangent::Value(0.577).to_string(), "0.577");
    assert_eq!(Tangent::Undefined.to_string(), "∞");
}

#[test]
fn result_display() {
    assert_eq!(evaluate(90.0).to_string(), "sin=1 cos=0 tan=∞");
    assert_eq!(evaluate(30.0).to_string(), "sin=0.5 cos=0.866 tan=0.577");
}

#[test]
fn result_coordinates() {
    assert_eq!(evaluate(30.0).coordinates(), "(0.866, 0.5)");
    assert_eq!(evaluate(0.0).coordinates(), "(1, 0)");
}

#[test]
fn tangent_value_accessor() {
    assert_eq!(Tangent::Value(1.0).value(), Some(1.0));
    assert_eq!(Tangent::Undefined.value(), None);
}

#[test]
fn result_serializes_undefined_as_marker() {
    let json = serde_json::to_value(evaluate(90.0)).unwrap();
    assert_eq!(json["tangent"], "∞");
    assert_eq!(json["sine"], 1.0);
}

#[test]
fn result_serde_roundtrip() {
    for deg in [30.0, 270.0] {
        let r = evaluate(deg);
        let json = serde_json::to_string(&r).unwrap();
        let back: TrigResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}

#[test]
fn tangent_rejects_unknown_marker() {
    let err = serde_json::from_str::<Tangent>("\"undefined\"");
    assert!(err.is_err());
}
