//! Angle helpers: unit conversion, special-angle classification, rounding.
//!
//! Angles are plain `f64` degrees everywhere in the crate. Radians appear only
//! at the boundary with `f64::sin` and friends, and in scene primitives.

#[cfg(test)]
#[path = "angle_test.rs"]
mod angle_test;

use crate::consts::DEFAULT_DECIMALS;

/// Convert degrees to radians.
#[must_use]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}

/// Convert radians to degrees.
#[must_use]
pub fn to_degrees(radians: f64) -> f64 {
    radians * (180.0 / std::f64::consts::PI)
}

/// Round `value` to `decimals` places, ties away from zero.
///
/// Non-finite values are returned unchanged. A result of negative zero is
/// normalized to `0.0`.
#[must_use]
pub fn round(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let multiplier = 10_f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let rounded = (value * multiplier).round() / multiplier;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// [`round`] with the default display precision.
#[must_use]
pub fn round3(value: f64) -> f64 {
    round(value, DEFAULT_DECIMALS)
}

/// Whether `degrees` is an exact multiple of 90°.
#[must_use]
pub fn is_special(degrees: f64) -> bool {
    degrees % 90.0 == 0.0
}

/// Whether `degrees` is an odd multiple of 90° (90°, 270°, −90°, …), where
/// the tangent is undefined.
#[must_use]
pub fn is_odd_right_multiple(degrees: f64) -> bool {
    degrees.rem_euclid(180.0) == 90.0
}

/// Format an angle for a label: `30`, `22.5`, `-45`.
#[must_use]
pub fn format_degrees(degrees: f64) -> String {
    // Display on f64 already prints the shortest round-tripping form.
    let degrees = if degrees == 0.0 { 0.0 } else { degrees };
    format!("{degrees}")
}
