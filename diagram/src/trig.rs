//! Trigonometric evaluation for the calculator display.
//!
//! [`evaluate`] returns sine, cosine, and tangent rounded for display. Odd
//! multiples of 90° get an explicit [`Tangent::Undefined`] instead of the huge
//! finite value `f64::tan` produces near ±π/2.

#[cfg(test)]
#[path = "trig_test.rs"]
mod trig_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::angle::{self, is_odd_right_multiple, is_special};
use crate::consts::{DEFAULT_DECIMALS, MAX_DECIMALS};
use crate::error::DiagramError;

/// Text shown for an undefined tangent.
pub const UNDEFINED_MARKER: &str = "∞";

/// Tangent of an angle: a rounded number, or undefined at odd multiples of 90°.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tangent {
    Value(f64),
    Undefined,
}

impl Tangent {
    /// The numeric value, or `None` when undefined.
    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Undefined => None,
        }
    }

    #[must_use]
    pub fn is_undefined(self) -> bool {
        matches!(self, Self::Undefined)
    }
}

impl fmt::Display for Tangent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::Undefined => f.write_str(UNDEFINED_MARKER),
        }
    }
}

// Serialized as a bare number, or the marker string when undefined.
impl Serialize for Tangent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => serializer.serialize_f64(*v),
            Self::Undefined => serializer.serialize_str(UNDEFINED_MARKER),
        }
    }
}

impl<'de> Deserialize<'de> for Tangent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Marker(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(v) => Ok(Self::Value(v)),
            Raw::Marker(s) if s == UNDEFINED_MARKER => Ok(Self::Undefined),
            Raw::Marker(s) => Err(serde::de::Error::custom(format!("invalid tangent: '{s}'"))),
        }
    }
}

/// Rounded sine, cosine, and tangent of one angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrigResult {
    /// The angle these values were computed for, in degrees (unrounded).
    pub angle: f64,
    pub sine: f64,
    pub cosine: f64,
    pub tangent: Tangent,
}

impl TrigResult {
    /// The point on the unit circle as `(cos, sin)`, e.g. `"(0.866, 0.5)"`.
    #[must_use]
    pub fn coordinates(&self) -> String {
        format!("({}, {})", self.cosine, self.sine)
    }
}

impl fmt::Display for TrigResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sin={} cos={} tan={}", self.sine, self.cosine, self.tangent)
    }
}

/// Evaluator with a configurable display precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    decimals: u32,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self { decimals: DEFAULT_DECIMALS }
    }
}

impl Evaluator {
    /// Build an evaluator rounding to `decimals` places.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::InvalidDecimals`] above [`MAX_DECIMALS`].
    pub fn new(decimals: u32) -> Result<Self, DiagramError> {
        if decimals > MAX_DECIMALS {
            return Err(DiagramError::InvalidDecimals(decimals));
        }
        Ok(Self { decimals })
    }

    #[must_use]
    pub fn decimals(self) -> u32 {
        self.decimals
    }

    /// Round a value at this evaluator's precision.
    #[must_use]
    pub fn round(self, value: f64) -> f64 {
        angle::round(value, self.decimals)
    }

    /// Compute rounded sine, cosine, and tangent of `angle_deg` degrees.
    ///
    /// Any input is accepted. Non-finite angles produce non-finite components.
    #[must_use]
    pub fn evaluate(self, angle_deg: f64) -> TrigResult {
        let rad = angle::to_radians(angle_deg);
        let sine = self.round(rad.sin());
        let cosine = self.round(rad.cos());

        let tangent = if is_special(angle_deg) && is_odd_right_multiple(angle_deg) {
            Tangent::Undefined
        } else {
            Tangent::Value(self.round(rad.tan()))
        };

        TrigResult { angle: angle_deg, sine, cosine, tangent }
    }
}

/// [`Evaluator::evaluate`] at the default precision of three decimals.
#[must_use]
pub fn evaluate(angle_deg: f64) -> TrigResult {
    Evaluator::default().evaluate(angle_deg)
}
