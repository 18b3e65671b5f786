//! Diagram configuration: desired canvas sizes, display precision, and the
//! triangle slider range. Hosts start from [`DiagramConfig::default`] and
//! override what they need.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_DECIMALS, SLIDER_MAX_DEG, SLIDER_MIN_DEG, TRIANGLE_DESIRED_HEIGHT, TRIANGLE_DESIRED_WIDTH,
    UNIT_CIRCLE_DESIRED_SIZE,
};
use crate::error::DiagramError;
use crate::scene::DiagramKind;
use crate::trig::Evaluator;
use crate::viewport::ViewportSize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramConfig {
    /// Decimal places for displayed values.
    pub decimals: u32,
    /// Size the triangle diagram is designed at; also its largest canvas.
    pub triangle_size: ViewportSize,
    /// Size the unit-circle diagram is designed at; also its largest canvas.
    pub circle_size: ViewportSize,
    /// Inclusive range of the triangle slider, in degrees.
    pub slider_range: (f64, f64),
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            triangle_size: ViewportSize::new(TRIANGLE_DESIRED_WIDTH, TRIANGLE_DESIRED_HEIGHT),
            circle_size: ViewportSize::square(UNIT_CIRCLE_DESIRED_SIZE),
            slider_range: (SLIDER_MIN_DEG, SLIDER_MAX_DEG),
        }
    }
}

impl DiagramConfig {
    /// Replace the display precision.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::InvalidDecimals`] for more than 15 places.
    pub fn with_decimals(self, decimals: u32) -> Result<Self, DiagramError> {
        Evaluator::new(decimals)?;
        Ok(Self { decimals, ..self })
    }

    /// Evaluator at this config's precision.
    #[must_use]
    pub fn evaluator(&self) -> Evaluator {
        // `decimals` is validated by `with_decimals`; a hand-built config with
        // an out-of-range value falls back to the default precision.
        Evaluator::new(self.decimals).unwrap_or_default()
    }

    /// The size `kind` is designed at.
    #[must_use]
    pub fn desired(&self, kind: DiagramKind) -> ViewportSize {
        match kind {
            DiagramKind::Triangle => self.triangle_size,
            DiagramKind::UnitCircle => self.circle_size,
        }
    }

    /// Canvas size for `kind` inside a container `available_width` pixels
    /// wide: never wider than the desired size, aspect ratio preserved.
    #[must_use]
    pub fn fit(&self, kind: DiagramKind, available_width: f64) -> ViewportSize {
        let desired = self.desired(kind);
        let available = if available_width.is_finite() { available_width.max(0.0) } else { 0.0 };
        let width = available.min(desired.width);
        let aspect = desired.width / desired.height;
        if aspect.is_finite() && aspect > 0.0 {
            ViewportSize::new(width, width / aspect)
        } else {
            ViewportSize::new(width, 0.0)
        }
    }

    /// Clamp an angle into the slider range.
    #[must_use]
    pub fn clamp_slider(&self, angle: f64) -> f64 {
        let (lo, hi) = self.slider_range;
        angle.max(lo).min(hi)
    }
}
