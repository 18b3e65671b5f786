//! Errors for the fallible edges of the crate: parsing host input and
//! validating configuration. The math and projection core never fails.

/// Error returned when host-supplied input cannot be turned into core values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DiagramError {
    /// The fragment does not name one of the known pages.
    #[error("unknown page: '{0}'")]
    UnknownPage(String),
    /// The name does not match a diagram kind.
    #[error("unknown diagram kind: '{0}' (expected 'triangle' or 'circle')")]
    UnknownDiagram(String),
    /// The calculator input is empty, not a number, or not finite.
    #[error("invalid angle: '{0}'")]
    InvalidAngle(String),
    /// Rounding precision is beyond what an `f64` can represent exactly.
    #[error("invalid precision: {0} decimals (maximum is {max})", max = crate::consts::MAX_DECIMALS)]
    InvalidDecimals(u32),
}
