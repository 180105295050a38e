//! Error types for spline construction, integration, and grid persistence.

use num_traits::{Float, ToPrimitive};
use thiserror::Error;

/// Faults raised by the integration core.
///
/// These are computation-correctness faults, not transient failures;
/// they propagate to the caller instead of being clamped or defaulted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrationError {
    /// Knot sequence unusable for spline construction.
    #[error("cannot build spline: {reason}")]
    Construction { reason: &'static str },

    /// Evaluation point or integration bound outside the covered range.
    #[error("{x} is outside the covered range [{lower}, {upper}]")]
    Domain { x: f64, lower: f64, upper: f64 },

    /// Mismatched sample lengths, or uneven spacing where uniformity is required.
    #[error("bad sample shape: {reason}")]
    Shape { reason: &'static str },
}

impl IntegrationError {
    /// Domain violation with the offending point and bounds widened for display.
    pub(crate) fn domain<T: Float>(x: T, lower: T, upper: T) -> Self {
        let widen = |v: T| v.to_f64().unwrap_or(f64::NAN);
        Self::Domain {
            x: widen(x),
            lower: widen(lower),
            upper: widen(upper),
        }
    }
}

/// Faults raised while reading or writing grid files.
#[derive(Debug, Error)]
pub enum GridIoError {
    /// Wrapper around I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A record that does not parse as three comma-separated numbers.
    #[error("malformed record on line {line}")]
    Malformed { line: usize },

    /// A record stream that cannot be reshaped into a rectangular grid.
    #[error("cannot reconstruct grid: {reason}")]
    Layout { reason: &'static str },
}

/// Invalid synthetic-field parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// A generator parameter outside its accepted range.
    #[error("field parameter {name} out of range: {value}")]
    Parameter { name: &'static str, value: f64 },
}

pub type Result<T, E = IntegrationError> = std::result::Result<T, E>;
