//! Error types for range configuration and context lookup.
//!
//! User input never produces an error: out-of-range requests are clamped and
//! non-numeric ones are ignored. The errors here describe integration
//! mistakes, which should surface as early as possible.

use derive_builder::UninitializedFieldError;
use thiserror::Error;

/// Invalid range configuration, reported when a slider is constructed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RangeError {
    /// One of the continuous bounds is `NaN` or infinite.
    #[error("range bounds must be finite (lo = {lo}, hi = {hi})")]
    NonFiniteBounds {
        /// Requested lower bound.
        lo: f64,
        /// Requested upper bound.
        hi: f64,
    },
    /// The lower bound is above the upper bound.
    #[error("range lower bound {lo} exceeds upper bound {hi}")]
    InvertedBounds {
        /// Requested lower bound.
        lo: f64,
        /// Requested upper bound.
        hi: f64,
    },
    /// The step is zero, negative or not finite.
    #[error("step must be a positive finite number, got {0}")]
    InvalidStep(f64),
    /// A fixed range was configured without values.
    #[error("fixed range requires at least one value")]
    EmptyValues,
    /// A fixed range value is `NaN` or infinite.
    #[error("fixed range value at index {index} is not finite")]
    NonFiniteValue {
        /// Position of the offending value.
        index: usize,
    },
    /// A required builder field was never set.
    #[error("`{0}` must be set before building range args")]
    MissingField(&'static str),
}

impl From<UninitializedFieldError> for RangeError {
    fn from(err: UninitializedFieldError) -> Self {
        Self::MissingField(err.field_name())
    }
}

/// A dependent control looked for a range slider that was never provided.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    /// No slider of the requested mode is visible from the current scope.
    #[error("no {mode} range slider provided in the current scope")]
    Missing {
        /// Mode name of the requested slider.
        mode: &'static str,
    },
}

/// A key identifier that has no slider binding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized key identifier `{0}`")]
pub struct UnknownKey(pub String);
