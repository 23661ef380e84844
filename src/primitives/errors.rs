//! Shared error types for resampling operations.
//!
//! ## Purpose
//!
//! This module defines the unified [`ResampleError`] enum returned by every
//! fallible operation in the crate, together with the crate-wide [`Result`]
//! alias. Each variant carries the offending values so callers can report
//! precisely what was wrong without re-deriving context.
//!
//! ## Design notes
//!
//! * All errors are deterministic caller-input problems; none are retried.
//! * Detection is fail-fast: the first violation found is the one returned.
//! * Numeric payloads are stored as `f64` regardless of the working float
//!   type, converted at the detection site.
//!
//! ## Visibility
//!
//! [`ResampleError`] is part of the public API and is re-exported from the
//! crate prelude.

use thiserror::Error;

/// Result type alias for resampling operations.
pub type Result<T> = core::result::Result<T, ResampleError>;

/// Unified error type for resampling operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResampleError {
    /// Input arrays contain no points.
    #[error("input arrays must not be empty")]
    EmptyInput,

    /// The x and y arrays have different lengths.
    #[error("the x and y vectors don't have the same size: x has {x_len} points, y has {y_len}")]
    MismatchedInputs {
        /// Length of the x array.
        x_len: usize,
        /// Length of the y array.
        y_len: usize,
    },

    /// Too few data points for the requested operation.
    #[error("at least {min} data points are required, got {got}")]
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum number required.
        min: usize,
    },

    /// A numeric option is NaN or infinite.
    #[error("'{option}' option must be a finite number, got {value}")]
    InvalidOption {
        /// Name of the offending option.
        option: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The requested number of output points is below one.
    #[error("the number of points must be at least 1, got {got}")]
    InvalidNumberOfPoints {
        /// The rejected count.
        got: usize,
    },

    /// `from` and `to` coincide, leaving nothing to resample over.
    #[error("the resampling range is empty: 'from' and 'to' are both {value}")]
    EmptyRange {
        /// The shared bound value.
        value: f64,
    },

    /// An exclusion has inverted or non-finite bounds.
    #[error("invalid exclusion [{from}, {to}]: bounds must be finite with from < to")]
    InvalidExclusion {
        /// Lower bound of the exclusion.
        from: f64,
        /// Upper bound of the exclusion.
        to: f64,
    },

    /// Two exclusions overlap after clamping to the range.
    #[error("exclusion [{from}, {to}] overlaps the previous exclusion")]
    OverlappingExclusions {
        /// Lower bound of the offending exclusion.
        from: f64,
        /// Upper bound of the offending exclusion.
        to: f64,
    },

    /// The exclusions leave no included length in the range.
    #[error("the exclusions cover the entire resampling range")]
    ExclusionsCoverRange,

    /// The input x values are not strictly increasing (slot variant).
    #[error("x must be an increasing series (violated at index {index})")]
    NonMonotonicX {
        /// Index of the first sample that breaks the ordering.
        index: usize,
    },

    /// A builder parameter was configured more than once.
    #[error("parameter '{parameter}' was set multiple times")]
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },

    /// Input data could not be viewed as a contiguous slice.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
