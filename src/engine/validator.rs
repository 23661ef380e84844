//! Input validation for resampling configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions used by the builder and the
//! engine. All inputs are vetted before any computation begins, and errors
//! name the specific option or value that was rejected.
//!
//! ## Design notes
//!
//! * Validation is fail-fast: returns on the first error encountered.
//! * Checks are ordered from cheap to expensive.
//! * The per-element finite scan uses one combined loop over x and y for
//!   cache locality.
//! * Validation is generic over `Float` types to support f32 and f64.
//!
//! ## Validated parameters
//!
//! * **Input data**: Non-empty, matching lengths, at least 2 points, all
//!   finite
//! * **Bounds**: `from`/`to` finite, range non-empty after the swap
//! * **Number of points**: at least 1 for the top-level request (per-zone
//!   counts are allocator output and are never re-validated)
//!
//! ## Non-goals
//!
//! * This module does not sort, reverse, or transform input data.
//! * This module does not correct invalid inputs.
//!
//! ## Visibility
//!
//! Internal implementation detail of the engine and builder.

use num_traits::Float;

use crate::primitives::errors::{ResampleError, Result};

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for resampling configuration and input data.
///
/// Provides static methods returning `Result<(), ResampleError>`; each fails
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate input arrays for resampling.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<()> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(ResampleError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = x.len();
        if n != y.len() {
            return Err(ResampleError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        // Check 3: Enough points to interpolate between
        if n < 2 {
            return Err(ResampleError::TooFewPoints { got: n, min: 2 });
        }

        // Check 4: All values finite (combined loop for cache locality)
        for i in 0..n {
            if !x[i].is_finite() {
                return Err(ResampleError::InvalidOption {
                    option: "x",
                    value: x[i].to_f64().unwrap_or(f64::NAN),
                });
            }
            if !y[i].is_finite() {
                return Err(ResampleError::InvalidOption {
                    option: "y",
                    value: y[i].to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        Ok(())
    }

    // ========================================================================
    // Option Validation
    // ========================================================================

    /// Validate a named scalar option (`from`, `to`, `target`).
    pub fn validate_bound<T: Float>(option: &'static str, value: T) -> Result<()> {
        if !value.is_finite() {
            return Err(ResampleError::InvalidOption {
                option,
                value: value.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate the requested output size.
    pub fn validate_number_of_points(number_of_points: usize) -> Result<()> {
        if number_of_points < 1 {
            return Err(ResampleError::InvalidNumberOfPoints {
                got: number_of_points,
            });
        }
        Ok(())
    }

    /// Validate that the resampling range has extent after normalization.
    pub fn validate_range<T: Float>(from: T, to: T) -> Result<()> {
        if from == to {
            return Err(ResampleError::EmptyRange {
                value: from.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate that no builder parameter was set multiple times.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<()> {
        if let Some(parameter) = duplicate_param {
            return Err(ResampleError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_inputs() {
        assert!(Validator::validate_inputs(&[1.0, 2.0], &[3.0, 4.0]).is_ok());
    }

    #[test]
    fn rejects_empty_and_mismatched() {
        assert_eq!(
            Validator::validate_inputs::<f64>(&[], &[]).unwrap_err(),
            ResampleError::EmptyInput
        );
        assert_eq!(
            Validator::validate_inputs(&[1.0, 2.0], &[1.0]).unwrap_err(),
            ResampleError::MismatchedInputs { x_len: 2, y_len: 1 }
        );
        assert_eq!(
            Validator::validate_inputs(&[1.0], &[1.0]).unwrap_err(),
            ResampleError::TooFewPoints { got: 1, min: 2 }
        );
    }

    #[test]
    fn rejects_non_finite_samples() {
        assert!(matches!(
            Validator::validate_inputs(&[1.0, f64::INFINITY], &[1.0, 2.0]).unwrap_err(),
            ResampleError::InvalidOption { option: "x", .. }
        ));
        assert!(matches!(
            Validator::validate_inputs(&[1.0, 2.0], &[f64::NAN, 2.0]).unwrap_err(),
            ResampleError::InvalidOption { option: "y", .. }
        ));
    }

    #[test]
    fn rejects_bad_options() {
        assert!(matches!(
            Validator::validate_bound("from", f64::NAN).unwrap_err(),
            ResampleError::InvalidOption { option: "from", .. }
        ));
        assert_eq!(
            Validator::validate_number_of_points(0).unwrap_err(),
            ResampleError::InvalidNumberOfPoints { got: 0 }
        );
        assert_eq!(
            Validator::validate_range(2.0, 2.0).unwrap_err(),
            ResampleError::EmptyRange { value: 2.0 }
        );
        assert_eq!(
            Validator::validate_no_duplicates(Some("variant")).unwrap_err(),
            ResampleError::DuplicateParameter { parameter: "variant" }
        );
    }
}
