//! Nearest-abscissa lookup.
//!
//! ## Purpose
//!
//! This module finds the sample pair whose x-coordinate is closest to a
//! target value, for series sorted in either direction. It backs cursor
//! snapping and peak-picking workflows where a display coordinate must be
//! mapped back onto the sampled curve.
//!
//! ## Design notes
//!
//! * Binary search narrows to an adjacent index pair, then the closer of the
//!   two candidates wins; exact ties resolve toward the lower index.
//! * Targets beyond either end of the series clamp to the nearest endpoint.
//!   Clamping is defined behavior, not an error.
//! * Descending series reuse the same narrowing loop with the comparison
//!   negated, so results are direction-agnostic.
//!
//! ## Invariants
//!
//! * The input series is sorted in the direction stated by the caller.
//! * The returned pair is always one of the input pairs.
//!
//! ## Visibility
//!
//! [`nearest_point`] and [`Point`] are part of the public API.

use num_traits::Float;

use crate::primitives::errors::{ResampleError, Result};
use crate::primitives::sorting::SortOrder;

// ============================================================================
// Data Structures
// ============================================================================

/// One sample of a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T> {
    /// Abscissa of the sample.
    pub x: T,

    /// Ordinate of the sample.
    pub y: T,
}

// ============================================================================
// Lookup
// ============================================================================

/// Return the sample whose x is closest to `target`.
///
/// `order` states the direction the supplied series is sorted in; pass
/// [`SortOrder::Descending`] for curves acquired high-to-low.
pub fn nearest_point<T: Float>(
    x: &[T],
    y: &[T],
    target: T,
    order: SortOrder,
) -> Result<Point<T>> {
    if x.is_empty() || y.is_empty() {
        return Err(ResampleError::EmptyInput);
    }
    if x.len() != y.len() {
        return Err(ResampleError::MismatchedInputs {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if !target.is_finite() {
        return Err(ResampleError::InvalidOption {
            option: "target",
            value: target.to_f64().unwrap_or(f64::NAN),
        });
    }

    // Narrow to an adjacent pair bracketing the target; out-of-range targets
    // converge on an endpoint pair and the distance comparison clamps.
    let mut lo = 0;
    let mut hi = x.len() - 1;
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        let advance = match order {
            SortOrder::Ascending => x[mid] <= target,
            SortOrder::Descending => x[mid] >= target,
        };
        if advance {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    let idx = if (target - x[lo]).abs() <= (target - x[hi]).abs() {
        lo
    } else {
        hi
    };

    Ok(Point { x: x[idx], y: y[idx] })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn even_series() -> (Vec<f64>, Vec<f64>) {
        (
            vec![-1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            vec![10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0],
        )
    }

    fn odd_series() -> (Vec<f64>, Vec<f64>) {
        (
            vec![-1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0],
            vec![10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0],
        )
    }

    #[test]
    fn finds_closest_in_even_series() {
        let (x, y) = even_series();
        let near = |t| nearest_point(&x, &y, t, SortOrder::Ascending).unwrap();
        assert_eq!(near(-2.0), Point { x: -1.0, y: 10.0 });
        assert_eq!(near(0.6), Point { x: 1.0, y: 12.0 });
        assert_eq!(near(4.3), Point { x: 4.0, y: 15.0 });
        assert_eq!(near(6.0), Point { x: 6.0, y: 17.0 });
        assert_eq!(near(7.0), Point { x: 6.0, y: 17.0 });
    }

    #[test]
    fn finds_closest_in_odd_series() {
        let (x, y) = odd_series();
        let near = |t| nearest_point(&x, &y, t, SortOrder::Ascending).unwrap();
        assert_eq!(near(-2.0), Point { x: -1.0, y: 10.0 });
        assert_eq!(near(4.3), Point { x: 4.0, y: 15.0 });
        assert_eq!(near(7.0), Point { x: 7.0, y: 18.0 });
        assert_eq!(near(8.0), Point { x: 7.0, y: 18.0 });
    }

    #[test]
    fn descending_series_matches_ascending() {
        let (x, y) = odd_series();
        let rx: Vec<f64> = x.iter().rev().copied().collect();
        let ry: Vec<f64> = y.iter().rev().copied().collect();
        for &t in &[-2.0, 0.6, 4.3, 6.0, 7.0, 8.0] {
            let asc = nearest_point(&x, &y, t, SortOrder::Ascending).unwrap();
            let desc = nearest_point(&rx, &ry, t, SortOrder::Descending).unwrap();
            assert_eq!(asc, desc, "target {t}");
        }
    }

    #[test]
    fn exact_tie_resolves_to_lower_index() {
        let x = [0.0, 2.0];
        let y = [5.0, 7.0];
        let near = nearest_point(&x, &y, 1.0, SortOrder::Ascending).unwrap();
        assert_eq!(near, Point { x: 0.0, y: 5.0 });
    }

    #[test]
    fn single_sample_always_wins() {
        let near = nearest_point(&[3.0], &[9.0], 100.0, SortOrder::Ascending).unwrap();
        assert_eq!(near, Point { x: 3.0, y: 9.0 });
    }

    #[test]
    fn rejects_bad_inputs() {
        let x = [1.0, 2.0];
        let y = [1.0, 2.0];
        assert_eq!(
            nearest_point::<f64>(&[], &[], 0.0, SortOrder::Ascending).unwrap_err(),
            ResampleError::EmptyInput
        );
        assert_eq!(
            nearest_point(&x, &y[..1], 0.0, SortOrder::Ascending).unwrap_err(),
            ResampleError::MismatchedInputs { x_len: 2, y_len: 1 }
        );
        assert!(matches!(
            nearest_point(&x, &y, f64::NAN, SortOrder::Ascending).unwrap_err(),
            ResampleError::InvalidOption { option: "target", .. }
        ));
    }
}
