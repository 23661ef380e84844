//! Output container for resampling operations.
//!
//! ## Purpose
//!
//! This module defines [`ResampledCurve`], the paired-array result returned
//! by every resampling request: the equally spaced abscissas and the
//! resampled ordinates, in the direction the caller asked for.
//!
//! ## Design notes
//!
//! * Both vectors always have exactly the requested length; zones contribute
//!   their shares in request order.
//! * Implements `Display` with adaptive formatting: small curves print in
//!   full, large ones elide the middle.
//!
//! ## Invariants
//!
//! * `x.len() == y.len()`.
//! * Within each zone the abscissas are equally spaced; across zones they
//!   are monotonic in the request direction.
//!
//! ## Visibility
//!
//! [`ResampledCurve`] is part of the public API and is the primary result
//! type of the resampler.

use core::fmt;
use num_traits::Float;

// ============================================================================
// Result Structure
// ============================================================================

/// Resampled curve: equally spaced abscissas with their resampled values.
#[derive(Debug, Clone, PartialEq)]
pub struct ResampledCurve<T> {
    /// Target abscissas, equally spaced within each zone.
    pub x: Vec<T>,

    /// Resampled values, one per abscissa.
    pub y: Vec<T>,
}

impl<T: Float> ResampledCurve<T> {
    /// Returns the number of resampled points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns `true` if the curve contains no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over `(x, y)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + fmt::Display> fmt::Display for ResampledCurve<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Resampled Curve:")?;
        writeln!(f, "  Points: {}", self.len())?;
        writeln!(f)?;

        writeln!(f, "{:>12} {:>14}", "X", "Y")?;
        writeln!(f, "{:-<27}", "")?;

        // Show first 10 and last 10 rows if more than 20 points
        let n = self.len();
        let rows: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>12}", "...")?;
            }
            prev_idx = idx;
            writeln!(f, "{:>12.4} {:>14.6}", self.x[idx], self.y[idx])?;
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
    fn len_and_iter_agree() {
        let curve = ResampledCurve {
            x: vec![0.0, 1.0, 2.0],
            y: vec![5.0, 6.0, 7.0],
        };
        assert_eq!(curve.len(), 3);
        assert!(!curve.is_empty());
        let pairs: Vec<(f64, f64)> = curve.iter().collect();
        assert_eq!(pairs, vec![(0.0, 5.0), (1.0, 6.0), (2.0, 7.0)]);
    }

    #[test]
    fn display_elides_long_curves() {
        let n = 50;
        let curve = ResampledCurve {
            x: (0..n).map(f64::from).collect(),
            y: (0..n).map(|i| f64::from(i) * 2.0).collect(),
        };
        let rendered = format!("{curve}");
        assert!(rendered.contains("Points: 50"));
        assert!(rendered.contains("..."));
        assert!(rendered.contains("49.0000"));
    }

    #[test]
    fn display_prints_short_curves_in_full() {
        let curve = ResampledCurve {
            x: vec![1.0, 2.0],
            y: vec![3.0, 4.0],
        };
        let rendered = format!("{curve}");
        assert!(!rendered.contains("..."));
    }
}
