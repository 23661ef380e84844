//! Zone partitioning around exclusion intervals.
//!
//! ## Purpose
//!
//! This module splits the requested abscissa range into contiguous zones
//! that tile the range minus the exclusions, and apportions the total output
//! point budget across zones in exact proportion to their widths. Zones let
//! a request skip solvent peaks or detector artifacts without disturbing
//! the point density elsewhere on the curve.
//!
//! ## Design notes
//!
//! * Exclusions are normalized before partitioning: sorted by start, clamped
//!   to the range, dropped when outside or empty after clamping. Inverted
//!   bounds and overlaps are rejected rather than left undefined.
//! * Point allocation rounds each zone's proportional share, clamping so the
//!   running total never exceeds the budget; the last zone of positive width
//!   absorbs the remainder, making the sum exact.
//! * Zero-width zones (an exclusion touching a range boundary) are kept in
//!   the output with zero points; they emit nothing downstream.
//!
//! ## Invariants
//!
//! * `Σ zone.number_of_points == total_points` exactly.
//! * Zones are ascending, disjoint, and together with the exclusions cover
//!   `[from, to]` exactly.
//!
//! ## Visibility
//!
//! [`Zone`] and [`Exclusion`] are public types; [`build_zones`] is internal
//! to the engine.

use num_traits::Float;

use crate::primitives::errors::{ResampleError, Result};

// ============================================================================
// Data Structures
// ============================================================================

/// An abscissa interval to exclude from resampling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exclusion<T> {
    /// Lower bound of the excluded interval.
    pub from: T,

    /// Upper bound of the excluded interval.
    pub to: T,
}

impl<T: Float> Exclusion<T> {
    /// Create an exclusion spanning `[from, to]`.
    pub fn new(from: T, to: T) -> Self {
        Self { from, to }
    }
}

/// A contiguous sub-range of the output grid and its share of the budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone<T> {
    /// Lower bound of the zone.
    pub from: T,

    /// Upper bound of the zone.
    pub to: T,

    /// Number of equally spaced output points the zone owns.
    pub number_of_points: usize,
}

// ============================================================================
// Partitioning
// ============================================================================

/// Partition `[from, to]` minus the exclusions into zones carrying exactly
/// `total_points` output points altogether.
pub fn build_zones<T: Float>(
    from: T,
    to: T,
    total_points: usize,
    exclusions: &[Exclusion<T>],
) -> Result<Vec<Zone<T>>> {
    debug_assert!(from < to);

    let exclusions = normalize_exclusions(from, to, exclusions)?;

    // Sub-ranges between consecutive exclusions, zero-width ones included
    let mut subs: Vec<(T, T)> = Vec::with_capacity(exclusions.len() + 1);
    let mut cursor = from;
    for excl in &exclusions {
        subs.push((cursor, excl.from));
        cursor = excl.to;
    }
    subs.push((cursor, to));

    let included = subs
        .iter()
        .fold(T::zero(), |acc, &(a, b)| acc + (b - a));

    // The last positive-width sub-range absorbs the rounding remainder so
    // the counts always sum to the budget.
    let last_pos = match subs.iter().rposition(|&(a, b)| b > a) {
        Some(i) if included > T::zero() => i,
        _ => return Err(ResampleError::ExclusionsCoverRange),
    };

    let total = T::from(total_points).unwrap();
    let mut remaining = total_points;
    let mut counts = vec![0usize; subs.len()];
    for (i, &(a, b)) in subs.iter().enumerate() {
        if i == last_pos {
            continue;
        }
        let share = (total * (b - a) / included).round();
        let n = share.to_usize().unwrap_or(0).min(remaining);
        counts[i] = n;
        remaining -= n;
    }
    counts[last_pos] = remaining;

    Ok(subs
        .into_iter()
        .zip(counts)
        .map(|((zone_from, zone_to), number_of_points)| Zone {
            from: zone_from,
            to: zone_to,
            number_of_points,
        })
        .collect())
}

/// Sort, clamp, and vet the caller's exclusions against `[from, to]`.
fn normalize_exclusions<T: Float>(
    from: T,
    to: T,
    exclusions: &[Exclusion<T>],
) -> Result<Vec<Exclusion<T>>> {
    let mut normalized: Vec<Exclusion<T>> = Vec::with_capacity(exclusions.len());
    for excl in exclusions {
        if !excl.from.is_finite() || !excl.to.is_finite() || excl.from >= excl.to {
            return Err(ResampleError::InvalidExclusion {
                from: excl.from.to_f64().unwrap_or(f64::NAN),
                to: excl.to.to_f64().unwrap_or(f64::NAN),
            });
        }
        let clamped = Exclusion::new(excl.from.max(from), excl.to.min(to));
        if clamped.from < clamped.to {
            normalized.push(clamped);
        }
    }

    normalized.sort_by(|a, b| {
        a.from
            .partial_cmp(&b.from)
            .unwrap_or(core::cmp::Ordering::Equal)
    });

    for pair in normalized.windows(2) {
        if pair[1].from < pair[0].to {
            return Err(ResampleError::OverlappingExclusions {
                from: pair[1].from.to_f64().unwrap_or(f64::NAN),
                to: pair[1].to.to_f64().unwrap_or(f64::NAN),
            });
        }
    }

    Ok(normalized)
}

// ============================================================================
// Tests
// ============================================================================
