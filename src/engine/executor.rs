//! Execution engine for resampling requests.
//!
//! ## Purpose
//!
//! This module orchestrates a resampling request end to end: validate the
//! inputs, normalize acquisition direction, resolve the target range,
//! partition it into zones around the exclusions, resample every zone with
//! the selected variant, and concatenate the per-zone results in request
//! order.
//!
//! ## Key concepts
//!
//! ### Two independent direction flags
//!
//! Direction is handled at two separate layers that must never be conflated:
//!
//! * **Input direction**: a descending curve is reversed (on copies) to
//!   ascending order so the sweeps always see increasing x. This is pure
//!   normalization and does not affect the output direction.
//! * **Output direction**: a request with `from > to` swaps the bounds for
//!   processing and flips the emitted zones and per-zone values, so the
//!   result runs from the caller's `from` down to their `to`.
//!
//! ### Per-zone independence
//!
//! Zones have no data dependency on each other; each is resampled against
//! the full input curve over its own sub-range. When parallel execution is
//! enabled the zones fan out across the rayon pool, and the ordered collect
//! keeps the concatenation in zone-list order regardless of completion
//! order.
//!
//! ## Invariants
//!
//! * Output length equals the requested number of points exactly.
//! * Zones are always computed on ascending coordinates; reversal only
//!   reorders and flips finished vectors.
//!
//! ## Non-goals
//!
//! * This module does not allocate zone budgets (see `zones`).
//! * This module does not implement the per-bucket numerics (see
//!   `algorithms`).
//!
//! ## Visibility
//!
//! Internal; the public entry point is the builder in `api`.

use log::debug;
use num_traits::Float;
use rayon::prelude::*;

use crate::algorithms::slot::resample_slot;
use crate::algorithms::smooth::resample_smooth;
use crate::engine::output::ResampledCurve;
use crate::engine::validator::Validator;
use crate::engine::zones::{build_zones, Exclusion, Zone};
use crate::math::grid::linspace;
use crate::primitives::errors::Result;

// ============================================================================
// Configuration Types
// ============================================================================

/// Resampling variant selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Integrate the piecewise-linear interpolant over each bucket
    /// (area-preserving, density-insensitive).
    #[default]
    Smooth,

    /// Average the samples falling into each bucket (density-sensitive).
    Slot,
}

/// Fully resolved configuration for one resampling request.
#[derive(Debug, Clone)]
pub struct ResampleConfig<T> {
    /// Start of the target range; defaults to the curve's first x.
    pub from: Option<T>,

    /// End of the target range; defaults to the curve's last x.
    pub to: Option<T>,

    /// Total number of output points across all zones.
    pub number_of_points: usize,

    /// Resampling variant.
    pub variant: Variant,

    /// Intervals to skip inside the target range.
    pub exclusions: Vec<Exclusion<T>>,

    /// Fan the per-zone work out across the rayon pool.
    pub parallel: bool,
}

impl<T: Float> Default for ResampleConfig<T> {
    fn default() -> Self {
        Self {
            from: None,
            to: None,
            number_of_points: 100,
            variant: Variant::default(),
            exclusions: Vec::new(),
            parallel: false,
        }
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Run one resampling request against a curve.
pub fn run<T>(x: &[T], y: &[T], config: &ResampleConfig<T>) -> Result<ResampledCurve<T>>
where
    T: Float + Send + Sync,
{
    Validator::validate_inputs(x, y)?;

    // Input-direction flag: normalize descending acquisitions to ascending
    // copies. Independent of the output-direction flag below.
    let descending_input = x[0] > x[1];
    let (x, y): (Vec<T>, Vec<T>) = if descending_input {
        debug!("input x is descending; processing a reversed copy");
        (
            x.iter().rev().copied().collect(),
            y.iter().rev().copied().collect(),
        )
    } else {
        (x.to_vec(), y.to_vec())
    };

    let from = config.from.unwrap_or(x[0]);
    let to = config.to.unwrap_or(x[x.len() - 1]);
    Validator::validate_bound("from", from)?;
    Validator::validate_bound("to", to)?;
    Validator::validate_number_of_points(config.number_of_points)?;

    // Output-direction flag: an inverted request flips the emitted grid,
    // never the processing order.
    let reverse_output = from > to;
    let (from, to) = if reverse_output { (to, from) } else { (from, to) };
    Validator::validate_range(from, to)?;

    let mut zones = build_zones(from, to, config.number_of_points, &config.exclusions)?;
    if reverse_output {
        zones.reverse();
    }
    debug!(
        "resampling {} samples onto {} points across {} zone(s), variant {:?}",
        x.len(),
        config.number_of_points,
        zones.len(),
        config.variant
    );

    let resample_zone = |zone: &Zone<T>| -> Result<(Vec<T>, Vec<T>)> {
        let mut zone_x = linspace(zone.from, zone.to, zone.number_of_points);
        let mut zone_y = match config.variant {
            Variant::Smooth => resample_smooth(&x, &y, zone.from, zone.to, zone.number_of_points),
            Variant::Slot => resample_slot(&x, &y, zone.from, zone.to, zone.number_of_points)?,
        };
        if reverse_output {
            zone_x.reverse();
            zone_y.reverse();
        }
        Ok((zone_x, zone_y))
    };

    let parts: Vec<(Vec<T>, Vec<T>)> = if config.parallel {
        zones.par_iter().map(resample_zone).collect::<Result<_>>()?
    } else {
        zones.iter().map(resample_zone).collect::<Result<_>>()?
    };

    let mut out_x = Vec::with_capacity(config.number_of_points);
    let mut out_y = Vec::with_capacity(config.number_of_points);
    for (zone_x, zone_y) in parts {
        out_x.extend(zone_x);
        out_y.extend(zone_y);
    }

    Ok(ResampledCurve { x: out_x, y: out_y })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn config(from: f64, to: f64, n: usize) -> ResampleConfig<f64> {
        ResampleConfig {
            from: Some(from),
            to: Some(to),
            number_of_points: n,
            ..ResampleConfig::default()
        }
    }

    #[test]
    fn output_length_matches_the_request() {
        let x: Vec<f64> = (0..30).map(f64::from).collect();
        let y = vec![1.0; 30];
        for n in [1, 2, 7, 100] {
            let curve = run(&x, &y, &config(0.0, 29.0, n)).unwrap();
            assert_eq!(curve.len(), n);
            assert_eq!(curve.x.len(), curve.y.len());
        }
    }

    #[test]
    fn descending_input_normalizes_to_the_same_output() {
        let x: Vec<f64> = (0..20).map(f64::from).collect();
        let y: Vec<f64> = x.iter().map(|v| v * v).collect();
        let rx: Vec<f64> = x.iter().rev().copied().collect();
        let ry: Vec<f64> = y.iter().rev().copied().collect();

        let cfg = config(2.0, 17.0, 31);
        let fwd = run(&x, &y, &cfg).unwrap();
        let rev = run(&rx, &ry, &cfg).unwrap();
        assert_eq!(fwd.x, rev.x);
        for (a, b) in fwd.y.iter().zip(rev.y.iter()) {
            assert_relative_eq!(*a, *b, max_relative = 1e-12);
        }
    }

    #[test]
    fn inverted_bounds_mirror_the_ascending_result() {
        let x: Vec<f64> = (0..20).map(f64::from).collect();
        let y: Vec<f64> = x.iter().map(|v| 3.0 * v + 1.0).collect();

        let fwd = run(&x, &y, &config(2.0, 17.0, 16)).unwrap();
        let rev = run(&x, &y, &config(17.0, 2.0, 16)).unwrap();

        let mirrored_x: Vec<f64> = rev.x.iter().rev().copied().collect();
        let mirrored_y: Vec<f64> = rev.y.iter().rev().copied().collect();
        assert_eq!(fwd.x, mirrored_x);
        for (a, b) in fwd.y.iter().zip(mirrored_y.iter()) {
            assert_relative_eq!(*a, *b, max_relative = 1e-12);
        }
        // The reversed output itself descends
        assert!(rev.x.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn reversed_zone_ordering_with_boundary_exclusion() {
        let x: Vec<f64> = (0..=10).map(f64::from).collect();
        let y = vec![2.0; 11];
        let cfg = ResampleConfig {
            from: Some(10.0),
            to: Some(0.0),
            number_of_points: 10,
            exclusions: vec![Exclusion::new(0.0, 5.0)],
            ..ResampleConfig::default()
        };
        let curve = run(&x, &y, &cfg).unwrap();
        assert_eq!(curve.len(), 10);
        // Only the [5, 10] zone carries points; descending request emits it
        // from 10 down to 5.
        assert_eq!(curve.x[0], 10.0);
        assert_eq!(*curve.x.last().unwrap(), 5.0);
        assert!(curve.x.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let x: Vec<f64> = (0..200).map(|i| i as f64 * 0.1).collect();
        let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();
        let mut cfg = ResampleConfig {
            from: Some(1.0),
            to: Some(18.0),
            number_of_points: 64,
            exclusions: vec![Exclusion::new(4.0, 5.0), Exclusion::new(9.0, 11.0)],
            ..ResampleConfig::default()
        };
        let sequential = run(&x, &y, &cfg).unwrap();
        cfg.parallel = true;
        let parallel = run(&x, &y, &cfg).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn default_bounds_come_from_the_normalized_curve() {
        let x = vec![5.0, 4.0, 3.0, 2.0, 1.0];
        let y = vec![10.0, 20.0, 30.0, 40.0, 50.0];
        let cfg = ResampleConfig {
            number_of_points: 5,
            ..ResampleConfig::default()
        };
        let curve = run(&x, &y, &cfg).unwrap();
        // Defaults resolve after normalization, so the grid ascends 1 to 5.
        assert_eq!(curve.x, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }
}
