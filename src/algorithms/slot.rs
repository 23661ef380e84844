//! Bucket-averaging resampling ("slot" variant).
//!
//! ## Purpose
//!
//! This module assigns each input sample to the output bucket its abscissa
//! falls into and emits the mean of the y values collected per bucket.
//! Unlike the integrating variant, the result follows the local sample
//! density: a bucket's value is the plain average of whatever landed in it,
//! and a bucket nothing landed in resolves to zero.
//!
//! ## Key concepts
//!
//! ### Bucket membership
//!
//! Bucket `k` owns the half-open interval `(min_k, max_k]` with
//! `min_0 = from − step/2` and `step = (to − from)/(n − 1)`. Samples at or
//! before the very first boundary are dropped, matching the integrating
//! variant's bucket centering.
//!
//! ### Strictness
//!
//! The sweep requires strictly increasing x and aborts with
//! [`ResampleError::NonMonotonicX`] on the first violation it walks over.
//! Averaging buckets of unordered data would silently misattribute samples,
//! so this is a fatal caller bug, not a recoverable condition.
//!
//! ## Invariants
//!
//! * Output length equals `number_of_points` exactly.
//! * Each input sample contributes to at most one bucket.
//!
//! ## Non-goals
//!
//! * This module does not interpolate; gaps in the data stay zero.
//! * This module does not sort input data.
//!
//! ## Visibility
//!
//! Internal to the engine; reached through the resampler API.

use num_traits::Float;

use crate::primitives::errors::{ResampleError, Result};

// ============================================================================
// Accumulator
// ============================================================================

/// Loop-local accumulator for the bucket under construction.
#[derive(Debug, Clone, Copy)]
struct Bucket<T> {
    sum: T,
    count: usize,
}

impl<T: Float> Bucket<T> {
    fn empty() -> Self {
        Self {
            sum: T::zero(),
            count: 0,
        }
    }

    fn add(&mut self, y: T) {
        self.sum = self.sum + y;
        self.count += 1;
    }

    fn mean_or_zero(self) -> T {
        if self.count > 0 {
            self.sum / T::from(self.count).unwrap()
        } else {
            T::zero()
        }
    }
}

// ============================================================================
// Resampler
// ============================================================================

/// Resample a strictly increasing curve onto `number_of_points` equally
/// spaced buckets over `[from, to]`, averaging the samples in each bucket.
pub fn resample_slot<T: Float>(
    x: &[T],
    y: &[T],
    from: T,
    to: T,
    number_of_points: usize,
) -> Result<Vec<T>> {
    debug_assert!(x.len() >= 2 && x.len() == y.len());

    match number_of_points {
        0 => Ok(Vec::new()),
        1 => single_bucket(x, y, from, to),
        n => {
            let step = (to - from) / T::from(n - 1).unwrap();
            let start = from - step / T::from(2.0).unwrap();

            let mut out = Vec::with_capacity(n);
            let mut i = 0;
            for k in 0..n {
                let min = start + T::from(k).unwrap() * step;
                let max = min + step;

                // Skip samples at or before the bucket's lower edge
                while i < x.len() && x[i] <= min {
                    check_increasing(x, i)?;
                    i += 1;
                }

                let mut bucket = Bucket::empty();
                while i < x.len() && x[i] <= max {
                    check_increasing(x, i)?;
                    bucket.add(y[i]);
                    i += 1;
                }
                out.push(bucket.mean_or_zero());
            }
            Ok(out)
        }
    }
}

/// A lone output point owns the whole zone: average every sample inside
/// `[from, to]`.
fn single_bucket<T: Float>(x: &[T], y: &[T], from: T, to: T) -> Result<Vec<T>> {
    let mut bucket = Bucket::empty();
    for i in 0..x.len() {
        check_increasing(x, i)?;
        if x[i] >= from && x[i] <= to {
            bucket.add(y[i]);
        }
    }
    Ok(vec![bucket.mean_or_zero()])
}

fn check_increasing<T: Float>(x: &[T], i: usize) -> Result<()> {
    if i > 0 && x[i] <= x[i - 1] {
        return Err(ResampleError::NonMonotonicX { index: i });
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
