//! Uniform abscissa grid generation.
//!
//! ## Purpose
//!
//! This module produces the equally spaced target abscissas each zone emits.
//! It is the one place the output grid is defined, so the resamplers and the
//! engine always agree on bucket positions.
//!
//! ## Invariants
//!
//! * Both bounds are included: the first value is exactly `from` and the
//!   last exactly `to` (no floating-point drift at the endpoint).
//! * `size == 1` yields `[from]`; `size == 0` yields an empty vector.
//!
//! ## Visibility
//!
//! Internal to the engine; not re-exported.

use num_traits::Float;

/// Generate `size` evenly spaced values between `from` and `to` inclusive.
pub fn linspace<T: Float>(from: T, to: T, size: usize) -> Vec<T> {
    match size {
        0 => Vec::new(),
        1 => vec![from],
        _ => {
            let step = (to - from) / T::from(size - 1).unwrap();
            let mut out: Vec<T> = (0..size).map(|i| from + T::from(i).unwrap() * step).collect();
            // Pin the endpoint so zone boundaries meet exactly
            out[size - 1] = to;
            out
        }
    }
}
