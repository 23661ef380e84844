//! # regrid — equally spaced resampling of x/y curves
//!
//! A small, focused library for projecting discretely sampled curves onto a
//! uniform abscissa grid, with optional exclusion zones, for
//! spectral/analytical data processing (chromatography, spectroscopy, and
//! similar domains where raw samples arrive at irregular or sparse spacing
//! and downstream analysis expects equal spacing).
//!
//! ## What it does
//!
//! Given paired `x`/`y` arrays with monotonic `x`, the resampler:
//!
//! 1. Normalizes acquisition direction (descending curves are processed on
//!    reversed copies; your data is never mutated).
//! 2. Partitions the target range into zones around the exclusions, giving
//!    each zone a share of the point budget exactly proportional to its
//!    width.
//! 3. Resamples every zone with one of two variants:
//!    * **Smooth** — integrates the piecewise-linear interpolant over each
//!      output bucket and divides by the bucket width. Area-preserving and
//!      insensitive to local sample density; the right default for spectra.
//!    * **Slot** — averages the raw samples that fall into each output
//!      bucket. Follows sample density; empty buckets resolve to zero.
//! 4. Concatenates the per-zone results in request order, so the output
//!    always has exactly the requested number of points.
//!
//! Two supporting primitives round out the API: [`nearest_point`] (binary
//! search for the sample closest to a target abscissa, with endpoint
//! clamping) and [`sort_by_x`] (stable reordering of paired arrays).
//!
//! ## Quick Start
//!
//! ```rust
//! use regrid::prelude::*;
//!
//! let x = vec![0.0, 0.5, 1.2, 2.0, 3.1, 4.0, 5.0];
//! let y = vec![1.0, 1.4, 2.1, 2.0, 1.2, 0.8, 0.5];
//!
//! let model = Resampler::new()
//!     .from(0.0)
//!     .to(5.0)
//!     .number_of_points(11)
//!     .build()?;
//!
//! let curve = model.resample(&x, &y)?;
//! assert_eq!(curve.len(), 11);
//! # Ok::<(), ResampleError>(())
//! ```
//!
//! ### Skipping exclusion zones
//!
//! Exclusions carve intervals out of the grid — a solvent peak, a detector
//! artifact — without disturbing the point density elsewhere:
//!
//! ```rust
//! use regrid::prelude::*;
//!
//! let x: Vec<f64> = (0..=100).map(|i| i as f64 * 0.1).collect();
//! let y: Vec<f64> = x.iter().map(|v| (v - 5.0).powi(2)).collect();
//!
//! let curve = Resampler::new()
//!     .from(0.0)
//!     .to(10.0)
//!     .number_of_points(12)
//!     .exclusion(Exclusion::new(2.0, 4.0))
//!     .exclusion(Exclusion::new(6.0, 8.0))
//!     .build()?
//!     .resample(&x, &y)?;
//!
//! // 12 points split evenly across the three surviving zones
//! assert_eq!(curve.len(), 12);
//! assert!(curve.x.iter().all(|&v| !(2.0 < v && v < 4.0)));
//! # Ok::<(), ResampleError>(())
//! ```
//!
//! ### Supporting primitives
//!
//! ```rust
//! use regrid::prelude::*;
//!
//! let x = vec![-1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let y = vec![10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0];
//!
//! let near = nearest_point(&x, &y, 4.3, SortOrder::Ascending)?;
//! assert_eq!((near.x, near.y), (4.0, 15.0));
//!
//! // Targets beyond the series clamp to the nearest endpoint
//! let clamped = nearest_point(&x, &y, 7.0, SortOrder::Ascending)?;
//! assert_eq!((clamped.x, clamped.y), (6.0, 17.0));
//!
//! let sorted = sort_by_x(&[3.0, 1.0, 2.0], &[30.0, 10.0, 20.0], SortOrder::Ascending)?;
//! assert_eq!(sorted.x, vec![1.0, 2.0, 3.0]);
//! # Ok::<(), ResampleError>(())
//! ```
//!
//! ## Parameters
//!
//! All builder parameters have sensible defaults; you only set what you
//! want to change.
//!
//! | Parameter            | Default          | Description                                  |
//! |----------------------|------------------|----------------------------------------------|
//! | **from**             | first x of curve | Start of the target range                    |
//! | **to**               | last x of curve  | End of the target range                      |
//! | **number_of_points** | 100              | Total output points across all zones (≥ 1)   |
//! | **variant**          | `Smooth`         | `Smooth` (integrating) or `Slot` (averaging) |
//! | **exclusions**       | none             | Intervals removed from the grid              |
//! | **parallel**         | false            | Fan zones out across the rayon pool          |
//!
//! Requests with `from > to` are honored: bounds are swapped internally and
//! the finished grid is emitted in descending order.
//!
//! ## Behavior at the data boundary
//!
//! The smooth variant conceptually extends the curve with a zero-valued
//! sample one native step beyond each end, so buckets that reach past the
//! data integrate a linear ramp down to zero rather than failing; buckets
//! far outside the data are exactly zero. The slot variant simply finds no
//! samples there and emits zero.
//!
//! ## Error handling
//!
//! Every fallible operation returns `Result<_, ResampleError>`; the `?`
//! operator is idiomatic. All validation is eager and fail-fast — nothing
//! is computed before the inputs pass, and no partial results are returned:
//!
//! ```rust
//! use regrid::prelude::*;
//!
//! let model = Resampler::<f64>::new().number_of_points(0).build();
//! assert!(matches!(
//!     model.unwrap_err(),
//!     ResampleError::InvalidNumberOfPoints { got: 0 }
//! ));
//! ```
//!
//! The slot variant additionally requires strictly increasing x after
//! normalization and aborts with [`ResampleError::NonMonotonicX`] when the
//! input violates that — averaging unordered buckets would silently
//! misattribute samples.

/// Layer 1: primitive building blocks (errors, sorting).
pub mod primitives;

/// Layer 2: pure math (uniform grids, linear segment integrals).
pub mod math;

/// Layer 3: core algorithms (nearest lookup, smooth and slot resampling).
pub mod algorithms;

/// Layer 4: engine (zones, validation, orchestration, output).
pub mod engine;

/// Input abstraction: slices, vectors, and 1-D ndarray arrays.
pub mod input;

/// Layer 5: the public builder API.
pub mod api;

/// Convenient single-import surface for typical use.
pub mod prelude {
    pub use crate::algorithms::nearest::{nearest_point, Point};
    pub use crate::api::{Resampler, ResamplerBuilder};
    pub use crate::engine::executor::Variant;
    pub use crate::engine::output::ResampledCurve;
    pub use crate::engine::zones::{Exclusion, Zone};
    pub use crate::input::SeriesInput;
    pub use crate::primitives::errors::{ResampleError, Result};
    pub use crate::primitives::sorting::{sort_by_x, SortOrder, SortedPairs};
}

pub use crate::algorithms::nearest::{nearest_point, Point};
pub use crate::api::{Resampler, ResamplerBuilder};
pub use crate::engine::executor::Variant;
pub use crate::engine::output::ResampledCurve;
pub use crate::engine::zones::{Exclusion, Zone};
pub use crate::primitives::errors::{ResampleError, Result};
pub use crate::primitives::sorting::{sort_by_x, SortOrder, SortedPairs};
