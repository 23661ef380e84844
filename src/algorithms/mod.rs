//! Layer 3: Algorithms
//!
//! Core resampling algorithms.
//!
//! This layer implements the numerical content of the crate: the two
//! resampling variants and the nearest-abscissa lookup. It contains the
//! "business logic" of resampling but is orchestrated by the engine layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API (builder, input)
//!   ↓
//! Layer 4: Engine (executor, zones, validator, output)
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math (grid, segment)
//!   ↓
//! Layer 1: Primitives (errors, sorting)
//! ```

/// Nearest-abscissa lookup.
///
/// Provides:
/// - Binary search over ascending or descending series
/// - Endpoint clamping for out-of-range targets
/// - Lower-index tie breaking
pub mod nearest;

/// Area-preserving resampling.
///
/// Provides:
/// - Exact integration of the piecewise-linear interpolant
/// - Centered output buckets
/// - Synthetic zero extension beyond the data
pub mod smooth;

/// Bucket-averaging resampling.
///
/// Provides:
/// - Per-bucket sample means
/// - Zero for empty buckets
/// - Strict monotonicity enforcement
pub mod slot;
