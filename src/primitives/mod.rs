//! Layer 1: Primitives
//!
//! Core building blocks and types.
//!
//! This layer provides the primitive abstractions, data structures, and
//! utility functions used throughout the crate. It has zero internal
//! dependencies within the crate.
//!
//! # Module Organization
//!
//! - **errors**: Shared error types (ResampleError)
//! - **sorting**: Pair sorting by x-coordinate
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API (builder, input)
//!   ↓
//! Layer 4: Engine (executor, zones, validator, output)
//!   ↓
//! Layer 3: Algorithms (nearest, smooth, slot)
//!   ↓
//! Layer 2: Math (grid, segment)
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
///
/// Provides:
/// - Unified `ResampleError` enum
/// - Specific error variants with offending values
/// - Crate-wide `Result` alias
pub mod errors;

/// Sorting utilities.
///
/// Provides:
/// - Stable sort-by-x for paired arrays
/// - Ascending and descending orderings
/// - Non-finite value handling
pub mod sorting;
