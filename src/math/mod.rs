//! Layer 2: Math
//!
//! Pure mathematical functions.
//!
//! This layer provides the mathematical building blocks used by the
//! resampling algorithms: uniform grid generation and exact integration of
//! linear segments. No algorithm-specific logic lives here.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives (errors, sorting)
//! ```

/// Uniform grid generation.
///
/// Provides:
/// - Inclusive-bounds linspace
/// - Exact endpoint pinning
pub mod grid;

/// Linear segment arithmetic.
///
/// Provides:
/// - Anchor + slope segment representation
/// - Exact definite integrals
/// - Point evaluation and extrapolation
pub mod segment;
