//! Input abstraction for curve data.
//!
//! This module defines the [`SeriesInput`] trait which allows the resampler
//! and the supporting primitives to accept standard slices, vectors, and
//! 1-D `ndarray` arrays interchangeably.

use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

use crate::primitives::errors::{ResampleError, Result};

/// Trait for types that can supply one coordinate array of a curve.
pub trait SeriesInput<T: Float> {
    /// View the input as a contiguous slice.
    fn as_series_slice(&self) -> Result<&[T]>;
}

impl<T: Float> SeriesInput<T> for [T] {
    fn as_series_slice(&self) -> Result<&[T]> {
        Ok(self)
    }
}

impl<T: Float> SeriesInput<T> for Vec<T> {
    fn as_series_slice(&self) -> Result<&[T]> {
        Ok(self.as_slice())
    }
}

impl<T: Float, const N: usize> SeriesInput<T> for [T; N] {
    fn as_series_slice(&self) -> Result<&[T]> {
        Ok(self)
    }
}

impl<T: Float, S> SeriesInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_series_slice(&self) -> Result<&[T]> {
        self.as_slice().ok_or_else(|| {
            ResampleError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
