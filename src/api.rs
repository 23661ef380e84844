//! High-level API for equally spaced resampling.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring a resampling request and the built model that
//! applies it to curve data.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all
//!   parameters (smooth variant, 100 points, full data range).
//! * **Validated**: Configuration is vetted at `build()`; data-dependent
//!   checks run per `resample()` call.
//! * **Reusable**: The built model borrows itself per call, so one grid
//!   configuration can resample any number of spectra.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ResamplerBuilder`] via `Resampler::new()`.
//! 2. Chain configuration methods (`.from()`, `.to()`,
//!    `.number_of_points()`, `.variant()`, `.exclusion()`, `.parallel()`).
//! 3. Call `.build()` to obtain a validated [`Resampler`].
//! 4. Call `.resample(&x, &y)` with slices, vectors, or 1-D ndarray arrays.
//!
//! ## Visibility
//!
//! This is the primary public API. Types re-exported here are considered
//! stable.

use num_traits::Float;

use crate::engine::executor::{self, ResampleConfig, Variant};
use crate::engine::output::ResampledCurve;
use crate::engine::validator::Validator;
use crate::engine::zones::Exclusion;
use crate::input::SeriesInput;
use crate::primitives::errors::{ResampleError, Result};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a resampling request.
#[derive(Debug, Clone)]
pub struct ResamplerBuilder<T> {
    /// Start of the target range; defaults to the curve's first x.
    pub from: Option<T>,

    /// End of the target range; defaults to the curve's last x.
    pub to: Option<T>,

    /// Total output points; defaults to 100.
    pub number_of_points: Option<usize>,

    /// Resampling variant; defaults to [`Variant::Smooth`].
    pub variant: Option<Variant>,

    /// Intervals to skip inside the target range.
    pub exclusions: Vec<Exclusion<T>>,

    /// Parallel per-zone execution; defaults to off.
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for ResamplerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ResamplerBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            number_of_points: None,
            variant: None,
            exclusions: Vec::new(),
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the start of the target range.
    pub fn from(mut self, from: T) -> Self {
        if self.from.is_some() {
            self.duplicate_param = Some("from");
        }
        self.from = Some(from);
        self
    }

    /// Set the end of the target range.
    pub fn to(mut self, to: T) -> Self {
        if self.to.is_some() {
            self.duplicate_param = Some("to");
        }
        self.to = Some(to);
        self
    }

    /// Set the total number of output points.
    pub fn number_of_points(mut self, number_of_points: usize) -> Self {
        if self.number_of_points.is_some() {
            self.duplicate_param = Some("number_of_points");
        }
        self.number_of_points = Some(number_of_points);
        self
    }

    /// Set the resampling variant.
    pub fn variant(mut self, variant: Variant) -> Self {
        if self.variant.is_some() {
            self.duplicate_param = Some("variant");
        }
        self.variant = Some(variant);
        self
    }

    /// Add one exclusion interval.
    pub fn exclusion(mut self, exclusion: Exclusion<T>) -> Self {
        self.exclusions.push(exclusion);
        self
    }

    /// Add several exclusion intervals.
    pub fn exclusions<I>(mut self, exclusions: I) -> Self
    where
        I: IntoIterator<Item = Exclusion<T>>,
    {
        self.exclusions.extend(exclusions);
        self
    }

    /// Enable or disable parallel per-zone execution.
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the resampler, validating everything knowable without data.
    pub fn build(self) -> Result<Resampler<T>> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        if let Some(from) = self.from {
            Validator::validate_bound("from", from)?;
        }
        if let Some(to) = self.to {
            Validator::validate_bound("to", to)?;
        }

        let number_of_points = self.number_of_points.unwrap_or(100);
        Validator::validate_number_of_points(number_of_points)?;

        for excl in &self.exclusions {
            if !excl.from.is_finite() || !excl.to.is_finite() || excl.from >= excl.to {
                return Err(ResampleError::InvalidExclusion {
                    from: excl.from.to_f64().unwrap_or(f64::NAN),
                    to: excl.to.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        Ok(Resampler {
            config: ResampleConfig {
                from: self.from,
                to: self.to,
                number_of_points,
                variant: self.variant.unwrap_or_default(),
                exclusions: self.exclusions,
                parallel: self.parallel.unwrap_or(false),
            },
        })
    }
}

// ============================================================================
// Resampler
// ============================================================================

/// A validated resampling model, reusable across curves.
#[derive(Debug, Clone)]
pub struct Resampler<T> {
    config: ResampleConfig<T>,
}

impl<T: Float> Resampler<T> {
    /// Start configuring a resampling request.
    pub fn new() -> ResamplerBuilder<T> {
        ResamplerBuilder::new()
    }
}

impl<T: Float + Send + Sync> Resampler<T> {
    /// Resample a curve onto the configured grid.
    ///
    /// Accepts slices, vectors, and contiguous 1-D ndarray arrays.
    pub fn resample<X, Y>(&self, x: &X, y: &Y) -> Result<ResampledCurve<T>>
    where
        X: SeriesInput<T> + ?Sized,
        Y: SeriesInput<T> + ?Sized,
    {
        executor::run(x.as_series_slice()?, y.as_series_slice()?, &self.config)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::Array1;

    #[test]
    fn defaults_cover_the_whole_curve() {
        let x: Vec<f64> = (0..50).map(f64::from).collect();
        let y = vec![4.0; 50];
        let curve = Resampler::new().build().unwrap().resample(&x, &y).unwrap();
        assert_eq!(curve.len(), 100);
        assert_eq!(curve.x[0], 0.0);
        assert_eq!(*curve.x.last().unwrap(), 49.0);
    }

    #[test]
    fn builder_configures_the_request() {
        let x: Vec<f64> = (0..100).map(|i| i as f64 * 0.5).collect();
        let y = vec![1.0; 100];
        let curve = Resampler::new()
            .from(10.0)
            .to(40.0)
            .number_of_points(31)
            .variant(Variant::Slot)
            .build()
            .unwrap()
            .resample(&x, &y)
            .unwrap();
        assert_eq!(curve.len(), 31);
        assert_eq!(curve.x[0], 10.0);
        assert_eq!(*curve.x.last().unwrap(), 40.0);
        for v in curve.y {
            assert_relative_eq!(v, 1.0);
        }
    }

    #[test]
    fn ndarray_inputs_are_accepted() {
        let x = Array1::from_vec((0..20).map(f64::from).collect());
        let y = Array1::from_elem(20, 2.0);
        let curve = Resampler::new()
            .number_of_points(5)
            .build()
            .unwrap()
            .resample(&x, &y)
            .unwrap();
        assert_eq!(curve.len(), 5);
    }

    #[test]
    fn duplicate_parameters_are_rejected() {
        let err = Resampler::<f64>::new().from(1.0).from(2.0).build().unwrap_err();
        assert_eq!(
            err,
            ResampleError::DuplicateParameter { parameter: "from" }
        );
    }

    #[test]
    fn build_rejects_invalid_configuration() {
        assert!(matches!(
            Resampler::<f64>::new().from(f64::NAN).build().unwrap_err(),
            ResampleError::InvalidOption { option: "from", .. }
        ));
        assert_eq!(
            Resampler::<f64>::new().number_of_points(0).build().unwrap_err(),
            ResampleError::InvalidNumberOfPoints { got: 0 }
        );
        assert_eq!(
            Resampler::<f64>::new()
                .exclusion(Exclusion::new(5.0, 3.0))
                .build()
                .unwrap_err(),
            ResampleError::InvalidExclusion { from: 5.0, to: 3.0 }
        );
    }

    #[test]
    fn model_is_reusable_across_curves() {
        let model = Resampler::new().number_of_points(11).build().unwrap();
        let x: Vec<f64> = (0..10).map(f64::from).collect();
        let flat = vec![1.0; 10];
        let ramp: Vec<f64> = x.clone();
        let a = model.resample(&x, &flat).unwrap();
        let b = model.resample(&x, &ramp).unwrap();
        assert_eq!(a.len(), 11);
        assert_eq!(b.len(), 11);
        assert_ne!(a.y, b.y);
    }
}
