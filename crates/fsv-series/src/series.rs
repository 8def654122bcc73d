use crate::complex::Complex;
use crate::config::SeriesConfig;
use crate::error::SeriesResult;
use crate::evaluator::{Epicycle, epicycles, evaluate, partial_sums};
use crate::sampler::{Point, sample_with};
use crate::transform::{Coefficients, transform_with};

/// Immutable snapshot of one path's sampled signal and its coefficients.
///
/// Rebuild it whenever the path or the requested count changes.
#[derive(Debug, Clone, PartialEq)]
pub struct FourierSeries {
    samples: Vec<Complex>,
    coefficients: Coefficients,
    requested: usize,
}

impl FourierSeries {
    pub fn from_path(path: &[Point], config: &SeriesConfig) -> SeriesResult<Self> {
        config.validate()?;
        let samples = sample_with(path, config.sample_count(), config.mode)?;
        Self::from_samples(samples, config)
    }

    pub fn from_samples(samples: Vec<Complex>, config: &SeriesConfig) -> SeriesResult<Self> {
        let requested = config.effective_coefficient_count();
        let coefficients = transform_with(&samples, requested, &config.transform_options())?;
        Ok(Self {
            samples,
            coefficients,
            requested,
        })
    }

    #[must_use]
    pub fn samples(&self) -> &[Complex] {
        &self.samples
    }

    #[must_use]
    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    #[must_use]
    pub fn requested(&self) -> usize {
        self.requested
    }

    #[must_use]
    pub fn at(&self, t: f64) -> Complex {
        evaluate(&self.coefficients, t)
    }

    #[must_use]
    pub fn partial_sums(&self, t: f64) -> Vec<Complex> {
        partial_sums(&self.coefficients, t)
    }

    #[must_use]
    pub fn epicycles(&self, t: f64) -> Vec<Epicycle> {
        epicycles(&self.coefficients, t)
    }
}
