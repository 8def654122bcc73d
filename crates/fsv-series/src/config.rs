use fsv_runtime::RuntimeMode;
use serde::{Deserialize, Serialize};

use crate::error::{SeriesError, SeriesResult};
use crate::sampler::sample_count_for_exponent;
use crate::transform::{TransformOptions, WorkerPolicy};

pub const MIN_SAMPLING_EXPONENT: f64 = 2.0;
pub const MAX_SAMPLING_EXPONENT: f64 = 6.0;
pub const DEFAULT_MAX_COEFFICIENTS: usize = 201;

/// Parameters a consumer picks before building a [`crate::FourierSeries`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    /// Sample count is `⌊10^sampling_exponent⌋`.
    pub sampling_exponent: f64,
    pub coefficient_count: usize,
    pub max_coefficients: usize,
    /// Increment of `t` per animation tick.
    pub time_step: f64,
    /// Share of one period the trail keeps.
    pub trail_fraction: f64,
    pub mode: RuntimeMode,
    pub workers: WorkerPolicy,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            sampling_exponent: 3.0,
            coefficient_count: 101,
            max_coefficients: DEFAULT_MAX_COEFFICIENTS,
            time_step: 0.001,
            trail_fraction: 0.9,
            mode: RuntimeMode::Strict,
            workers: WorkerPolicy::Auto,
        }
    }
}

impl SeriesConfig {
    pub fn from_json_str(json: &str) -> SeriesResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|_| SeriesError::InvalidConfig {
            detail: "config is not valid JSON for SeriesConfig",
        })?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_sampling_exponent(mut self, sampling_exponent: f64) -> Self {
        self.sampling_exponent = sampling_exponent;
        self
    }

    #[must_use]
    pub fn with_coefficient_count(mut self, coefficient_count: usize) -> Self {
        self.coefficient_count = coefficient_count;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: RuntimeMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_workers(mut self, workers: WorkerPolicy) -> Self {
        self.workers = workers;
        self
    }

    #[must_use]
    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn validate(&self) -> SeriesResult<()> {
        if !(MIN_SAMPLING_EXPONENT..=MAX_SAMPLING_EXPONENT).contains(&self.sampling_exponent) {
            return Err(SeriesError::InvalidConfig {
                detail: "sampling_exponent must lie in [2, 6]",
            });
        }
        if self.max_coefficients == 0 {
            return Err(SeriesError::InvalidConfig {
                detail: "max_coefficients must be at least 1",
            });
        }
        if self.coefficient_count > self.max_coefficients {
            return Err(SeriesError::InvalidConfig {
                detail: "coefficient_count exceeds max_coefficients",
            });
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(SeriesError::InvalidConfig {
                detail: "time_step must be finite and greater than zero",
            });
        }
        if !(self.trail_fraction > 0.0 && self.trail_fraction <= 1.0) {
            return Err(SeriesError::InvalidConfig {
                detail: "trail_fraction must lie in (0, 1]",
            });
        }
        if matches!(self.workers, WorkerPolicy::Exact(0) | WorkerPolicy::Max(0)) {
            return Err(SeriesError::InvalidWorkers { requested: 0 });
        }
        Ok(())
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        sample_count_for_exponent(self.sampling_exponent)
    }

    /// Requested count clamped into `1..=max_coefficients`.
    #[must_use]
    pub fn effective_coefficient_count(&self) -> usize {
        self.coefficient_count.clamp(1, self.max_coefficients.max(1))
    }

    #[must_use]
    pub fn trail_capacity(&self) -> usize {
        (self.trail_fraction * (1.0 / self.time_step)) as usize
    }

    #[must_use]
    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions::default()
            .with_mode(self.mode)
            .with_workers(self.workers)
    }
}
