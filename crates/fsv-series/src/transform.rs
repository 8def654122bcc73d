use std::collections::HashMap;
use std::f64::consts::PI;
use std::time::Instant;

use fsv_runtime::RuntimeMode;
use serde::{Deserialize, Serialize};

use crate::complex::{Complex, complex_exponential};
use crate::error::{SeriesError, SeriesResult};
use crate::ordering::{canonical_order, canonical_sort, harmonic_bound};
use crate::trace::{SeriesOperation, SeriesTrace, next_operation_id, record_trace};

/// Worker control policy for the per-index fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WorkerPolicy {
    /// Let the runtime pick an execution width.
    #[default]
    Auto,
    /// Require an exact worker count.
    Exact(usize),
    /// Upper-bound worker count.
    Max(usize),
}

impl WorkerPolicy {
    /// True when the policy pins execution to a single worker.
    #[must_use]
    pub fn is_serial(self) -> bool {
        matches!(self, Self::Exact(1) | Self::Max(1))
    }
}

/// Options shared by transform entrypoints.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransformOptions {
    pub mode: RuntimeMode,
    pub workers: WorkerPolicy,
    pub check_finite: bool,
}

impl TransformOptions {
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
    pub fn with_check_finite(mut self, check_finite: bool) -> Self {
        self.check_finite = check_finite;
        self
    }
}

/// Coefficient mapping `n -> c_n` over a symmetric window `[-B, B]`.
///
/// Storage is unordered; use [`Coefficients::iter_canonical`] to walk it.
/// A non-empty mapping always holds every index of its window exactly once.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "HashMap<i64, Complex>", into = "HashMap<i64, Complex>")]
pub struct Coefficients {
    terms: HashMap<i64, Complex>,
}

impl Coefficients {
    /// Builds a mapping from `(n, c_n)` pairs, rejecting anything but a full
    /// `[-B, B]` window with each index given once.
    pub fn from_terms(terms: impl IntoIterator<Item = (i64, Complex)>) -> SeriesResult<Self> {
        let mut map = HashMap::new();
        for (n, value) in terms {
            if map.insert(n, value).is_some() {
                return Err(SeriesError::InvalidInput {
                    detail: "coefficient index given more than once",
                });
            }
        }
        Self::try_from(map)
    }

    #[must_use]
    pub fn get(&self, n: i64) -> Option<Complex> {
        self.terms.get(&n).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Largest `|n|` present, or 0 for an empty mapping.
    #[must_use]
    pub fn bound(&self) -> usize {
        self.terms
            .keys()
            .map(|n| n.unsigned_abs() as usize)
            .max()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn canonical_indices(&self) -> Vec<i64> {
        canonical_sort(self.terms.keys().copied())
    }

    /// `(n, c_n)` pairs in canonical order.
    pub fn iter_canonical(&self) -> impl Iterator<Item = (i64, Complex)> + '_ {
        self.canonical_indices()
            .into_iter()
            .map(move |n| (n, self.terms[&n]))
    }
}

impl TryFrom<HashMap<i64, Complex>> for Coefficients {
    type Error = SeriesError;

    fn try_from(terms: HashMap<i64, Complex>) -> SeriesResult<Self> {
        if terms.is_empty() {
            return Ok(Self { terms });
        }
        let bound = terms.keys().map(|n| n.unsigned_abs()).max().unwrap_or(0);
        // a full window [-B, B] has exactly 2B + 1 distinct keys
        let window_len = bound.checked_mul(2).and_then(|twice| twice.checked_add(1));
        if window_len != Some(terms.len() as u64) {
            return Err(SeriesError::InvalidInput {
                detail: "coefficient indices must fill a symmetric window [-B, B]",
            });
        }
        Ok(Self { terms })
    }
}

impl From<Coefficients> for HashMap<i64, Complex> {
    fn from(coefficients: Coefficients) -> Self {
        coefficients.terms
    }
}

/// Left Riemann sum for `c_n = ∫₀¹ f(t)·e^{-i n 2π t} dt` over one period of samples.
///
/// Accumulates in increasing sample order so rounding is reproducible.
/// Returns zero for an empty slice; [`coefficients`] guards that case.
#[must_use]
pub fn coefficient_at(samples: &[Complex], n: i64) -> Complex {
    let len = samples.len() as f64;
    let dt = 1.0 / len;
    samples
        .iter()
        .enumerate()
        .fold(Complex::ZERO, |acc, (k, &value)| {
            let t = k as f64 / len;
            let twiddle = complex_exponential(-(n as f64) * 2.0 * PI * t);
            acc + (value * twiddle).scale(dt)
        })
}

/// Coefficients `c_0, c_{±1}, ..., c_{±B}` with `B = ⌊(K − 1) / 2⌋`.
pub fn coefficients(samples: &[Complex], requested: usize) -> SeriesResult<Coefficients> {
    transform_with(samples, requested, &TransformOptions::default())
}

/// Alias of [`coefficients`] matching the engine's four-call surface.
pub fn transform(samples: &[Complex], requested: usize) -> SeriesResult<Coefficients> {
    coefficients(samples, requested)
}

pub fn transform_with(
    samples: &[Complex],
    requested: usize,
    options: &TransformOptions,
) -> SeriesResult<Coefficients> {
    if samples.is_empty() {
        return Err(SeriesError::InvalidInput {
            detail: "sample sequence must not be empty",
        });
    }
    validate_workers(options.workers)?;
    validate_finite(samples, options)?;

    let bound = harmonic_bound(requested);
    let indices = canonical_order(bound);

    let started = Instant::now();
    let terms = compute_terms(samples, &indices, options.workers);
    let output = Coefficients { terms };

    record_trace(SeriesTrace {
        operation_id: next_operation_id(),
        operation: SeriesOperation::Transform,
        input_len: samples.len(),
        output_len: output.len(),
        harmonic_bound: bound,
        mode: options.mode,
        workers: options.workers,
        timing_ns: started.elapsed().as_nanos(),
    });

    Ok(output)
}

#[cfg(feature = "parallel")]
fn compute_terms(
    samples: &[Complex],
    indices: &[i64],
    workers: WorkerPolicy,
) -> HashMap<i64, Complex> {
    use rayon::prelude::*;

    if workers.is_serial() {
        return compute_terms_serial(samples, indices);
    }
    indices
        .par_iter()
        .map(|&n| (n, coefficient_at(samples, n)))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn compute_terms(
    samples: &[Complex],
    indices: &[i64],
    _workers: WorkerPolicy,
) -> HashMap<i64, Complex> {
    compute_terms_serial(samples, indices)
}

fn compute_terms_serial(samples: &[Complex], indices: &[i64]) -> HashMap<i64, Complex> {
    indices
        .iter()
        .map(|&n| (n, coefficient_at(samples, n)))
        .collect()
}

fn validate_workers(policy: WorkerPolicy) -> SeriesResult<()> {
    match policy {
        WorkerPolicy::Auto => Ok(()),
        WorkerPolicy::Exact(0) | WorkerPolicy::Max(0) => {
            Err(SeriesError::InvalidWorkers { requested: 0 })
        }
        WorkerPolicy::Exact(_) | WorkerPolicy::Max(_) => Ok(()),
    }
}

fn validate_finite(samples: &[Complex], options: &TransformOptions) -> SeriesResult<()> {
    let should_check = options.check_finite || options.mode.rejects_non_finite();
    if !should_check {
        return Ok(());
    }
    match samples.iter().position(|value| !value.is_finite()) {
        Some(index) => Err(SeriesError::NonFiniteInput { index }),
        None => Ok(()),
    }
}
