#![forbid(unsafe_code)]

//! Truncated complex Fourier series of closed planar curves.
//!
//! A raw path is reduced to one period of samples, transformed into
//! coefficients `c_n` by a direct left Riemann sum, and reconstructed at any
//! time `t` as the sum of rotating vectors `c_n·e^{i n 2π t}`.
//!
//! ## Module layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | `complex`   | [`Complex`] value type, [`complex_exponential`]              |
//! | `sampler`   | [`Point`], [`sample`] index-stride resampling                |
//! | `transform` | [`coefficient_at`], [`coefficients`], [`Coefficients`]       |
//! | `ordering`  | canonical index order `0, 1, -1, 2, -2, ...`                 |
//! | `evaluator` | [`evaluate`], [`partial_sums`], [`epicycles`]                |
//! | `series`    | [`FourierSeries`] snapshot built from a [`SeriesConfig`]     |
//! | `trail`     | [`Trail`] bounded history of reconstructed points            |
//! | `trace`     | [`SeriesTrace`] structured call log                          |
//!
//! The `parallel` feature fans coefficient indices out over rayon; its
//! agreement with the serial path is tested with
//! `cargo test -p fsv-series --features parallel`.
//!
//! ```rust
//! use fsv_series::{Point, evaluate, sample, transform};
//!
//! let path = [
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//! ];
//! let samples = sample(&path, 4).unwrap();
//! let coeffs = transform(&samples, 3).unwrap();
//! let corner = evaluate(&coeffs, 0.25);
//! assert!((corner.re - 1.0).abs() < 1e-12 && corner.im.abs() < 1e-12);
//! ```

pub mod complex;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod ordering;
pub mod sampler;
pub mod series;
pub mod trace;
pub mod trail;
pub mod transform;

pub use complex::{Complex, complex_exponential};
pub use config::{DEFAULT_MAX_COEFFICIENTS, SeriesConfig};
pub use error::{SeriesError, SeriesResult};
pub use evaluator::{Epicycle, epicycles, evaluate, partial_sums};
pub use fsv_runtime::RuntimeMode;
pub use ordering::{canonical_cmp, canonical_order, canonical_sort, harmonic_bound};
pub use sampler::{Point, sample, sample_count_for_exponent, sample_with};
pub use series::FourierSeries;
pub use trace::{
    SeriesOperation, SeriesTrace, TRACE_LOG_CAPACITY, retained_trace_count, take_series_traces,
};
pub use trail::Trail;
pub use transform::{
    Coefficients, TransformOptions, WorkerPolicy, coefficient_at, coefficients, transform,
    transform_with,
};
