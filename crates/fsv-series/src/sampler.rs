//! Reduces a raw user path to a periodic sample sequence by index selection.

use std::time::Instant;

use fsv_runtime::RuntimeMode;
use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::error::{SeriesError, SeriesResult};
use crate::trace::{SeriesOperation, SeriesTrace, next_operation_id, record_trace};
use crate::transform::WorkerPolicy;

/// A captured path coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Point> for Complex {
    fn from(point: Point) -> Self {
        Complex::new(point.x, point.y)
    }
}

impl From<Complex> for Point {
    fn from(value: Complex) -> Self {
        Point::new(value.re, value.im)
    }
}

/// Sample count for a density exponent, `⌊10^exponent⌋`.
#[must_use]
pub fn sample_count_for_exponent(exponent: f64) -> usize {
    10f64.powf(exponent).floor() as usize
}

/// Picks at most `count` points of `path`, equally spaced by index.
///
/// Paths no longer than `count` are returned whole. A `count` of 0 is
/// treated as 1.
pub fn sample(path: &[Point], count: usize) -> SeriesResult<Vec<Complex>> {
    sample_with(path, count, RuntimeMode::Strict)
}

/// [`sample`] with an explicit runtime mode; Hardened rejects non-finite points.
pub fn sample_with(
    path: &[Point],
    count: usize,
    mode: RuntimeMode,
) -> SeriesResult<Vec<Complex>> {
    if path.is_empty() {
        return Err(SeriesError::InvalidInput {
            detail: "path must contain at least one point",
        });
    }
    if mode.rejects_non_finite()
        && let Some(index) = path
            .iter()
            .position(|point| !point.x.is_finite() || !point.y.is_finite())
    {
        return Err(SeriesError::NonFiniteInput { index });
    }

    let started = Instant::now();
    let samples = select_indices(path.len(), count.max(1))
        .into_iter()
        .map(|index| Complex::from(path[index]))
        .collect::<Vec<_>>();

    record_trace(SeriesTrace {
        operation_id: next_operation_id(),
        operation: SeriesOperation::Sample,
        input_len: path.len(),
        output_len: samples.len(),
        harmonic_bound: 0,
        mode,
        workers: WorkerPolicy::Exact(1),
        timing_ns: started.elapsed().as_nanos(),
    });

    Ok(samples)
}

fn select_indices(len: usize, count: usize) -> Vec<usize> {
    if len <= count {
        return (0..len).collect();
    }
    if count == 1 {
        return vec![0];
    }

    let step = len as f64 / (count - 1) as f64;
    let mut indices = Vec::with_capacity(count);
    for i in 0..count {
        let index = (i as f64 * step) as usize;
        // the last stride lands on `len` unless rounding pulls it back
        if index >= len {
            break;
        }
        indices.push(index);
    }
    indices
}

#[cfg(test)]
mod tests {
    use fsv_runtime::RuntimeMode;

    use super::{Point, sample, sample_count_for_exponent, sample_with, select_indices};
    use crate::complex::Complex;
    use crate::error::SeriesError;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    }

    #[test]
    fn empty_path_is_invalid() {
        let err = sample(&[], 10).expect_err("empty path must fail");
        assert!(matches!(err, SeriesError::InvalidInput { .. }));
    }

    #[test]
    fn short_path_passes_through_unchanged() {
        let samples = sample(&square(), 1000).expect("sampling should succeed");
        assert_eq!(
            samples,
            vec![
                Complex::new(0.0, 0.0),
                Complex::new(1.0, 0.0),
                Complex::new(1.0, 1.0),
                Complex::new(0.0, 1.0),
            ]
        );
    }

    #[test]
    fn equal_count_keeps_every_point() {
        assert_eq!(sample(&square(), 4).expect("sampling should succeed").len(), 4);
    }

    #[test]
    fn single_sample_takes_first_point() {
        let path = (0..10).map(|i| Point::new(i as f64, -(i as f64))).collect::<Vec<_>>();
        assert_eq!(
            sample(&path, 1).expect("sampling should succeed"),
            vec![Complex::new(0.0, -0.0)]
        );
        assert_eq!(sample(&path, 0).expect("zero clamps to one").len(), 1);
    }

    #[test]
    fn long_path_is_strided_and_drops_overshoot() {
        assert_eq!(select_indices(8, 3), vec![0, 4]);
        assert_eq!(select_indices(9, 4), vec![0, 3, 6]);
        let path = (0..8).map(|i| Point::new(i as f64, 0.0)).collect::<Vec<_>>();
        assert_eq!(
            sample(&path, 3).expect("sampling should succeed"),
            vec![Complex::new(0.0, 0.0), Complex::new(4.0, 0.0)]
        );
    }

    #[test]
    fn selected_indices_are_strictly_increasing() {
        for (len, count) in [(1000, 7), (12345, 100), (101, 100), (3, 2)] {
            let indices = select_indices(len, count);
            assert!(indices.len() <= count);
            assert_eq!(indices[0], 0);
            assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
            assert!(indices.iter().all(|&index| index < len));
        }
    }

    #[test]
    fn hardened_mode_rejects_non_finite_points() {
        let mut path = square();
        path[2] = Point::new(f64::NAN, 1.0);
        let err = sample_with(&path, 10, RuntimeMode::Hardened)
            .expect_err("hardened mode should reject NaN");
        assert_eq!(err, SeriesError::NonFiniteInput { index: 2 });
        assert!(sample_with(&path, 10, RuntimeMode::Strict).is_ok());
    }

    #[test]
    fn density_exponent_maps_to_power_of_ten() {
        assert_eq!(sample_count_for_exponent(2.0), 100);
        assert_eq!(sample_count_for_exponent(3.0), 1000);
        assert_eq!(sample_count_for_exponent(6.0), 1_000_000);
    }

    #[test]
    fn points_and_complex_values_convert_both_ways() {
        let point = Point::new(2.0, -3.5);
        let value = Complex::from(point);
        assert_eq!(value, Complex::new(2.0, -3.5));
        assert_eq!(Point::from(value), point);
    }
}
