//! Inverse reconstruction of the truncated series at a time `t`.
//!
//! Terms are always taken in canonical order. The total does not depend on
//! that order, but every prefix does, and [`partial_sums`] exposes the prefixes
//! a vector-chain renderer draws.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::complex::{Complex, complex_exponential};
use crate::transform::Coefficients;

/// One rotating vector of the chain at a fixed `t`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Epicycle {
    pub index: i64,
    /// Tail of the vector: the previous partial sum, or the origin.
    pub center: Complex,
    /// Head of the vector: this term's partial sum.
    pub tip: Complex,
    /// `|c_n|`, the radius of the circle the vector sweeps.
    pub radius: f64,
}

fn rotated_terms(
    coefficients: &Coefficients,
    t: f64,
) -> impl Iterator<Item = (i64, Complex)> + '_ {
    coefficients
        .iter_canonical()
        .map(move |(n, c)| (n, c * complex_exponential(n as f64 * 2.0 * PI * t)))
}

/// Approximated curve point at `t`; periodic with period 1.
#[must_use]
pub fn evaluate(coefficients: &Coefficients, t: f64) -> Complex {
    rotated_terms(coefficients, t).fold(Complex::ZERO, |acc, (_, term)| acc + term)
}

/// Running sums of the rotated terms in canonical order.
///
/// The last element equals [`evaluate`] at the same `t`.
#[must_use]
pub fn partial_sums(coefficients: &Coefficients, t: f64) -> Vec<Complex> {
    rotated_terms(coefficients, t)
        .scan(Complex::ZERO, |acc, (_, term)| {
            *acc = *acc + term;
            Some(*acc)
        })
        .collect()
}

#[must_use]
pub fn epicycles(coefficients: &Coefficients, t: f64) -> Vec<Epicycle> {
    let mut center = Complex::ZERO;
    coefficients
        .iter_canonical()
        .zip(partial_sums(coefficients, t))
        .map(|((index, c), tip)| {
            let link = Epicycle {
                index,
                center,
                tip,
                radius: c.abs(),
            };
            center = tip;
            link
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{epicycles, evaluate, partial_sums};
    use crate::complex::Complex;
    use crate::transform::{Coefficients, coefficients};

    fn assert_close_complex(actual: Complex, expected: Complex, tol: f64) {
        assert!(
            (actual.re - expected.re).abs() <= tol && (actual.im - expected.im).abs() <= tol,
            "{actual} !~= {expected}"
        );
    }

    fn square_coefficients() -> Coefficients {
        let samples = vec![
            Complex::new(0.0, 0.0),
            Complex::new(1.0, 0.0),
            Complex::new(1.0, 1.0),
            Complex::new(0.0, 1.0),
        ];
        coefficients(&samples, 4).expect("transform should succeed")
    }

    #[test]
    fn square_reconstructs_its_corners() {
        let coeffs = square_coefficients();
        assert_close_complex(evaluate(&coeffs, 0.0), Complex::new(0.0, 0.0), 1e-12);
        assert_close_complex(evaluate(&coeffs, 0.25), Complex::new(1.0, 0.0), 1e-12);
        assert_close_complex(evaluate(&coeffs, 0.5), Complex::new(1.0, 1.0), 1e-12);
        assert_close_complex(evaluate(&coeffs, 0.75), Complex::new(0.0, 1.0), 1e-12);
    }

    #[test]
    fn evaluate_is_periodic_in_t() {
        let coeffs = square_coefficients();
        for t in [0.1, 0.33, 0.9] {
            assert_close_complex(evaluate(&coeffs, t + 1.0), evaluate(&coeffs, t), 1e-12);
            assert_close_complex(evaluate(&coeffs, t - 3.0), evaluate(&coeffs, t), 1e-12);
        }
    }

    #[test]
    fn last_partial_sum_is_the_evaluated_point() {
        let coeffs = square_coefficients();
        let sums = partial_sums(&coeffs, 0.37);
        assert_eq!(sums.len(), coeffs.len());
        assert_eq!(sums.last().copied(), Some(evaluate(&coeffs, 0.37)));
    }

    #[test]
    fn first_partial_sum_is_the_mean() {
        let coeffs = square_coefficients();
        assert_eq!(partial_sums(&coeffs, 0.8)[0], coeffs.get(0).expect("c_0"));
    }

    #[test]
    fn empty_mapping_evaluates_to_origin() {
        let empty = Coefficients::default();
        assert_eq!(evaluate(&empty, 0.5), Complex::ZERO);
        assert!(partial_sums(&empty, 0.5).is_empty());
        assert!(epicycles(&empty, 0.5).is_empty());
    }

    #[test]
    fn epicycles_chain_head_to_tail() {
        let coeffs = square_coefficients();
        let chain = epicycles(&coeffs, 0.2);
        assert_eq!(chain.iter().map(|link| link.index).collect::<Vec<_>>(), vec![0, 1, -1]);
        assert_eq!(chain[0].center, Complex::ZERO);
        for pair in chain.windows(2) {
            assert_eq!(pair[1].center, pair[0].tip);
        }
        for link in &chain {
            let c = coeffs.get(link.index).expect("indexed coefficient");
            assert!((link.radius - c.abs()).abs() < 1e-15);
            assert!(((link.tip - link.center).abs() - link.radius).abs() < 1e-12);
        }
    }
}
