#![no_main]

use arbitrary::Arbitrary;
use fsv_series::{Complex, coefficients, evaluate, harmonic_bound, partial_sums};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct TransformInput {
    values: Vec<(f64, f64)>,
    requested: u8,
    t: f64,
}

fuzz_target!(|input: TransformInput| {
    let samples = input
        .values
        .iter()
        .take(256)
        .map(|&(re, im)| Complex::new(re, im))
        .collect::<Vec<_>>();
    let Ok(coeffs) = coefficients(&samples, usize::from(input.requested)) else {
        return;
    };
    if coeffs.len() != 2 * harmonic_bound(usize::from(input.requested)) + 1 {
        panic!("coefficient count violates the harmonic window");
    }
    let sums = partial_sums(&coeffs, input.t);
    if sums.len() != coeffs.len() {
        panic!("partial sum length mismatch");
    }
    let total = evaluate(&coeffs, input.t);
    let last = sums[sums.len() - 1];
    if total.is_finite() && total != last {
        panic!("evaluate diverged from the last partial sum");
    }
});
