#![no_main]

use arbitrary::Arbitrary;
use fsv_series::{Complex, SeriesError};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct DivideInput {
    lhs: (f64, f64),
    rhs: (f64, f64),
}

fuzz_target!(|input: DivideInput| {
    let lhs = Complex::from(input.lhs);
    let rhs = Complex::from(input.rhs);
    let is_zero = rhs.re == 0.0 && rhs.im == 0.0;
    match lhs.divide(rhs) {
        Err(SeriesError::DivisionByZero { .. }) if is_zero => {}
        Ok(_) if !is_zero => {}
        other => panic!("unexpected division outcome {other:?}"),
    }
});
