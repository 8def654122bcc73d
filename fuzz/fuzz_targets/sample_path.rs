#![no_main]

use arbitrary::Arbitrary;
use fsv_series::{Point, RuntimeMode, sample_with};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SamplePathInput {
    coords: Vec<(f64, f64)>,
    count: u16,
    hardened: bool,
}

fuzz_target!(|input: SamplePathInput| {
    let path = input
        .coords
        .iter()
        .map(|&(x, y)| Point::new(x, y))
        .collect::<Vec<_>>();
    let mode = if input.hardened {
        RuntimeMode::Hardened
    } else {
        RuntimeMode::Strict
    };
    if let Ok(samples) = sample_with(&path, usize::from(input.count), mode) {
        let count = usize::from(input.count).max(1);
        if samples.is_empty() || samples.len() > count.min(path.len()) {
            panic!("sample length out of bounds");
        }
    }
});
