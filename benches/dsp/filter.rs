//! Benchmarks for the one-pole low-pass.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_mono::dsp::filter::one_pole_lowpass;

use crate::BLOCK_SIZES;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let mut buffer = input.clone();

        group.bench_with_input(BenchmarkId::new("one_pole", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                one_pole_lowpass(black_box(&mut buffer), black_box(0.3));
            })
        });
    }

    group.finish();
}
