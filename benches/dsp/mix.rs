//! Benchmarks for peak normalization and gain.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_mono::dsp::mix::{apply_gain, normalize_peak};

use crate::BLOCK_SIZES;

pub fn bench_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/mix");

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size).map(|i| (i as f32 * 0.07).sin() * 3.0).collect();
        let mut buffer = input.clone();

        group.bench_with_input(BenchmarkId::new("normalize_and_gain", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                normalize_peak(black_box(&mut buffer));
                apply_gain(black_box(&mut buffer), black_box(0.35));
            })
        });
    }

    group.finish();
}
