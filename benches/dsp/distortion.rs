//! Benchmarks for the waveshaping curve at each of its regimes.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_mono::dsp::distortion::shape_buffer;

use crate::BLOCK_SIZES;

pub fn bench_distortion(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/distortion");

    // saturation only, + wavefold, + sqrt enhancer
    let amounts: &[(&str, f32)] = &[("saturate", 0.2), ("fold", 0.4), ("full", 0.9)];

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size).map(|i| (i as f32 * 0.05).sin()).collect();
        let mut buffer = input.clone();

        for &(name, amount) in amounts {
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    buffer.copy_from_slice(&input);
                    shape_buffer(black_box(&mut buffer), black_box(amount));
                })
            });
        }
    }

    group.finish();
}
