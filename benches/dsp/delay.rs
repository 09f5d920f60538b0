//! Benchmarks for delay line operations.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_mono::dsp::delay::DelayLine;

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_delay(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/delay");

    // Look-backs used by the stages, in samples at 44.1 kHz
    let offsets: &[(&str, usize)] = &[
        ("chorus_7ms", 309),
        ("reverb_43ms", 1896),
        ("delay_300ms", 13_230),
    ];

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size).map(|i| (i as f32 * 0.1).sin()).collect();

        for &(name, offset) in offsets {
            let mut line = DelayLine::with_seconds(1.0, SAMPLE_RATE);
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    let mut sum = 0.0f32;
                    for &sample in &input {
                        sum += line.read(black_box(offset));
                        line.write(sample);
                    }
                    sum
                })
            });
        }
    }

    group.finish();
}
