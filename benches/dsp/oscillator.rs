//! Benchmarks for waveform generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_mono::dsp::{Waveform, WaveformGenerator};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let times: Vec<f32> = (0..size).map(|i| i as f32 / SAMPLE_RATE).collect();
        let mut out = vec![0.0f32; size];

        for waveform in Waveform::ALL {
            let mut generator = WaveformGenerator::new(SAMPLE_RATE);
            group.bench_with_input(
                BenchmarkId::new(waveform.name().to_lowercase(), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        generator.generate(
                            black_box(&times),
                            black_box(440.0),
                            waveform.index(),
                            black_box(&mut out),
                        );
                    })
                },
            );
        }
    }

    group.finish();
}
