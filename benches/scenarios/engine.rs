//! Benchmarks for complete engine blocks.
//!
//! These run the same path as the audio callback: snapshot, smoothing,
//! generation, the chain, and normalization.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion};
use saavy_mono::dsp::Waveform;
use saavy_mono::{AudioEngine, BlockStream, EngineConfig, ParamId, ParameterStore};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

fn dry_store() -> Arc<ParameterStore> {
    let store = ParameterStore::new();
    store.set(ParamId::Harmonics, 0.0);
    store.set(ParamId::BitDepth, 16.0);
    Arc::new(store)
}

fn full_rack_store() -> Arc<ParameterStore> {
    let store = ParameterStore::new();
    for (id, value) in [
        (ParamId::Distortion, 0.7),
        (ParamId::ChorusDepth, 0.6),
        (ParamId::BitDepth, 8.0),
        (ParamId::FilterCutoff, 0.4),
        (ParamId::ReverbLevel, 0.5),
        (ParamId::DelayMix, 0.4),
        (ParamId::RingMod, 2.0),
        (ParamId::TremoloDepth, 0.5),
        (ParamId::PhaserDepth, 0.5),
    ] {
        store.set(id, value);
    }
    store.set_waveform(Waveform::Sawtooth.index().into());
    Arc::new(store)
}

pub fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/engine");

    for &size in BLOCK_SIZES {
        let config = EngineConfig::new(SAMPLE_RATE, size);
        let mut block = vec![0.0f32; size];

        // === BASELINE ===
        // plain sine, every stage bypassed
        let mut engine = AudioEngine::new(config, dry_store());
        group.bench_with_input(BenchmarkId::new("dry_sine", size), &size, |b, _| {
            b.iter(|| engine.process_block(black_box(&mut block)))
        });

        // === DEFAULTS ===
        // what the synth sounds like at startup (harmonics + 12-bit crush)
        let mut engine = AudioEngine::new(config, Arc::new(ParameterStore::new()));
        group.bench_with_input(BenchmarkId::new("defaults", size), &size, |b, _| {
            b.iter(|| engine.process_block(black_box(&mut block)))
        });

        // === FULL RACK ===
        let mut engine = AudioEngine::new(config, full_rack_store());
        group.bench_with_input(BenchmarkId::new("full_rack", size), &size, |b, _| {
            b.iter(|| engine.process_block(black_box(&mut block)))
        });

        // === DEVICE CALLBACK ===
        // stereo, in a callback size that does not line up with the block
        let mut stream = BlockStream::new(AudioEngine::new(config, full_rack_store()));
        let mut device = vec![0.0f32; 441 * 2];
        group.bench_with_input(BenchmarkId::new("stream_441x2", size), &size, |b, _| {
            b.iter(|| stream.fill(black_box(&mut device), 2))
        });
    }

    group.finish();
}
