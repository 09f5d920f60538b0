//! Benchmarks for the effect stages, alone and chained.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_mono::graph::{
    bit_crush::BitCrushNode, chorus::ChorusNode, delay::DelayNode, distortion::DistortionNode,
    filter::FilterNode, harmonics::HarmonicsNode, phaser::PhaserNode, reverb::ReverbNode,
    ring_mod::RingModNode, tremolo::TremoloNode, EffectChain, GraphNode, RenderCtx,
};
use saavy_mono::ParamSnapshot;

use crate::{BLOCK_SIZES, SAMPLE_RATE};

fn bench_node<N: GraphNode>(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    name: &str,
    mut node: N,
    input: &[f32],
    ctx: &RenderCtx,
) {
    let mut buffer = input.to_vec();
    group.bench_with_input(BenchmarkId::new(name, input.len()), &input.len(), |b, _| {
        b.iter(|| {
            buffer.copy_from_slice(input);
            node.render_block(black_box(&mut buffer), black_box(ctx));
        })
    });
}

pub fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/stages");
    let ctx = RenderCtx::new(SAMPLE_RATE, 220.0);

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size)
            .map(|i| (std::f32::consts::TAU * 220.0 * i as f32 / SAMPLE_RATE).sin())
            .collect();

        bench_node(&mut group, "harmonics", HarmonicsNode::new(0.5), &input, &ctx);
        bench_node(&mut group, "ring_mod", RingModNode::new(2.0), &input, &ctx);
        bench_node(&mut group, "distortion", DistortionNode::new(0.7), &input, &ctx);
        bench_node(&mut group, "tremolo", TremoloNode::new(0.5, 6.0), &input, &ctx);
        bench_node(&mut group, "phaser", PhaserNode::new(0.5), &input, &ctx);
        bench_node(&mut group, "chorus", ChorusNode::new(SAMPLE_RATE, 0.6, 1.5), &input, &ctx);
        bench_node(&mut group, "delay", DelayNode::new(SAMPLE_RATE, 0.4, 0.3), &input, &ctx);
        bench_node(&mut group, "reverb", ReverbNode::new(SAMPLE_RATE, 0.5), &input, &ctx);
        bench_node(&mut group, "bit_crush", BitCrushNode::new(8.0), &input, &ctx);
        bench_node(&mut group, "filter", FilterNode::new(0.4), &input, &ctx);

        // === FULL RACK ===
        // every stage doing work at once: the worst case per block
        let params = ParamSnapshot {
            harmonics: 0.5,
            ring_mod: 2.0,
            distortion: 0.7,
            tremolo_depth: 0.5,
            phaser_depth: 0.5,
            chorus_depth: 0.6,
            delay_mix: 0.4,
            reverb_level: 0.5,
            bit_depth: 8.0,
            ..ParamSnapshot::default()
        };
        let mut chain = EffectChain::new(SAMPLE_RATE, &params);
        chain.update(&params, 0.4);
        bench_node(&mut group, "full_chain", chain, &input, &ctx);
    }

    group.finish();
}
