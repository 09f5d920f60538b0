use crate::dsp::lfo::{bipolar_to_unipolar, sine};
use crate::dsp::phase::PhaseAccumulator;
use crate::graph::node::{finite_or, GraphNode, RenderCtx};

/*
Phaser
======

A swept feed-forward comb: each sample gets a scaled copy of the sample a
few milliseconds earlier in the same block added to it.

    lfo    = 0.5 + 0.5 · sin(2π · 0.5 · phase)        (once per block)
    delay  = round((2 + 8 · lfo) ms · sample_rate)     (2 - 10 ms)
    out[i] = in[i] + depth · in[i - delay]             (i >= delay)
    out[i] = in[i]                                     (i <  delay)

The comb notches move as the delay sweeps at 0.5 Hz, giving the phasing
"whoosh". The look-back never crosses into the previous block, so the
first `delay` samples of each block pass through untouched.

The phase is seconds, advanced by block_len / sample_rate after the LFO is
read. It is frozen while depth is 0.

Parameters
----------

Depth (0.0 - 1.0): level of the delayed copy
*/

const LFO_RATE: f32 = 0.5;

pub struct PhaserNode {
    depth: f32,
    phase: PhaseAccumulator,
}

impl PhaserNode {
    pub fn new(depth: f32) -> Self {
        Self {
            depth: finite_or(depth, 0.0),
            // sin(2π · 0.5 · phase) repeats every 2 seconds
            phase: PhaseAccumulator::new(1.0 / LFO_RATE),
        }
    }

    pub fn set_depth(&mut self, depth: f32) {
        self.depth = finite_or(depth, 0.0);
    }

    /// LFO phase in seconds.
    pub fn phase(&self) -> f32 {
        self.phase.phase()
    }

    /// Comb delay in samples for the current phase.
    pub fn delay_samples(&self, sample_rate: f32) -> usize {
        let lfo = bipolar_to_unipolar(sine(LFO_RATE, self.phase.phase()));
        ((2.0 + lfo * 8.0) * 0.001 * sample_rate).round() as usize
    }
}

impl GraphNode for PhaserNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        if self.is_bypassed() {
            return;
        }

        let delay = self.delay_samples(ctx.sample_rate);
        // Walk backwards so in[i - delay] is still the unmodified input
        for i in (delay..out.len()).rev() {
            out[i] += self.depth * out[i - delay];
        }

        self.phase.advance(out.len() as f32 / ctx.sample_rate);
    }

    fn is_bypassed(&self) -> bool {
        self.depth <= 0.0
    }

    fn reset(&mut self) {
        self.phase.reset();
    }
}
