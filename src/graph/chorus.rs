use crate::dsp::delay::DelayLine;
use crate::dsp::lfo::sine;
use crate::dsp::phase::PhaseAccumulator;
use crate::graph::node::{finite_or, GraphNode, RenderCtx};

/*
Chorus Effect
=============

Chorus thickens a sound by mixing the dry signal with a slightly delayed,
pitch-modulated copy. The modulation creates subtle detuning that makes
one voice sound like several playing together.

How It Works
------------

1. A copy of the input is read back from a short delay line
2. An LFO moves the read point, bending the copy's pitch up and down
3. Dry and delayed signals are summed at fixed weights, 0.6 / 0.4
4. Only the dry input is written back (no feedback)

Delay time:

    lfo   = sin(2π · rate · phase)
    delay = 2 ms + depth · 10 ms · (lfo + 1) / 2

so depth 0 would sit at 2 ms and depth 1 sweeps 2-12 ms. The delay is
rounded to whole samples and kept within the 50 ms line.

The phase is in cycles (advanced by rate / sample_rate) and wraps at 1.0.
When depth is 0 the stage is bypassed and neither the line nor the LFO
moves.

Parameters
----------

Depth (0.0 - 1.0): sweep width
Rate (0.1 - 10 Hz): sweep speed. 0.5-2 Hz shimmer, 5+ Hz wobble.
*/

/// Delay line length in seconds.
pub const CHORUS_BUFFER_SECONDS: f32 = 0.05;

/// Chorus effect - thickens sound with modulated delay
pub struct ChorusNode {
    delay_line: DelayLine,
    lfo_phase: PhaseAccumulator,
    depth: f32,
    rate: f32, // LFO Hz
}

impl ChorusNode {
    pub fn new(sample_rate: f32, depth: f32, rate: f32) -> Self {
        Self {
            delay_line: DelayLine::with_seconds(CHORUS_BUFFER_SECONDS, sample_rate),
            lfo_phase: PhaseAccumulator::new(1.0),
            depth: finite_or(depth, 0.0),
            rate: finite_or(rate, 0.0),
        }
    }

    pub fn set_depth(&mut self, depth: f32) {
        self.depth = finite_or(depth, 0.0);
    }

    pub fn set_rate(&mut self, rate: f32) {
        self.rate = finite_or(rate, 0.0);
    }

    pub fn phase(&self) -> f32 {
        self.lfo_phase.phase()
    }

    pub fn capacity(&self) -> usize {
        self.delay_line.capacity()
    }

    /// Delay in samples for an LFO value in [-1, 1].
    fn delay_samples(&self, lfo: f32, sample_rate: f32) -> usize {
        let delay = 0.002 * sample_rate + self.depth * 0.01 * sample_rate * (lfo + 1.0) / 2.0;
        self.delay_line.clamp_offset(delay.round().max(0.0) as usize)
    }
}

impl GraphNode for ChorusNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        if self.is_bypassed() {
            return;
        }

        let phase_inc = self.rate / ctx.sample_rate;
        for sample in out.iter_mut() {
            let lfo = sine(self.rate, self.lfo_phase.phase());
            let delay_samples = self.delay_samples(lfo, ctx.sample_rate);

            let dry = *sample;
            let delayed = self.delay_line.read(delay_samples);
            *sample = dry * 0.6 + delayed * 0.4;

            self.delay_line.write(dry);
            self.lfo_phase.advance(phase_inc);
        }
    }

    fn is_bypassed(&self) -> bool {
        self.depth <= 0.0
    }

    fn reset(&mut self) {
        self.delay_line.reset();
        self.lfo_phase.reset();
    }
}
