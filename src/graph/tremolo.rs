use crate::dsp::lfo::{bipolar_to_unipolar, sine};
use crate::dsp::phase::PhaseAccumulator;
use crate::graph::node::{finite_or, GraphNode, RenderCtx};

/*
Tremolo
=======

Amplitude modulation by a sine LFO:

    gain[i] = 1 - depth · (0.5 + 0.5 · sin(2π · rate · phase))
    out[i]  = in[i] · gain[i]

At depth 1.0 the gain sweeps all the way from 1.0 down to silence; at 0.5
it dips to half volume.

The phase is time in seconds, advanced by 1 / sample_rate per sample and
wrapped at 1.0. For rates that are not whole numbers of Hz that wrap cuts
the sweep short once a second, which is part of this tremolo's character.

While depth is 0 the stage is bypassed and the phase does not move.

Parameters
----------

Depth (0.0 - 1.0):  how far the gain dips
Rate (0.5 - 20 Hz): sweep speed; 4-7 Hz classic, 10+ Hz "helicopter"
*/

pub struct TremoloNode {
    depth: f32,
    rate: f32,
    phase: PhaseAccumulator,
}

impl TremoloNode {
    pub fn new(depth: f32, rate: f32) -> Self {
        Self {
            depth: finite_or(depth, 0.0),
            rate: finite_or(rate, 0.0),
            phase: PhaseAccumulator::new(1.0),
        }
    }

    pub fn set_depth(&mut self, depth: f32) {
        self.depth = finite_or(depth, 0.0);
    }

    pub fn set_rate(&mut self, rate: f32) {
        self.rate = finite_or(rate, 0.0);
    }

    /// LFO phase in seconds.
    pub fn phase(&self) -> f32 {
        self.phase.phase()
    }
}

impl GraphNode for TremoloNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        if self.is_bypassed() {
            return;
        }

        let step = 1.0 / ctx.sample_rate;
        for sample in out.iter_mut() {
            let lfo = bipolar_to_unipolar(sine(self.rate, self.phase.phase()));
            *sample *= 1.0 - self.depth * lfo;
            self.phase.advance(step);
        }
    }

    fn is_bypassed(&self) -> bool {
        self.depth <= 0.0
    }

    fn reset(&mut self) {
        self.phase.reset();
    }
}
