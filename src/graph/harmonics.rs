use crate::graph::node::{finite_or, GraphNode, RenderCtx};
use std::f32::consts::TAU;

/*
Harmonic Enrichment
===================

Adds a fixed stack of sine overtones on top of whatever the oscillator
produced, scaled by a single `level` knob:

  partial   frequency   weight
  -------   ---------   ------
  2nd       2f          0.50
  3rd       3f          0.33
  4th       4f          0.25
  5th       5f          0.20
  6th       6f          0.17

  out[i] = in[i] + level · Σ weight_k · sin(2π · k·f · t)

The partials are summed straight in with no rescaling. The engine's final
peak normalization brings the level back down.

Time here is block-local (t = i / sample_rate), so every block starts the
overtone stack at phase 0.
*/

const PARTIALS: [(f32, f32); 5] = [(2.0, 0.5), (3.0, 0.33), (4.0, 0.25), (5.0, 0.2), (6.0, 0.17)];

pub struct HarmonicsNode {
    level: f32,
}

impl HarmonicsNode {
    pub fn new(level: f32) -> Self {
        Self {
            level: finite_or(level, 0.0),
        }
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn set_level(&mut self, level: f32) {
        self.level = finite_or(level, 0.0);
    }
}

impl GraphNode for HarmonicsNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        if self.is_bypassed() {
            return;
        }

        let base = TAU * ctx.frequency;
        for (i, sample) in out.iter_mut().enumerate() {
            let t = ctx.local_time(i);
            let overtones: f32 = PARTIALS
                .iter()
                .map(|&(multiple, weight)| weight * (base * multiple * t).sin())
                .sum();
            *sample += self.level * overtones;
        }
    }

    fn is_bypassed(&self) -> bool {
        self.level <= 0.0
    }
}
