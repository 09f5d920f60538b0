use crate::graph::node::{finite_or, GraphNode, RenderCtx};
use std::f32::consts::TAU;

/*
Ring Modulator
==============

Multiplies the signal by a sine carrier. Multiplying two sines produces
their sum and difference frequencies, which is where the metallic,
bell-like character comes from.

The carrier here is not an independent oscillator: it tracks the voice,
offset upward by the knob value scaled ×100:

    carrier = f + amount · 100      (amount 0 - 10  ->  +0 Hz to +1000 Hz)
    out[i]  = in[i] · sin(2π · carrier · t)

At small amounts this yields slow beating against the fundamental; at
large amounts, inharmonic clang.

Like the harmonics stage, t restarts at 0 every block.
*/

pub struct RingModNode {
    amount: f32,
}

impl RingModNode {
    pub fn new(amount: f32) -> Self {
        Self {
            amount: finite_or(amount, 0.0),
        }
    }

    pub fn amount(&self) -> f32 {
        self.amount
    }

    pub fn set_amount(&mut self, amount: f32) {
        self.amount = finite_or(amount, 0.0);
    }

    /// Carrier frequency for a voice at `frequency` Hz.
    pub fn carrier_frequency(&self, frequency: f32) -> f32 {
        frequency + self.amount * 100.0
    }
}

impl GraphNode for RingModNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        if self.is_bypassed() {
            return;
        }

        let omega = TAU * self.carrier_frequency(ctx.frequency);
        for (i, sample) in out.iter_mut().enumerate() {
            *sample *= (omega * ctx.local_time(i)).sin();
        }
    }

    fn is_bypassed(&self) -> bool {
        self.amount <= 0.0
    }
}
