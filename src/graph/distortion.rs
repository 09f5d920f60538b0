use crate::dsp::distortion::shape_buffer;
use crate::graph::node::{finite_or, GraphNode, RenderCtx};

/*
Distortion Node
===============

One-knob "wub" distortion. Turning `amount` up from 0 to 1 adds
saturation first, then wavefolding past 0.3, then a square-root enhancer
past 0.5. A shrinking amount of dry signal (15% at the bottom of the
knob, none at the top) is blended back in to keep low settings from
sounding thin.

See `dsp/distortion.rs` for the curve itself.

Parameters
----------

Amount (0.0 - 1.0):
  0.0       bypass
  0.1-0.3   warm saturation
  0.4-0.6   folding, growly
  0.7-1.0   aggressive, buzzy
*/

/// Waveshaping distortion effect
pub struct DistortionNode {
    amount: f32,
}

impl DistortionNode {
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
}

impl GraphNode for DistortionNode {
    fn render_block(&mut self, out: &mut [f32], _ctx: &RenderCtx) {
        if self.is_bypassed() {
            return;
        }
        shape_buffer(out, self.amount);
    }

    fn is_bypassed(&self) -> bool {
        self.amount <= 0.0
    }
}
