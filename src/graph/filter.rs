use crate::dsp::filter::one_pole_lowpass;
use crate::graph::node::{GraphNode, RenderCtx};

/*
Filter Node
===========

Last stage of the chain: a one-pole low-pass driven by the smoothed
cutoff coefficient (joystick Y or the cutoff keys).

    cutoff >= 1.0   bypass
    cutoff <  1.0   y[n] = c · x[n] + (1 - c) · y[n-1]

Each block restarts the recursion from its own first sample. See
`dsp/filter.rs`.
*/

pub struct FilterNode {
    cutoff: f32,
}

impl FilterNode {
    pub fn new(cutoff: f32) -> Self {
        let mut node = Self { cutoff: 1.0 };
        node.set_cutoff(cutoff);
        node
    }

    pub fn cutoff(&self) -> f32 {
        self.cutoff
    }

    /// Clamped to [0, 1]; NaN opens the filter fully.
    pub fn set_cutoff(&mut self, cutoff: f32) {
        self.cutoff = if cutoff.is_nan() { 1.0 } else { cutoff.clamp(0.0, 1.0) };
    }
}

impl GraphNode for FilterNode {
    fn render_block(&mut self, out: &mut [f32], _ctx: &RenderCtx) {
        if self.is_bypassed() {
            return;
        }
        one_pole_lowpass(out, self.cutoff);
    }

    fn is_bypassed(&self) -> bool {
        self.cutoff >= 1.0
    }
}
