use crate::graph::node::{GraphNode, RenderCtx};

/*
Bit Crusher
===========

Quantizes every sample onto a grid of 2^bits steps per unit:

    levels = 2^bits
    out[i] = round(in[i] · levels) / levels

Halfway values round to the even step so the grid stays symmetric around
zero. At 16 bits or more the stage is an identity; lower settings add the
gritty stair-step of early samplers, and 4 bits is outright lo-fi.

Parameters
----------

Bits (4 - 16): whole steps only, fractional values round to the nearest
*/

/// At or above this depth the crusher passes audio through untouched.
pub const TRANSPARENT_BITS: u32 = 16;

pub struct BitCrushNode {
    bits: u32,
}

impl BitCrushNode {
    pub fn new(bits: f32) -> Self {
        let mut node = Self {
            bits: TRANSPARENT_BITS,
        };
        node.set_bits(bits);
        node
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Non-finite depths leave the crusher transparent.
    pub fn set_bits(&mut self, bits: f32) {
        self.bits = if bits.is_finite() {
            bits.round().clamp(0.0, TRANSPARENT_BITS as f32) as u32
        } else {
            TRANSPARENT_BITS
        };
    }
}

impl GraphNode for BitCrushNode {
    fn render_block(&mut self, out: &mut [f32], _ctx: &RenderCtx) {
        if self.is_bypassed() {
            return;
        }

        let levels = (1u32 << self.bits) as f32;
        for sample in out.iter_mut() {
            *sample = (*sample * levels).round_ties_even() / levels;
        }
    }

    fn is_bypassed(&self) -> bool {
        self.bits >= TRANSPARENT_BITS
    }
}
