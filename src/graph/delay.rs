use crate::dsp::delay::DelayLine;
use crate::dsp::mix::blend_dry_wet;
use crate::graph::node::{finite_or, GraphNode, RenderCtx};

/*
Delay Node
==========

Feedback echo over a one-second line.

    delay  = round(time · sample_rate)          (fixed for the whole block)
    d      = line[write - delay]
    out[i] = in[i] · (1 - mix) + d · mix
    write    in[i] + d · 0.4

The 0.4 feedback makes each repeat 8 dB quieter than the one before, so a
single hit trails off over roughly half a dozen echoes.

With mix at 0 the stage is bypassed and the line is left as it was, so
turning the mix back up replays whatever was in flight.

Parameters
----------

Mix (0.0 - 0.8): echo level
Time (0.05 - 1.0 s): echo spacing
*/

/// Delay line length in seconds.
pub const DELAY_BUFFER_SECONDS: f32 = 1.0;

const FEEDBACK: f32 = 0.4;

pub struct DelayNode {
    delay_line: DelayLine,
    mix: f32,
    time: f32, // seconds
}

impl DelayNode {
    pub fn new(sample_rate: f32, mix: f32, time: f32) -> Self {
        Self {
            delay_line: DelayLine::with_seconds(DELAY_BUFFER_SECONDS, sample_rate),
            mix: finite_or(mix, 0.0),
            time: finite_or(time, 0.0),
        }
    }

    pub fn set_mix(&mut self, mix: f32) {
        self.mix = finite_or(mix, 0.0);
    }

    pub fn set_time(&mut self, time: f32) {
        self.time = finite_or(time, 0.0);
    }

    pub fn capacity(&self) -> usize {
        self.delay_line.capacity()
    }

    /// Echo spacing in samples, kept inside the line.
    pub fn delay_samples(&self, sample_rate: f32) -> usize {
        let delay = (self.time * sample_rate).round().max(0.0) as usize;
        self.delay_line.clamp_offset(delay)
    }
}

impl GraphNode for DelayNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        if self.is_bypassed() {
            return;
        }

        let delay = self.delay_samples(ctx.sample_rate);
        for sample in out.iter_mut() {
            let dry = *sample;
            let delayed = self.delay_line.read(delay);
            *sample = blend_dry_wet(dry, delayed, self.mix);
            self.delay_line.write(dry + delayed * FEEDBACK);
        }
    }

    fn is_bypassed(&self) -> bool {
        self.mix <= 0.0
    }

    fn reset(&mut self) {
        self.delay_line.reset();
    }
}
