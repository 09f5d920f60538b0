use crate::dsp::delay::DelayLine;
use crate::graph::node::{finite_or, GraphNode, RenderCtx};

/*
Reverb Node
===========

A small multi-tap comb reverb. One half-second line is shared by four
taps at 29, 37, 41 and 43 ms. The tap times have no common factor, so
the echoes they feed back smear into each other instead of ringing at a
single pitch.

    sum    = 0.25 · (line[w - t1] + line[w - t2] + line[w - t3] + line[w - t4])
    out[i] = in[i] + sum · level
    write    in[i] + sum · 0.5

The tap offsets are truncated to whole samples: at 44.1 kHz they are
1278, 1631, 1808 and 1896.

With level at 0 the stage is bypassed and the line is left as it was.

Parameters
----------

Level (0.0 - 1.0): wet amount added on top of the dry signal
*/

/// Reverb line length in seconds.
pub const REVERB_BUFFER_SECONDS: f32 = 0.5;

/// Comb tap times in milliseconds.
pub const TAP_TIMES_MS: [f32; 4] = [29.0, 37.0, 41.0, 43.0];

const TAP_WEIGHT: f32 = 0.25;
const FEEDBACK: f32 = 0.5;

pub struct ReverbNode {
    delay_line: DelayLine,
    taps: [usize; 4],
    level: f32,
}

impl ReverbNode {
    pub fn new(sample_rate: f32, level: f32) -> Self {
        let delay_line = DelayLine::with_seconds(REVERB_BUFFER_SECONDS, sample_rate);
        let taps = TAP_TIMES_MS
            .map(|ms| delay_line.clamp_offset((ms * sample_rate / 1000.0).max(0.0) as usize));
        Self {
            delay_line,
            taps,
            level: finite_or(level, 0.0),
        }
    }

    pub fn set_level(&mut self, level: f32) {
        self.level = finite_or(level, 0.0);
    }

    pub fn tap_offsets(&self) -> [usize; 4] {
        self.taps
    }

    pub fn capacity(&self) -> usize {
        self.delay_line.capacity()
    }
}

impl GraphNode for ReverbNode {
    fn render_block(&mut self, out: &mut [f32], _ctx: &RenderCtx) {
        if self.is_bypassed() {
            return;
        }

        for sample in out.iter_mut() {
            let sum: f32 = self
                .taps
                .iter()
                .map(|&tap| self.delay_line.read(tap) * TAP_WEIGHT)
                .sum();
            let dry = *sample;
            *sample = dry + sum * self.level;
            self.delay_line.write(dry + sum * FEEDBACK);
        }
    }

    fn is_bypassed(&self) -> bool {
        self.level <= 0.0
    }

    fn reset(&mut self) {
        self.delay_line.reset();
    }
}
