use crate::graph::bit_crush::BitCrushNode;
use crate::graph::chorus::ChorusNode;
use crate::graph::delay::DelayNode;
use crate::graph::distortion::DistortionNode;
use crate::graph::filter::FilterNode;
use crate::graph::harmonics::HarmonicsNode;
use crate::graph::node::{GraphNode, RenderCtx};
use crate::graph::phaser::PhaserNode;
use crate::graph::reverb::ReverbNode;
use crate::graph::ring_mod::RingModNode;
use crate::graph::tremolo::TremoloNode;
use crate::params::ParamSnapshot;

/*
Effect Chain
============

The ten stages in their fixed order:

  harmonics -> ring mod -> distortion -> tremolo -> phaser
            -> chorus -> delay -> reverb -> bit crush -> filter

Each stage owns its buffers and LFO phase. The chain owns the stages, and
the engine owns the chain, so all of that state lives on the audio thread.

Settings are pushed in once per block with `update`; the filter takes the
engine's smoothed cutoff rather than the raw target.
*/

pub struct EffectChain {
    harmonics: HarmonicsNode,
    ring_mod: RingModNode,
    distortion: DistortionNode,
    tremolo: TremoloNode,
    phaser: PhaserNode,
    chorus: ChorusNode,
    delay: DelayNode,
    reverb: ReverbNode,
    bit_crush: BitCrushNode,
    filter: FilterNode,
}

impl EffectChain {
    /// Build every stage and allocate its buffers for `sample_rate`.
    pub fn new(sample_rate: f32, params: &ParamSnapshot) -> Self {
        Self {
            harmonics: HarmonicsNode::new(params.harmonics),
            ring_mod: RingModNode::new(params.ring_mod),
            distortion: DistortionNode::new(params.distortion),
            tremolo: TremoloNode::new(params.tremolo_depth, params.tremolo_rate),
            phaser: PhaserNode::new(params.phaser_depth),
            chorus: ChorusNode::new(sample_rate, params.chorus_depth, params.chorus_rate),
            delay: DelayNode::new(sample_rate, params.delay_mix, params.delay_time),
            reverb: ReverbNode::new(sample_rate, params.reverb_level),
            bit_crush: BitCrushNode::new(params.bit_depth),
            filter: FilterNode::new(params.filter_cutoff),
        }
    }

    pub fn update(&mut self, params: &ParamSnapshot, filter_cutoff: f32) {
        self.harmonics.set_level(params.harmonics);
        self.ring_mod.set_amount(params.ring_mod);
        self.distortion.set_amount(params.distortion);
        self.tremolo.set_depth(params.tremolo_depth);
        self.tremolo.set_rate(params.tremolo_rate);
        self.phaser.set_depth(params.phaser_depth);
        self.chorus.set_depth(params.chorus_depth);
        self.chorus.set_rate(params.chorus_rate);
        self.delay.set_mix(params.delay_mix);
        self.delay.set_time(params.delay_time);
        self.reverb.set_level(params.reverb_level);
        self.bit_crush.set_bits(params.bit_depth);
        self.filter.set_cutoff(filter_cutoff);
    }

    fn stages_mut(&mut self) -> [&mut dyn GraphNode; 10] {
        [
            &mut self.harmonics,
            &mut self.ring_mod,
            &mut self.distortion,
            &mut self.tremolo,
            &mut self.phaser,
            &mut self.chorus,
            &mut self.delay,
            &mut self.reverb,
            &mut self.bit_crush,
            &mut self.filter,
        ]
    }

    fn stages(&self) -> [&dyn GraphNode; 10] {
        [
            &self.harmonics,
            &self.ring_mod,
            &self.distortion,
            &self.tremolo,
            &self.phaser,
            &self.chorus,
            &self.delay,
            &self.reverb,
            &self.bit_crush,
            &self.filter,
        ]
    }

    /// Number of stages currently doing work.
    pub fn active_stages(&self) -> usize {
        self.stages().iter().filter(|stage| !stage.is_bypassed()).count()
    }
}

impl GraphNode for EffectChain {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        for stage in self.stages_mut() {
            stage.render_block(out, ctx);
        }
    }

    fn is_bypassed(&self) -> bool {
        self.active_stages() == 0
    }

    fn reset(&mut self) {
        for stage in self.stages_mut() {
            stage.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::distortion::shape;

    const SR: f32 = 44_100.0;

    fn dry_params() -> ParamSnapshot {
        ParamSnapshot {
            harmonics: 0.0,
            bit_depth: 16.0,
            ..ParamSnapshot::default()
        }
    }

    fn test_ctx() -> RenderCtx {
        RenderCtx::new(SR, 440.0)
    }

    #[test]
    fn test_all_bypassed_is_identity() {
        let params = dry_params();
        let mut chain = EffectChain::new(SR, &params);
        assert!(chain.is_bypassed());

        let mut buffer: Vec<f32> = (0..1024).map(|i| (i as f32 * 0.03).sin()).collect();
        let original = buffer.clone();
        chain.render_block(&mut buffer, &test_ctx());
        assert_eq!(buffer, original);
    }

    #[test]
    fn test_defaults_enable_harmonics_and_crush() {
        let chain = EffectChain::new(SR, &ParamSnapshot::default());
        assert_eq!(chain.active_stages(), 2);
    }

    #[test]
    fn test_update_switches_stages() {
        let mut params = dry_params();
        let mut chain = EffectChain::new(SR, &params);
        params.reverb_level = 0.4;
        params.delay_mix = 0.2;
        chain.update(&params, 0.5);
        // reverb, delay and the filter at 0.5
        assert_eq!(chain.active_stages(), 3);

        chain.update(&dry_params(), 1.0);
        assert_eq!(chain.active_stages(), 0);
    }

    #[test]
    fn test_distortion_runs_before_bit_crush() {
        let params = ParamSnapshot {
            distortion: 0.5,
            bit_depth: 4.0,
            ..dry_params()
        };
        let mut chain = EffectChain::new(SR, &params);
        let mut buffer = vec![0.2; 4];
        chain.render_block(&mut buffer, &test_ctx());

        let expected = (shape(0.2, 0.5) * 16.0).round_ties_even() / 16.0;
        assert!(buffer.iter().all(|&s| (s - expected).abs() < 1e-6));
    }
}
