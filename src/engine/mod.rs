/*
Audio Engine
============

Renders one block of the voice per call:

  1. read the parameter snapshot
  2. smooth the frequency toward its target   (×0.95 + target ×0.05)
  3. smooth the filter cutoff toward its target (×0.9 + target ×0.1)
  4. build the block's time vector from the master phase
  5. generate the raw waveform
  6. run the effect chain
  7. advance the master phase by the block length (wraps at one second)
  8. peak-normalize, then scale by volume

Smoothing is once per block, so a jump in target takes a few dozen
blocks to settle. Once a value is within 1e-6 of its target (relative,
for targets above 1) it is snapped there. A fully opened cutoff then
reaches exactly 1.0 and bypasses the filter.

`process_block` never blocks or allocates: the time and block buffers
are sized for `MAX_BLOCK_SIZE` up front and the store is read through
atomics.
*/

pub mod stream;

pub use stream::BlockStream;

use std::sync::Arc;

use crate::dsp::mix::{apply_gain, normalize_peak};
use crate::dsp::oscillator::WaveformGenerator;
use crate::dsp::phase::PhaseAccumulator;
use crate::graph::{EffectChain, GraphNode, RenderCtx};
use crate::params::{ParamSnapshot, ParameterStore};
use crate::{DEFAULT_BLOCK_SIZE, DEFAULT_SAMPLE_RATE, MAX_BLOCK_SIZE};

const FREQUENCY_SMOOTHING: f32 = 0.05;
const CUTOFF_SMOOTHING: f32 = 0.1;
const SNAP_EPSILON: f32 = 1e-6;

/// Sample rate and block size the engine renders at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub sample_rate: f32,
    pub block_size: usize,
}

impl EngineConfig {
    /// Block size is clamped to `1..=MAX_BLOCK_SIZE`; a sample rate that is
    /// not a positive number falls back to 44.1 kHz.
    pub fn new(sample_rate: f32, block_size: usize) -> Self {
        let sample_rate = if sample_rate.is_finite() && sample_rate > 0.0 {
            sample_rate
        } else {
            DEFAULT_SAMPLE_RATE
        };
        Self {
            sample_rate,
            block_size: block_size.clamp(1, MAX_BLOCK_SIZE),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE, DEFAULT_BLOCK_SIZE)
    }
}

/// One-pole step toward `target`, snapping once close enough.
///
/// The tolerance scales with the target so an f32 glide toward 880 Hz
/// cannot stall a few ulps short.
#[inline]
fn smooth(current: f32, target: f32, amount: f32) -> f32 {
    let next = current + (target - current) * amount;
    let tolerance = SNAP_EPSILON * target.abs().max(1.0);
    if (next - target).abs() < tolerance || !next.is_finite() {
        target
    } else {
        next
    }
}

/// Normalize a rendered block and apply volume.
///
/// A block holding any non-finite sample is replaced by silence. Returns
/// the pre-normalization peak.
fn finish_block(block: &mut [f32], volume: f32) -> f32 {
    let peak = normalize_peak(block);
    // `peak` skips NaN, so look for it separately
    if !peak.is_finite() || block.iter().any(|s| s.is_nan()) {
        block.fill(0.0);
        return peak;
    }
    apply_gain(block, volume);
    peak
}

pub struct AudioEngine {
    config: EngineConfig,
    store: Arc<ParameterStore>,
    generator: WaveformGenerator,
    chain: EffectChain,
    master_phase: PhaseAccumulator,
    current_frequency: f32,
    current_cutoff: f32,
    times: Vec<f32>,
}

impl AudioEngine {
    pub fn new(config: EngineConfig, store: Arc<ParameterStore>) -> Self {
        Self::with_generator(config, store, WaveformGenerator::new(config.sample_rate))
    }

    /// Use a specific generator (e.g. one with a fixed noise seed).
    pub fn with_generator(
        config: EngineConfig,
        store: Arc<ParameterStore>,
        generator: WaveformGenerator,
    ) -> Self {
        let config = EngineConfig::new(config.sample_rate, config.block_size);
        let params = store.snapshot();
        Self {
            chain: EffectChain::new(config.sample_rate, &params),
            master_phase: PhaseAccumulator::new(config.sample_rate),
            current_frequency: params.target_frequency,
            current_cutoff: params.filter_cutoff,
            times: vec![0.0; MAX_BLOCK_SIZE],
            generator,
            config,
            store,
        }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn store(&self) -> &Arc<ParameterStore> {
        &self.store
    }

    pub fn current_frequency(&self) -> f32 {
        self.current_frequency
    }

    pub fn current_cutoff(&self) -> f32 {
        self.current_cutoff
    }

    /// Master phase in samples, in `[0, sample_rate)`.
    pub fn master_phase(&self) -> f32 {
        self.master_phase.phase()
    }

    /// Render `out` in place.
    ///
    /// Slices longer than `MAX_BLOCK_SIZE` are rendered as consecutive
    /// blocks of at most that length.
    pub fn process_block(&mut self, out: &mut [f32]) {
        for block in out.chunks_mut(MAX_BLOCK_SIZE) {
            let params = self.store.snapshot();
            self.render(block, &params);
        }
    }

    fn render(&mut self, block: &mut [f32], params: &ParamSnapshot) {
        let sample_rate = self.config.sample_rate;
        let len = block.len();

        self.current_frequency = smooth(
            self.current_frequency,
            params.target_frequency,
            FREQUENCY_SMOOTHING,
        );
        self.current_cutoff = smooth(self.current_cutoff, params.filter_cutoff, CUTOFF_SMOOTHING);
        self.store.publish_current(self.current_frequency, self.current_cutoff);

        let offset = self.master_phase.phase();
        let times = &mut self.times[..len];
        for (i, t) in times.iter_mut().enumerate() {
            *t = (offset + i as f32) / sample_rate;
        }

        self.generator.generate(
            times,
            self.current_frequency,
            params.waveform.index(),
            block,
        );

        self.chain.update(params, self.current_cutoff);
        let ctx = RenderCtx::new(sample_rate, self.current_frequency);
        self.chain.render_block(block, &ctx);

        self.master_phase.advance(len as f32);

        finish_block(block, params.volume);
    }
}
