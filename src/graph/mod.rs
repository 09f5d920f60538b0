//! The effect stages and the fixed chain that runs them.
//!
//! Each stage wraps the low-level DSP primitives in `dsp` with the state it
//! needs between blocks (delay lines, LFO phases) and renders a block in
//! place through [`node::GraphNode`]. [`chain::EffectChain`] owns one of
//! each and applies them in order.

/// 16-bit-and-below quantizer.
pub mod bit_crush;
/// The ten stages in their fixed order.
pub mod chain;
/// Modulated short delay, dry write-back.
pub mod chorus;
/// One-second feedback echo.
pub mod delay;
/// Saturation, wavefold and enhancer in one knob.
pub mod distortion;
/// One-pole low-pass, re-seeded each block.
pub mod filter;
/// Fixed overtone stack on top of the oscillator.
pub mod harmonics;
/// Core traits shared by all stages.
pub mod node;
/// Block-rate swept comb.
pub mod phaser;
/// Four-tap comb reverb.
pub mod reverb;
/// Multiply by a carrier that tracks the voice.
pub mod ring_mod;
/// Sine amplitude modulation.
pub mod tremolo;

pub use chain::EffectChain;
pub use node::{GraphNode, RenderCtx};
