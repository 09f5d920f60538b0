//! Low-level DSP primitives used by the effect stages.
//!
//! These components are allocation-free once constructed, making them safe to
//! own directly inside the stages that run on the audio thread. They stay
//! focused on the signal-processing math so the graph layer can handle the
//! bypass rules and parameter plumbing.

/// Fixed-capacity circular delay line.
pub mod delay;
/// Waveshaping curves for the distortion stage.
pub mod distortion;
/// One-pole low-pass filter.
pub mod filter;
/// Bipolar/unipolar helpers for control-rate oscillators.
pub mod lfo;
/// Peak detection, normalization and dry/wet blending.
pub mod mix;
/// Oscillator waveforms, noise source and the PWM sub-oscillator.
pub mod oscillator;
/// Wrapping phase accumulator.
pub mod phase;

pub use oscillator::{Waveform, WaveformGenerator};
pub use phase::PhaseAccumulator;
