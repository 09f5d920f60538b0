//! Distortion / Waveshaping
//!
//! The distortion stage is a single `amount` knob (0.0 - 1.0) that walks the
//! signal through progressively harsher shaping:
//!
//! ```text
//! amount   what gets switched in
//! 0.0      nothing (bypass)
//! > 0.0    gain (1 + 8·amount) into two cascaded tanh saturators
//! > 0.3    sine wavefolder blended in, intensity (amount - 0.3) · 1.4
//! > 0.5    square-root "enhancer" blended in, weight (amount - 0.5) · 0.3
//! always   final tanh polish, then a small dry blend of 0.15 · (1 - amount)
//! ```
//!
//! # Cascaded tanh
//!
//! Two gentle tanh stages saturate more smoothly than one hard one:
//!
//! ```text
//! stage1 = tanh(x · gain · 0.8)
//! stage2 = tanh(stage1 · 1.2) · 0.9
//! ```
//!
//! # Wavefolding
//!
//! `sin(x · π · (1 + k))` maps the saturated signal back through a sine, so
//! peaks fold down instead of flattening. Blending it in rather than
//! replacing keeps the fundamental audible.
//!
//! # Square-root enhancer
//!
//! `sign(x) · sqrt(|x|)` lifts low-level detail toward the peaks, thickening
//! the tone at the high end of the knob.

use std::f32::consts::PI;

/// Both tanh saturators for a given gain.
#[inline]
pub fn saturate(sample: f32, gain: f32) -> f32 {
    let stage1 = (sample * gain * 0.8).tanh();
    (stage1 * 1.2).tanh() * 0.9
}

/// Blend in a sine wavefold of the given intensity.
#[inline]
pub fn wavefold(sample: f32, intensity: f32) -> f32 {
    let folded = (sample * PI * (1.0 + intensity)).sin();
    sample * (1.0 - intensity * 0.6) + folded * (intensity * 0.6)
}

/// Blend in `sign(x) · sqrt(|x|)` with the given weight.
#[inline]
pub fn sqrt_enhance(sample: f32, weight: f32) -> f32 {
    let enhanced = sample.signum() * sample.abs().sqrt();
    sample * (1.0 - weight) + enhanced * weight
}

/// Full shaping curve for one sample. `amount` must already be > 0.
#[inline]
pub fn shape(sample: f32, amount: f32) -> f32 {
    let gain = 1.0 + amount * 8.0;
    let mut out = saturate(sample, gain);

    if amount > 0.3 {
        out = wavefold(out, (amount - 0.3) * 1.4);
    }

    if amount > 0.5 {
        out = sqrt_enhance(out, (amount - 0.5) * 0.3);
    }

    out = (out * 1.1).tanh() * 0.95;

    let dry_mix = 0.15 * (1.0 - amount);
    out * (1.0 - dry_mix) + sample * dry_mix
}

/// Apply [`shape`] to an entire buffer in place.
pub fn shape_buffer(buffer: &mut [f32], amount: f32) {
    for sample in buffer.iter_mut() {
        *sample = shape(*sample, amount);
    }
}
