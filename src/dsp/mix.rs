//! Level handling: dry/wet blending, peak detection and normalization.

/*
Output Levels
=============

The effect chain makes no attempt to keep its output in range. Harmonics
add partials on top of the fundamental, the phaser and reverb add delayed
copies, distortion pushes everything toward the rails. Instead of taming
each stage, the engine fixes the level once, at the very end:

    peak   = max(|x[i]|)
    x[i]   = x[i] / peak          (skipped when peak == 0)
    x[i]   = x[i] * volume

After that the block peaks at exactly `volume`, whatever the chain did.


Why Per-Block Peak Normalization
--------------------------------

  + Every effect combination is audible at a predictable loudness.
  + Silence stays silence (a zero peak is left alone, no divide by zero).
  - Gain jumps between blocks when the chain's raw level changes quickly.
    This is audible as a mild pumping on very dynamic patches.


Dry/Wet
-------

    output = (dry × (1-mix)) + (wet × mix)

mix = 0.0 is fully dry, 1.0 fully wet. The weights sum to 1.0, so a
crossfade alone never raises the level.
*/

/// Blend dry and wet samples using linear crossfade (single sample version).
///
/// output = (dry × (1-mix)) + (wet × mix)
#[inline]
pub fn blend_dry_wet(dry: f32, wet: f32, mix: f32) -> f32 {
    dry * (1.0 - mix) + wet * mix
}

/// Largest absolute sample in `buffer` (0.0 for an empty buffer).
///
/// NaN samples are ignored.
#[inline]
pub fn peak(buffer: &[f32]) -> f32 {
    buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()))
}

/// Scale `buffer` so its peak is 1.0. Returns the peak found.
///
/// A silent buffer (peak 0.0) is left untouched.
#[inline]
pub fn normalize_peak(buffer: &mut [f32]) -> f32 {
    let peak = peak(buffer);
    if peak > 0.0 && peak.is_finite() {
        for sample in buffer.iter_mut() {
            *sample /= peak;
        }
    }
    peak
}

/// Multiply every sample by `gain`.
#[inline]
pub fn apply_gain(buffer: &mut [f32], gain: f32) {
    for sample in buffer.iter_mut() {
        *sample *= gain;
    }
}
