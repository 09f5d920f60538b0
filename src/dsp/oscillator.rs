use std::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::phase::PhaseAccumulator;

/*
Oscillator Waveforms
====================

The voice has eight selectable shapes, addressed by a 0-7 selector coming
from the hardware controller or the number keys:

  id  shape      character
  --  ---------  -----------------------------------------------
  0   sawtooth   bright, buzzy, every harmonic at 1/n
  1   sine       pure fundamental
  2   square     hollow, odd harmonics only
  3   triangle   soft, odd harmonics falling off at 1/n²
  4   pulse      25% duty, nasal and thin
  5   noise      white noise, ignores time and frequency
  6   pwm        pulse whose duty sweeps 10%-90% at 0.5 Hz
  7   ramp       sawtooth, inverted

Everything except noise and PWM is a pure function of (t, f). The shapes
are evaluated directly from absolute time rather than from a per-oscillator
phase, so the master clock in the engine is the only thing that has to be
continuous across blocks.

PWM Sub-Oscillator
------------------

The PWM duty cycle comes from its own slow sine:

    duty = 0.5 + 0.4 * sin(2π · 0.5 · pwm_phase)

pwm_phase is in seconds and advances by block_len / sample_rate on every
render, whichever shape is selected. It is never reset by a frequency
change or a waveform switch; it just keeps running.
*/

/// Default seed for the noise source.
pub const DEFAULT_NOISE_SEED: u64 = 0x5AA7_D5B0;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Waveform {
    Sawtooth,
    Sine,
    Square,
    Triangle,
    /// 25% duty pulse
    Pulse,
    Noise,
    /// Pulse-width modulated by the free-running sub-oscillator
    Pwm,
    /// Negative sawtooth
    Ramp,
}

impl Waveform {
    pub const ALL: [Waveform; 8] = [
        Waveform::Sawtooth,
        Waveform::Sine,
        Waveform::Square,
        Waveform::Triangle,
        Waveform::Pulse,
        Waveform::Noise,
        Waveform::Pwm,
        Waveform::Ramp,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Reduce any integer selector into the 0-7 domain (Euclidean modulo).
    pub fn from_selector(selector: i64) -> Self {
        Self::ALL[selector.rem_euclid(Self::ALL.len() as i64) as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            Waveform::Sawtooth => "SAWTOOTH",
            Waveform::Sine => "SINE",
            Waveform::Square => "SQUARE",
            Waveform::Triangle => "TRIANGLE",
            Waveform::Pulse => "PULSE",
            Waveform::Noise => "NOISE",
            Waveform::Pwm => "PWM",
            Waveform::Ramp => "RAMP",
        }
    }

    /// Stateless shape at time `t` seconds and frequency `f`.
    ///
    /// Intended for display previews: noise has no deterministic shape and
    /// reads as 0.0, PWM is drawn at the centre of its sweep (50% duty).
    pub fn sample_at(self, t: f32, f: f32) -> f32 {
        match self {
            Waveform::Noise => 0.0,
            Waveform::Pwm => periodic(self, t, f, 0.5),
            _ => periodic(self, t, f, 0.0),
        }
    }
}

impl TryFrom<u8> for Waveform {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(value as usize).copied().ok_or(value)
    }
}

/// `sign` with sign(0) == 0, unlike `f32::signum`.
#[inline]
pub(crate) fn sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[inline]
fn sawtooth(x: f32) -> f32 {
    2.0 * (x - (0.5 + x).floor())
}

#[inline]
fn gate(high: bool) -> f32 {
    if high {
        1.0
    } else {
        -1.0
    }
}

/// Every shape that is a pure function of (t, f). `duty` is read by PWM only.
#[inline]
fn periodic(waveform: Waveform, t: f32, f: f32, duty: f32) -> f32 {
    let x = t * f;
    match waveform {
        Waveform::Sawtooth => sawtooth(x),
        Waveform::Sine => (TAU * x).sin(),
        Waveform::Square => sign((TAU * x).sin()),
        Waveform::Triangle => 2.0 * (2.0 * (x - (x + 0.5).floor())).abs() - 1.0,
        Waveform::Pulse => gate(x.rem_euclid(1.0) < 0.25),
        Waveform::Pwm => gate(x.rem_euclid(1.0) < duty),
        Waveform::Ramp => -sawtooth(x),
        Waveform::Noise => 0.0,
    }
}

/// Raw oscillator for the voice.
///
/// Owns the two pieces of oscillator state that are not a function of time:
/// the PWM sub-oscillator phase and the noise generator.
pub struct WaveformGenerator {
    sample_rate: f32,
    pwm_phase: PhaseAccumulator,
    rng: oorandom::Rand32,
}

impl WaveformGenerator {
    pub fn new(sample_rate: f32) -> Self {
        Self::with_seed(sample_rate, DEFAULT_NOISE_SEED)
    }

    /// Seed the noise source explicitly (reproducible noise for tests).
    pub fn with_seed(sample_rate: f32, seed: u64) -> Self {
        Self {
            sample_rate,
            pwm_phase: PhaseAccumulator::new(2.0),
            rng: oorandom::Rand32::new(seed),
        }
    }

    /// Current PWM sub-oscillator phase in seconds.
    pub fn pwm_phase(&self) -> f32 {
        self.pwm_phase.phase()
    }

    /// PWM duty cycle for the current sub-oscillator phase.
    pub fn pwm_duty(&self) -> f32 {
        0.5 + 0.4 * (TAU * 0.5 * self.pwm_phase.phase()).sin()
    }

    /// Fill `out` with one sample per entry of `times` (seconds).
    ///
    /// Selectors outside 0-7 produce silence. Non-finite frequencies are
    /// treated as 0 Hz.
    pub fn generate(&mut self, times: &[f32], frequency: f32, selector: u8, out: &mut [f32]) {
        let len = times.len().min(out.len());
        let (times, out) = (&times[..len], &mut out[..len]);
        let frequency = if frequency.is_finite() { frequency } else { 0.0 };

        let duty = self.pwm_duty();

        match Waveform::try_from(selector) {
            Ok(Waveform::Noise) => {
                for sample in out.iter_mut() {
                    *sample = self.rng.rand_float() * 2.0 - 1.0;
                }
            }
            Ok(waveform) => {
                for (sample, &t) in out.iter_mut().zip(times) {
                    *sample = periodic(waveform, t, frequency, duty);
                }
            }
            Err(_) => out.fill(0.0),
        }

        self.pwm_phase.advance(len as f32 / self.sample_rate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SR: f32 = 44_100.0;

    fn time_vector(len: usize, offset: f32) -> Vec<f32> {
        (0..len).map(|i| (i as f32 + offset) / SR).collect()
    }

    #[test]
    fn test_sine_matches_formula() {
        let mut osc = WaveformGenerator::new(SR);
        let times = time_vector(128, 0.0);
        let mut out = vec![0.0; 128];
        osc.generate(&times, 440.0, 1, &mut out);

        let sample_index = 12;
        let expected = (TAU * 440.0 * sample_index as f32 / SR).sin();
        assert!(
            (out[sample_index] - expected).abs() < 1e-6,
            "expected {expected}, got {}",
            out[sample_index]
        );
    }

    #[test]
    fn test_sawtooth_and_ramp_are_mirrored() {
        let mut osc = WaveformGenerator::new(SR);
        let times = time_vector(256, 0.0);
        let mut saw = vec![0.0; 256];
        let mut ramp = vec![0.0; 256];
        osc.generate(&times, 220.0, Waveform::Sawtooth.index(), &mut saw);
        osc.generate(&times, 220.0, Waveform::Ramp.index(), &mut ramp);

        for (s, r) in saw.iter().zip(&ramp) {
            assert!((s + r).abs() < 1e-6);
        }
    }

    #[test]
    fn test_known_points() {
        // x = t * f
        assert!((Waveform::Sawtooth.sample_at(0.25, 1.0) - 0.5).abs() < 1e-6);
        assert!((Waveform::Triangle.sample_at(0.0, 1.0) - -1.0).abs() < 1e-6);
        assert!((Waveform::Triangle.sample_at(0.5, 1.0) - 1.0).abs() < 1e-6);
        assert_eq!(Waveform::Square.sample_at(0.25, 1.0), 1.0);
        assert_eq!(Waveform::Square.sample_at(0.75, 1.0), -1.0);
        assert_eq!(Waveform::Square.sample_at(0.0, 1.0), 0.0);
        assert_eq!(Waveform::Pulse.sample_at(0.1, 1.0), 1.0);
        assert_eq!(Waveform::Pulse.sample_at(0.3, 1.0), -1.0);
    }

    #[test]
    fn test_all_shapes_bounded() {
        let mut osc = WaveformGenerator::new(SR);
        let times = time_vector(1024, 300.0);
        let mut out = vec![0.0; 1024];
        for waveform in Waveform::ALL {
            osc.generate(&times, 523.25, waveform.index(), &mut out);
            assert!(
                out.iter().all(|s| (-1.0..=1.0).contains(s)),
                "{} left [-1, 1]",
                waveform.name()
            );
        }
    }

    #[test]
    fn test_noise_ignores_time_and_varies() {
        let mut osc = WaveformGenerator::with_seed(SR, 7);
        let times = vec![0.0; 64];
        let mut out = vec![0.0; 64];
        osc.generate(&times, 0.0, Waveform::Noise.index(), &mut out);

        let distinct = out.windows(2).filter(|w| w[0] != w[1]).count();
        assert!(distinct > 60, "noise should not repeat sample to sample");
    }

    #[test]
    fn test_noise_seed_is_reproducible() {
        let times = vec![0.0; 32];
        let mut a = vec![0.0; 32];
        let mut b = vec![0.0; 32];
        WaveformGenerator::with_seed(SR, 42).generate(&times, 440.0, 5, &mut a);
        WaveformGenerator::with_seed(SR, 42).generate(&times, 440.0, 5, &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_out_of_range_selector_is_silent() {
        let mut osc = WaveformGenerator::new(SR);
        let times = time_vector(64, 0.0);
        let mut out = vec![1.0; 64];
        osc.generate(&times, 440.0, 8, &mut out);
        assert!(out.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_pwm_phase_free_runs_across_waveforms() {
        let mut osc = WaveformGenerator::new(SR);
        let times = time_vector(1024, 0.0);
        let mut out = vec![0.0; 1024];

        osc.generate(&times, 440.0, Waveform::Sine.index(), &mut out);
        osc.generate(&times, 880.0, Waveform::Pwm.index(), &mut out);
        osc.generate(&times, 110.0, 42, &mut out);

        let expected = 3.0 * 1024.0 / SR;
        assert!((osc.pwm_phase() - expected).abs() < 1e-5);
    }

    #[test]
    fn test_pwm_duty_follows_sub_oscillator() {
        let mut osc = WaveformGenerator::new(SR);
        // Phase 0 -> duty 0.5
        assert!((osc.pwm_duty() - 0.5).abs() < 1e-6);

        // Half a second in, sin(π/2) = 1 -> duty 0.9
        let times = vec![0.0; 22_050 / 2];
        let mut out = vec![0.0; times.len()];
        osc.generate(&times, 440.0, 0, &mut out);
        osc.generate(&times, 440.0, 0, &mut out);
        assert!((osc.pwm_duty() - 0.9).abs() < 1e-3);

        // With duty 0.9, 9 of every 10 phase positions are high
        let times: Vec<f32> = (0..10).map(|i| (i as f32 + 0.5) / 10.0).collect();
        let mut out = vec![0.0; 10];
        osc.generate(&times, 1.0, Waveform::Pwm.index(), &mut out);
        assert_eq!(out.iter().filter(|&&s| s > 0.0).count(), 9);
    }

    #[test]
    fn test_selector_reduction() {
        assert_eq!(Waveform::from_selector(9), Waveform::Sine);
        assert_eq!(Waveform::from_selector(-1), Waveform::Ramp);
        assert_eq!(Waveform::try_from(6), Ok(Waveform::Pwm));
        assert_eq!(Waveform::try_from(8), Err(8));
    }
}
