//! Wrapping phase accumulator.

/*
Phase Accumulators
==================

Every periodic thing in the synth (the master oscillator clock, the PWM
sub-oscillator, and the tremolo, phaser and chorus LFOs) keeps a running
phase that grows by some amount per sample or per block and wraps back
into [0, period).

The unit of the phase depends on the owner:

  owner        unit       advance per          period
  -----------  ---------  -------------------  ------------
  master       samples    block (N)            sample rate
  pwm          seconds    block (N / sr)       2.0
  tremolo      seconds    sample (1 / sr)      1.0
  phaser       seconds    block (N / sr)       2.0
  chorus       cycles     sample (rate / sr)   1.0

PWM and the phaser read their phase through sin(2π · 0.5 · phase), which
repeats every 2.0, so they wrap there and stay continuous.

Each accumulator belongs to exactly one stage. Nothing shares one.
*/

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseAccumulator {
    phase: f32,
    period: f32,
}

impl PhaseAccumulator {
    /// Create an accumulator at phase 0 that wraps at `period`.
    ///
    /// Non-positive or non-finite periods fall back to 1.0.
    pub fn new(period: f32) -> Self {
        let period = if period.is_finite() && period > 0.0 {
            period
        } else {
            1.0
        };
        Self { phase: 0.0, period }
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    #[inline]
    pub fn period(&self) -> f32 {
        self.period
    }

    /// Advance by `delta` and wrap into [0, period).
    #[inline]
    pub fn advance(&mut self, delta: f32) {
        self.phase += delta;
        if self.phase >= self.period {
            self.phase -= self.period;
            // Large steps (e.g. a whole block) may need more than one wrap
            if self.phase >= self.period {
                self.phase = self.phase.rem_euclid(self.period);
            }
        }
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}
