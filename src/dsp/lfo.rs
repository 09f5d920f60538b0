//! Low Frequency Oscillator (LFO) helpers.

/*
Low Frequency Oscillators
=========================

An LFO is an oscillator running at sub-audio rates that moves some other
parameter instead of being heard directly. Four things in this synth are
LFO-driven:

  user        rate               evaluated     drives
  ----------  -----------------  ------------  ----------------------
  tremolo     0.5 - 20 Hz        per sample    amplitude
  chorus      0.1 - 10 Hz        per sample    delay time
  phaser      0.5 Hz (fixed)     per block     comb delay (2-10 ms)
  pwm         0.5 Hz (fixed)     per block     pulse duty (10%-90%)

All of them are plain sines, read as

    lfo = sin(2π · rate · phase)

where `phase` is whatever that stage's accumulator holds. Control-rate
shapes other than sine are not used.


Bipolar to Unipolar Conversion
------------------------------

A sine swings -1.0 to +1.0 (bipolar). Tremolo depth and phaser sweep want
0.0 to 1.0 (unipolar):

    unipolar = (bipolar + 1.0) * 0.5

    bipolar   unipolar
    -1.0      0.0
     0.0      0.5
    +1.0      1.0


Freeze While Bypassed
---------------------

Tremolo, chorus and phaser stop advancing their phase while their depth is
zero. Turning them back on resumes the sweep where it stopped rather than
where it "would have been". The PWM sub-oscillator is the exception: it
runs on every render.
*/

use std::f32::consts::TAU;

/// Convert bipolar signal (-1.0 to +1.0) to unipolar (0.0 to 1.0).
#[inline]
pub fn bipolar_to_unipolar(bipolar: f32) -> f32 {
    (bipolar + 1.0) * 0.5
}

/// Bipolar sine LFO value for `rate` Hz at `phase`.
#[inline]
pub fn sine(rate: f32, phase: f32) -> f32 {
    (TAU * rate * phase).sin()
}
