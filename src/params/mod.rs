/*
Parameter Store
===============

Shared state between the control side (keyboard, control line) and the
audio callback. The control side writes, the engine reads once per block.

Every value is its own atomic cell, so neither side ever waits on the
other. Two reads in the same block may see one parameter updated and
another not yet; nothing here depends on two parameters agreeing.

Writers clamp. The engine reads a `ParamSnapshot` and trusts it.

The engine writes two cells back (the smoothed frequency and filter
cutoff) so a display can show what is actually sounding.
*/

mod atomic;
mod table;

pub use atomic::AtomicF32;
pub use table::{Direction, ParamId, ParamSpec};

use crate::dsp::oscillator::Waveform;
use std::sync::atomic::{AtomicU16, AtomicU8, Ordering};

pub const DEFAULT_FREQUENCY: f32 = 440.0;
pub const MIN_FREQUENCY: f32 = 1.0;
pub const MAX_FREQUENCY: f32 = 20_000.0;

/// Upper end of the joystick axes.
pub const JOYSTICK_MAX: u16 = 1023;

/// Where both axes read before the controller reports.
pub const JOYSTICK_CENTER: u16 = 512;

/// Parameter values as read by the engine for one block.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamSnapshot {
    pub target_frequency: f32,
    pub waveform: Waveform,
    pub harmonics: f32,
    pub distortion: f32,
    pub chorus_depth: f32,
    pub chorus_rate: f32,
    pub bit_depth: f32,
    pub filter_cutoff: f32,
    pub reverb_level: f32,
    pub delay_mix: f32,
    pub delay_time: f32,
    pub ring_mod: f32,
    pub tremolo_depth: f32,
    pub tremolo_rate: f32,
    pub phaser_depth: f32,
    pub volume: f32,
}

impl Default for ParamSnapshot {
    fn default() -> Self {
        ParameterStore::new().snapshot()
    }
}

/// What the display side reads back: the last joystick position and the
/// smoothed values the engine is rendering with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayState {
    pub joystick_x: u16,
    pub joystick_y: u16,
    pub current_frequency: f32,
    pub current_cutoff: f32,
}

#[derive(Debug)]
pub struct ParameterStore {
    params: [AtomicF32; ParamId::COUNT],
    target_frequency: AtomicF32,
    waveform: AtomicU8,
    joystick_x: AtomicU16,
    joystick_y: AtomicU16,
    current_frequency: AtomicF32,
    current_cutoff: AtomicF32,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self {
            params: ParamId::ALL.map(|id| AtomicF32::new(id.spec().default)),
            target_frequency: AtomicF32::new(DEFAULT_FREQUENCY),
            waveform: AtomicU8::new(Waveform::Sawtooth.index()),
            joystick_x: AtomicU16::new(JOYSTICK_CENTER),
            joystick_y: AtomicU16::new(JOYSTICK_CENTER),
            current_frequency: AtomicF32::new(DEFAULT_FREQUENCY),
            current_cutoff: AtomicF32::new(ParamId::FilterCutoff.spec().default),
        }
    }

    #[inline]
    pub fn get(&self, id: ParamId) -> f32 {
        self.params[id.index()].load()
    }

    /// Store `value` clamped to the parameter's range. Returns what was stored.
    pub fn set(&self, id: ParamId, value: f32) -> f32 {
        let clamped = id.spec().clamp(value);
        self.params[id.index()].store(clamped);
        clamped
    }

    /// Apply one stepped edit. Returns the new value.
    pub fn nudge(&self, id: ParamId, direction: Direction) -> f32 {
        let next = id.spec().stepped(self.get(id), direction);
        self.set(id, next)
    }

    /// Restore every table parameter to its default.
    ///
    /// Frequency and waveform belong to the control line and are kept.
    pub fn reset(&self) {
        for id in ParamId::ALL {
            self.set(id, id.spec().default);
        }
    }

    pub fn waveform(&self) -> Waveform {
        Waveform::from_selector(i64::from(self.waveform.load(Ordering::Relaxed)))
    }

    /// Select a waveform; any integer is reduced modulo 8.
    pub fn set_waveform(&self, selector: i64) -> Waveform {
        let waveform = Waveform::from_selector(selector);
        self.waveform.store(waveform.index(), Ordering::Relaxed);
        waveform
    }

    pub fn target_frequency(&self) -> f32 {
        self.target_frequency.load()
    }

    /// Clamped to [1, 20000] Hz; NaN is ignored.
    pub fn set_target_frequency(&self, hz: f32) -> f32 {
        if !hz.is_nan() {
            self.target_frequency
                .store(hz.clamp(MIN_FREQUENCY, MAX_FREQUENCY));
        }
        self.target_frequency.load()
    }

    /// Record the raw joystick position, clamped to [0, 1023].
    pub fn set_joystick(&self, x: i64, y: i64) {
        let axis = |v: i64| v.clamp(0, i64::from(JOYSTICK_MAX)) as u16;
        self.joystick_x.store(axis(x), Ordering::Relaxed);
        self.joystick_y.store(axis(y), Ordering::Relaxed);
    }

    /// Called by the engine after smoothing.
    pub fn publish_current(&self, frequency: f32, cutoff: f32) {
        self.current_frequency.store(frequency);
        self.current_cutoff.store(cutoff);
    }

    pub fn display(&self) -> DisplayState {
        DisplayState {
            joystick_x: self.joystick_x.load(Ordering::Relaxed),
            joystick_y: self.joystick_y.load(Ordering::Relaxed),
            current_frequency: self.current_frequency.load(),
            current_cutoff: self.current_cutoff.load(),
        }
    }

    pub fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            target_frequency: self.target_frequency(),
            waveform: self.waveform(),
            harmonics: self.get(ParamId::Harmonics),
            distortion: self.get(ParamId::Distortion),
            chorus_depth: self.get(ParamId::ChorusDepth),
            chorus_rate: self.get(ParamId::ChorusRate),
            bit_depth: self.get(ParamId::BitDepth),
            filter_cutoff: self.get(ParamId::FilterCutoff),
            reverb_level: self.get(ParamId::ReverbLevel),
            delay_mix: self.get(ParamId::DelayMix),
            delay_time: self.get(ParamId::DelayTime),
            ring_mod: self.get(ParamId::RingMod),
            tremolo_depth: self.get(ParamId::TremoloDepth),
            tremolo_rate: self.get(ParamId::TremoloRate),
            phaser_depth: self.get(ParamId::PhaserDepth),
            volume: self.get(ParamId::Volume),
        }
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}
