/*
Parameter Table
===============

Every knob the keyboard can reach, with its default, clamp range and step:

| parameter         | default | range        | step |
| ----------------- | ------- | ------------ | ---- |
| harmonics level   | 0.3     | 0.0 - 1.0    | 0.1  |
| distortion        | 0.0     | 0.0 - 1.0    | 0.1  |
| chorus depth      | 0.0     | 0.0 - 1.0    | 0.1  |
| chorus rate (Hz)  | 2.0     | 0.1 - 10.0   | 0.5  |
| bit depth         | 12      | 4 - 16       | 1    |
| filter cutoff     | 1.0     | 0.1 - 1.0    | 0.1  |
| reverb level      | 0.0     | 0.0 - 1.0    | 0.1  |
| delay mix         | 0.0     | 0.0 - 0.8    | 0.1  |
| delay time (s)    | 0.3     | 0.05 - 1.0   | 0.05 |
| ring-mod amount   | 0.0     | 0.0 - 10.0   | 0.5  |
| tremolo depth     | 0.0     | 0.0 - 1.0    | 0.1  |
| tremolo rate (Hz) | 4.0     | 0.5 - 20.0   | 1.0  |
| phaser depth      | 0.0     | 0.0 - 1.0    | 0.1  |
| volume            | 0.35    | 0.05 - 0.8   | 0.05 |

Bit depth is inverted: "up" means crunchier, so it lowers the depth.
*/

/// Identifies one entry of the parameter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParamId {
    Harmonics,
    Distortion,
    ChorusDepth,
    ChorusRate,
    BitDepth,
    FilterCutoff,
    ReverbLevel,
    DelayMix,
    DelayTime,
    RingMod,
    TremoloDepth,
    TremoloRate,
    PhaserDepth,
    Volume,
}

/// Which way a stepped edit moves a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Static description of one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub default: f32,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    /// Stepping "up" decreases the value.
    pub inverted: bool,
}

impl ParamSpec {
    const fn new(name: &'static str, default: f32, min: f32, max: f32, step: f32) -> Self {
        Self {
            name,
            default,
            min,
            max,
            step,
            inverted: false,
        }
    }

    const fn inverted(self) -> Self {
        Self {
            inverted: true,
            ..self
        }
    }

    /// Clamp into range. NaN falls back to the default.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.default
        } else {
            value.clamp(self.min, self.max)
        }
    }

    /// Value after one step in `direction`, rounded to 1e-4 and clamped.
    pub fn stepped(&self, value: f32, direction: Direction) -> f32 {
        let up = matches!(direction, Direction::Up) != self.inverted;
        let delta = if up { self.step } else { -self.step };
        self.clamp(round_to_ten_thousandths(value + delta))
    }
}

fn round_to_ten_thousandths(value: f32) -> f32 {
    (value * 10_000.0).round() / 10_000.0
}

const SPECS: [ParamSpec; ParamId::COUNT] = [
    ParamSpec::new("Harmonics", 0.3, 0.0, 1.0, 0.1),
    ParamSpec::new("Distortion", 0.0, 0.0, 1.0, 0.1),
    ParamSpec::new("Chorus depth", 0.0, 0.0, 1.0, 0.1),
    ParamSpec::new("Chorus rate", 2.0, 0.1, 10.0, 0.5),
    ParamSpec::new("Bit depth", 12.0, 4.0, 16.0, 1.0).inverted(),
    ParamSpec::new("Filter cutoff", 1.0, 0.1, 1.0, 0.1),
    ParamSpec::new("Reverb", 0.0, 0.0, 1.0, 0.1),
    ParamSpec::new("Delay mix", 0.0, 0.0, 0.8, 0.1),
    ParamSpec::new("Delay time", 0.3, 0.05, 1.0, 0.05),
    ParamSpec::new("Ring mod", 0.0, 0.0, 10.0, 0.5),
    ParamSpec::new("Tremolo depth", 0.0, 0.0, 1.0, 0.1),
    ParamSpec::new("Tremolo rate", 4.0, 0.5, 20.0, 1.0),
    ParamSpec::new("Phaser", 0.0, 0.0, 1.0, 0.1),
    ParamSpec::new("Volume", 0.35, 0.05, 0.8, 0.05),
];

impl ParamId {
    pub const COUNT: usize = 14;

    pub const ALL: [ParamId; ParamId::COUNT] = [
        ParamId::Harmonics,
        ParamId::Distortion,
        ParamId::ChorusDepth,
        ParamId::ChorusRate,
        ParamId::BitDepth,
        ParamId::FilterCutoff,
        ParamId::ReverbLevel,
        ParamId::DelayMix,
        ParamId::DelayTime,
        ParamId::RingMod,
        ParamId::TremoloDepth,
        ParamId::TremoloRate,
        ParamId::PhaserDepth,
        ParamId::Volume,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn spec(self) -> &'static ParamSpec {
        &SPECS[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }
}
