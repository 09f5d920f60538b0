use thiserror::Error;

/*
Control Line Protocol
=====================

The hardware controller sends one line per reading:

    frequency_hz,joystick_x,joystick_y,waveform_selector

e.g. `523,512,1023,1`. All four fields are integers; each is trimmed of
surrounding whitespace first. Fields past the fourth are ignored. Joystick
axes run 0-1023, and Y sets the filter cutoff:

    cutoff = 0.1 + 0.9 · y / 1023

Anything else is a parse error and the line is dropped by the caller.
*/

/// One decoded controller reading. Values are raw; the store clamps them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlUpdate {
    pub frequency: i64,
    pub joystick_x: i64,
    pub joystick_y: i64,
    pub selector: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlParseError {
    #[error("empty control line")]
    Empty,
    #[error("expected at least 4 fields, found {found}")]
    FieldCount { found: usize },
    #[error("field {field} is not an integer: {value:?}")]
    InvalidField { field: &'static str, value: String },
}

const FIELDS: [&str; 4] = ["frequency", "joystick_x", "joystick_y", "waveform"];

pub fn parse_control_line(line: &str) -> Result<ControlUpdate, ControlParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ControlParseError::Empty);
    }

    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() < FIELDS.len() {
        return Err(ControlParseError::FieldCount { found: parts.len() });
    }

    let mut values = [0i64; 4];
    for ((slot, raw), field) in values.iter_mut().zip(&parts).zip(FIELDS) {
        let raw = raw.trim();
        *slot = raw.parse().map_err(|_| ControlParseError::InvalidField {
            field,
            value: raw.to_string(),
        })?;
    }

    let [frequency, joystick_x, joystick_y, selector] = values;
    Ok(ControlUpdate {
        frequency,
        joystick_x,
        joystick_y,
        selector,
    })
}

pub const CUTOFF_AT_BOTTOM: f32 = 0.1;
pub const CUTOFF_AT_TOP: f32 = 1.0;

/// Map joystick Y (0-1023) linearly onto the filter cutoff, holding the
/// ends for readings outside the axis.
pub fn joystick_to_cutoff(y: i64) -> f32 {
    let max = f32::from(crate::params::JOYSTICK_MAX);
    let t = (y as f32 / max).clamp(0.0, 1.0);
    CUTOFF_AT_BOTTOM + (CUTOFF_AT_TOP - CUTOFF_AT_BOTTOM) * t
}
