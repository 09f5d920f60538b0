use crate::control::ControlEvent;
use crate::params::{Direction, ParamId};

/*
Key Bindings
============

  H/h harmonics       D/d distortion      C/c chorus depth
  R/r chorus rate     B/b bit depth       L/l filter cutoff
  E/e reverb          Y/y delay mix       T/t delay time
  M/m ring mod        O/o tremolo depth   P/p tremolo rate
  A/a phaser          V/v volume

  1-8   waveform (saw, sine, square, tri, pulse, noise, pwm, ramp)
  space reset every effect to its default

Uppercase steps up, lowercase steps down. Bit depth runs backwards: `B`
lowers the depth for more crunch.
*/

const BINDINGS: [(char, ParamId); ParamId::COUNT] = [
    ('h', ParamId::Harmonics),
    ('d', ParamId::Distortion),
    ('c', ParamId::ChorusDepth),
    ('r', ParamId::ChorusRate),
    ('b', ParamId::BitDepth),
    ('l', ParamId::FilterCutoff),
    ('e', ParamId::ReverbLevel),
    ('y', ParamId::DelayMix),
    ('t', ParamId::DelayTime),
    ('m', ParamId::RingMod),
    ('o', ParamId::TremoloDepth),
    ('p', ParamId::TremoloRate),
    ('a', ParamId::PhaserDepth),
    ('v', ParamId::Volume),
];

/// Translate a typed character into a control event.
pub fn key_event(key: char) -> Option<ControlEvent> {
    match key {
        ' ' => return Some(ControlEvent::Reset),
        '1'..='8' => return Some(ControlEvent::SelectWaveform(key as u8 - b'1')),
        _ => {}
    }

    let lower = key.to_ascii_lowercase();
    let (_, id) = BINDINGS.iter().find(|(c, _)| *c == lower)?;
    let direction = if key.is_ascii_uppercase() {
        Direction::Up
    } else {
        Direction::Down
    };
    Some(ControlEvent::Nudge(*id, direction))
}

/// The key bound to a parameter (lowercase).
pub fn key_for(id: ParamId) -> char {
    BINDINGS
        .iter()
        .find(|(_, bound)| *bound == id)
        .map(|(c, _)| *c)
        .unwrap_or('?')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_parameter_has_a_key() {
        for id in ParamId::ALL {
            let key = key_for(id);
            assert_ne!(key, '?', "{id:?}");
            assert_eq!(key_event(key), Some(ControlEvent::Nudge(id, Direction::Down)));
            assert_eq!(
                key_event(key.to_ascii_uppercase()),
                Some(ControlEvent::Nudge(id, Direction::Up))
            );
        }
    }

    #[test]
    fn test_number_keys_select_waveforms() {
        assert_eq!(key_event('1'), Some(ControlEvent::SelectWaveform(0)));
        assert_eq!(key_event('8'), Some(ControlEvent::SelectWaveform(7)));
        assert_eq!(key_event('9'), None);
        assert_eq!(key_event('0'), None);
    }

    #[test]
    fn test_space_resets_and_unbound_keys_are_ignored() {
        assert_eq!(key_event(' '), Some(ControlEvent::Reset));
        assert_eq!(key_event('x'), None);
        assert_eq!(key_event('Q'), None);
    }
}
