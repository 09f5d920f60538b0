//! Control input: the controller's line protocol, the keyboard bindings,
//! and the one event type both produce.
//!
//! Producers run off the audio thread. They hand `ControlEvent`s to
//! whichever thread owns writing the [`ParameterStore`], usually over an
//! `rtrb` ring read through [`MessageReceiver`].

pub mod keymap;
pub mod message;

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::params::{Direction, ParamId, ParameterStore};

pub use keymap::key_event;
pub use message::{joystick_to_cutoff, parse_control_line, ControlParseError, ControlUpdate};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    /// A full controller reading
    Update(ControlUpdate),
    Nudge(ParamId, Direction),
    SelectWaveform(u8),
    /// Every table parameter back to its default
    Reset,
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<ControlEvent>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<ControlEvent> {
    fn pop(&mut self) -> Option<ControlEvent> {
        Consumer::pop(self).ok()
    }
}

/// Write one event into the store.
pub fn apply(store: &ParameterStore, event: ControlEvent) {
    match event {
        ControlEvent::Update(update) => {
            store.set_target_frequency(update.frequency as f32);
            store.set_joystick(update.joystick_x, update.joystick_y);
            store.set(ParamId::FilterCutoff, joystick_to_cutoff(update.joystick_y));
            let waveform = store.set_waveform(update.selector);
            log::trace!(
                "control: {} Hz, y={}, {}",
                update.frequency,
                update.joystick_y,
                waveform.name()
            );
        }
        ControlEvent::Nudge(id, direction) => {
            let value = store.nudge(id, direction);
            log::info!("{}: {:.2}", id.name(), value);
        }
        ControlEvent::SelectWaveform(selector) => {
            let waveform = store.set_waveform(i64::from(selector));
            log::info!("Waveform: {}", waveform.name());
        }
        ControlEvent::Reset => {
            store.reset();
            log::info!("All effects reset");
        }
    }
}

/// Drain every queued event into the store. Returns how many were applied.
pub fn drain<R: MessageReceiver + ?Sized>(receiver: &mut R, store: &ParameterStore) -> usize {
    let mut applied = 0;
    while let Some(event) = receiver.pop() {
        apply(store, event);
        applied += 1;
    }
    applied
}
