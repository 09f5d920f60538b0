//! Control producers that run off the audio thread: the controller line
//! reader and the crossterm key mapping.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rtrb::Producer;
use saavy_mono::control::{key_event, parse_control_line, ControlEvent};

/// Where controller lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlSource {
    Stdin,
    Path(PathBuf),
}

impl ControlSource {
    pub fn from_arg(path: &Path) -> Self {
        if path == Path::new("-") {
            ControlSource::Stdin
        } else {
            ControlSource::Path(path.to_path_buf())
        }
    }

    fn open(&self) -> io::Result<Box<dyn BufRead + Send>> {
        Ok(match self {
            ControlSource::Stdin => Box::new(BufReader::new(io::stdin())),
            ControlSource::Path(path) => Box::new(BufReader::new(File::open(path)?)),
        })
    }
}

/// Parse every line from `reader` and queue the good ones. Returns how many
/// updates were queued.
///
/// Malformed lines are dropped, including ones that are not UTF-8 (serial
/// noise while the controller connects). A full queue drops the reading
/// too; the controller sends a fresh one every few milliseconds. Only EOF or
/// a read error ends the loop.
pub fn read_control_lines<R: BufRead>(
    mut reader: R,
    producer: &mut Producer<ControlEvent>,
) -> usize {
    let mut queued = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => {
                log::warn!("control input closed: {err}");
                break;
            }
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(err) => {
                log::debug!("ignoring control line {buf:?}: {err}");
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_control_line(line) {
            Ok(update) => {
                if producer.push(ControlEvent::Update(update)).is_ok() {
                    queued += 1;
                } else {
                    log::debug!("control queue full, dropping {line:?}");
                }
            }
            Err(err) => log::debug!("ignoring control line {line:?}: {err}"),
        }
    }
    queued
}

/// Open `source` and read it on its own thread until EOF.
pub fn spawn_control_reader(
    source: ControlSource,
    mut producer: Producer<ControlEvent>,
) -> io::Result<JoinHandle<()>> {
    let reader = source.open()?;
    thread::Builder::new()
        .name("control-reader".into())
        .spawn(move || {
            let queued = read_control_lines(reader, &mut producer);
            log::info!("control input finished after {queued} updates");
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Control(ControlEvent),
}

pub fn map_key(key: KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyAction::Quit)
        }
        KeyCode::Char(c) => key_event(c).map(KeyAction::Control),
        _ => None,
    }
}
