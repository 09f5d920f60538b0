//! SaavyMono - application builder and runner

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use crossterm::event::{self, Event};
use crossterm::terminal;
use rtrb::{Consumer, RingBuffer};

use saavy_mono::control::{self, keymap::key_for, ControlEvent};
use saavy_mono::dsp::oscillator::{Waveform, WaveformGenerator, DEFAULT_NOISE_SEED};
use saavy_mono::params::ParamId;
use saavy_mono::{AudioEngine, BlockStream, EngineConfig, ParameterStore, DEFAULT_BLOCK_SIZE};

use super::input::{self, ControlSource, KeyAction};

const CONTROL_QUEUE: usize = 256;
const FAULT_QUEUE: usize = 16;
const POLL_INTERVAL: Duration = Duration::from_millis(16);
const STATUS_INTERVAL: Duration = Duration::from_secs(2);

/// An error reported by the output device after the stream started.
#[derive(Debug, Clone)]
struct StreamFault(String);

impl fmt::Display for StreamFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw mode for the lifetime of the guard.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> EyreResult<Self> {
        terminal::enable_raw_mode().wrap_err("failed to enable raw terminal mode")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            log::warn!("failed to restore terminal: {err}");
        }
    }
}

/// Main application builder
pub struct SaavyMono {
    sample_rate: Option<u32>,
    block_size: usize,
    control: Option<ControlSource>,
    keyboard: bool,
    seed: u64,
}

impl SaavyMono {
    pub fn new() -> Self {
        Self {
            sample_rate: None,
            block_size: DEFAULT_BLOCK_SIZE,
            control: None,
            keyboard: true,
            seed: DEFAULT_NOISE_SEED,
        }
    }

    /// Ask the device for this rate instead of its default
    pub fn sample_rate(mut self, rate: u32) -> Self {
        self.sample_rate = Some(rate);
        self
    }

    pub fn block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    /// Read controller lines from `path` (`-` for stdin)
    pub fn control(mut self, path: PathBuf) -> Self {
        self.control = Some(ControlSource::from_arg(&path));
        self
    }

    pub fn keyboard(mut self, enabled: bool) -> Self {
        self.keyboard = enabled;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Run the application (takes over, plays audio)
    pub fn run(self) -> EyreResult<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let supported = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;
        if supported.sample_format() != cpal::SampleFormat::F32 {
            return Err(eyre!(
                "output device uses {:?} samples, only f32 is supported",
                supported.sample_format()
            ));
        }

        let mut stream_config: cpal::StreamConfig = supported.into();
        if let Some(rate) = self.sample_rate {
            stream_config.sample_rate = cpal::SampleRate(rate);
        }
        let sample_rate = stream_config.sample_rate.0 as f32;
        let channels = stream_config.channels as usize;

        let config = EngineConfig::new(sample_rate, self.block_size);
        if config.block_size != self.block_size {
            log::warn!(
                "block size {} out of range, using {}",
                self.block_size,
                config.block_size
            );
        }

        log::info!("=== Saavy Mono ===");
        log::info!("Sample rate: {} Hz", config.sample_rate);
        log::info!("Channels: {}", channels);
        log::info!("Block size: {} samples", config.block_size);

        let store = Arc::new(ParameterStore::new());
        let generator = WaveformGenerator::with_seed(config.sample_rate, self.seed);
        let mut stream = BlockStream::new(AudioEngine::with_generator(
            config,
            Arc::clone(&store),
            generator,
        ));

        let (mut fault_tx, mut fault_rx) = RingBuffer::<StreamFault>::new(FAULT_QUEUE);
        let output = device
            .build_output_stream(
                &stream_config,
                move |data: &mut [f32], _| stream.fill(data, channels),
                move |err| {
                    let _ = fault_tx.push(StreamFault(err.to_string()));
                },
                None,
            )
            .wrap_err("failed to build output stream")?;
        output.play().wrap_err("failed to start output stream")?;

        let (control_tx, mut control_rx) = RingBuffer::<ControlEvent>::new(CONTROL_QUEUE);
        let mut keyboard = self.keyboard;
        let reader = match self.control {
            Some(source) => {
                if source == ControlSource::Stdin && keyboard {
                    log::warn!("controller is on stdin, key bindings disabled");
                    keyboard = false;
                }
                log::info!("Control input: {:?}", source);
                let handle = input::spawn_control_reader(source, control_tx)
                    .wrap_err("failed to open control input")?;
                Some(handle)
            }
            None => None,
        };

        if keyboard {
            print_key_help();
        }
        let _raw_mode = if keyboard {
            Some(RawModeGuard::enable()?)
        } else {
            None
        };

        let result = main_loop(&store, &mut control_rx, &mut fault_rx, keyboard, reader);

        drop(output);
        log::info!("Stopped");
        result
    }
}

impl Default for SaavyMono {
    fn default() -> Self {
        Self::new()
    }
}

/// Single writer of the store: applies key and controller events until
/// quit, end of controller input, or a device fault.
fn main_loop(
    store: &ParameterStore,
    control_rx: &mut Consumer<ControlEvent>,
    fault_rx: &mut Consumer<StreamFault>,
    keyboard: bool,
    reader: Option<std::thread::JoinHandle<()>>,
) -> EyreResult<()> {
    let mut last_status = Instant::now();

    loop {
        if let Ok(fault) = fault_rx.pop() {
            log::error!("audio device error: {fault}");
            return Err(eyre!("audio device error: {fault}"));
        }

        control::drain(control_rx, store);

        if keyboard {
            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    match input::map_key(key) {
                        Some(KeyAction::Quit) => return Ok(()),
                        Some(KeyAction::Control(event)) => control::apply(store, event),
                        None => {}
                    }
                }
            }
        } else {
            std::thread::sleep(POLL_INTERVAL);
            if reader.as_ref().is_some_and(|handle| handle.is_finished()) {
                control::drain(control_rx, store);
                return Ok(());
            }
        }

        if last_status.elapsed() >= STATUS_INTERVAL {
            log_status(store);
            last_status = Instant::now();
        }
    }
}

fn log_status(store: &ParameterStore) {
    let display = store.display();
    log::debug!(
        "{} | {:.1} Hz | cutoff {:.2} | joystick {},{}",
        store.waveform().name(),
        display.current_frequency,
        display.current_cutoff,
        display.joystick_x,
        display.joystick_y
    );
}

fn print_key_help() {
    log::info!("Keys (upper = up, lower = down):");
    for id in ParamId::ALL {
        let spec = id.spec();
        log::info!(
            "  {}/{}  {:<14} {:.2} in [{}, {}]",
            key_for(id).to_ascii_uppercase(),
            key_for(id),
            spec.name,
            spec.default,
            spec.min,
            spec.max
        );
    }
    let names: Vec<&str> = Waveform::ALL.iter().map(|w| w.name()).collect();
    log::info!("  1-8  waveform: {}", names.join(" "));
    log::info!("  space reset effects, Esc quits");
}
