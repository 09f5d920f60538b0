//! saavy-mono - realtime monophonic synth voice with a fixed effects rack
//!
//! Run with: cargo run --bin saavy-mono -- --control /dev/ttyACM0

mod app;
mod input;

use std::io::Write;
use std::path::PathBuf;

use app::SaavyMono;
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Output sample rate in Hz (default: the device's own rate)
    #[clap(long, value_parser)]
    sample_rate: Option<u32>,

    /// Samples per engine block
    #[clap(long, value_parser, default_value_t = saavy_mono::DEFAULT_BLOCK_SIZE)]
    block_size: usize,

    /// Read controller lines (`freq,x,y,waveform`) from a file or device; `-` for stdin
    #[clap(long, value_parser)]
    control: Option<PathBuf>,

    /// Do not take over the terminal for key bindings
    #[clap(long, value_parser)]
    no_keyboard: bool,

    /// Seed for the noise waveform
    #[clap(long, value_parser)]
    seed: Option<u64>,
}

/// Log to stderr with `\r\n` endings so lines stay readable in raw mode.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            write!(
                buf,
                "[{} {}] {}\r\n",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_logging();
    let args = Args::parse();

    let mut app = SaavyMono::new()
        .block_size(args.block_size)
        .keyboard(!args.no_keyboard);
    if let Some(rate) = args.sample_rate {
        app = app.sample_rate(rate);
    }
    if let Some(path) = args.control {
        app = app.control(path);
    }
    if let Some(seed) = args.seed {
        app = app.seed(seed);
    }
    app.run()
}
