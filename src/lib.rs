pub mod control; // Control-line parsing and key bindings
pub mod dsp;
pub mod engine; // Per-block orchestration
pub mod graph; // Fixed-order effect stages
pub mod params;

pub use engine::{AudioEngine, BlockStream, EngineConfig};
pub use params::{ParamId, ParamSnapshot, ParameterStore};

pub const MAX_BLOCK_SIZE: usize = 2048;
pub const DEFAULT_SAMPLE_RATE: f32 = 44_100.0;
pub const DEFAULT_BLOCK_SIZE: usize = 1024;
