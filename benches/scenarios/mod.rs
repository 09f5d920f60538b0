//! Real-world scenario benchmarks.
//!
//! Each stage on its own at a typical setting, the whole chain with every
//! stage active, and complete engine blocks as the audio callback runs them.

mod engine;
mod stages;

pub use engine::bench_engine;
pub use stages::bench_stages;
