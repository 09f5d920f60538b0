/// Context passed to effect stages during rendering
///
/// Contains information about what to render:
/// - sample_rate: Audio sample rate (e.g., 44100.0)
/// - frequency: Smoothed oscillator pitch for this block (Hz)
#[derive(Debug, Clone, Copy)]
pub struct RenderCtx {
    pub sample_rate: f32,
    pub frequency: f32,
}

impl RenderCtx {
    pub fn new(sample_rate: f32, frequency: f32) -> Self {
        Self {
            sample_rate,
            frequency,
        }
    }

    /// Block-local time of sample `index` in seconds.
    #[inline]
    pub fn local_time(&self, index: usize) -> f32 {
        index as f32 / self.sample_rate
    }
}

/// Core trait for the effect stages
///
/// Stages process a block in place. A bypassed stage must leave the block
/// and its own state exactly as they were.
pub trait GraphNode: Send {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx);

    /// Whether the current settings make this stage an identity.
    ///
    /// Default implementation: never bypassed.
    fn is_bypassed(&self) -> bool {
        false
    }

    /// Clear buffers and phases back to their construction state.
    ///
    /// Default implementation does nothing (stateless stages).
    fn reset(&mut self) {}
}

/// Replace non-finite control values with `fallback`.
///
/// Stage setters run this so a bad value degrades to a no-op instead of
/// reaching the audio math.
#[inline]
pub(crate) fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}
