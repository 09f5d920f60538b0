use std::sync::atomic::{AtomicU32, Ordering};

/// An `f32` cell shared between the control and audio threads.
///
/// Stored as raw bits in an `AtomicU32`. Every access is `Relaxed`: each
/// parameter stands alone, so there is no ordering to establish between
/// cells.
#[derive(Debug)]
pub struct AtomicF32(AtomicU32);

impl AtomicF32 {
    pub fn new(value: f32) -> Self {
        Self(AtomicU32::new(value.to_bits()))
    }

    #[inline]
    pub fn load(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn store(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

impl Default for AtomicF32 {
    fn default() -> Self {
        Self::new(0.0)
    }
}
