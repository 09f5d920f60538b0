/// Fixed-capacity circular buffer with a single write cursor.
///
/// The capacity is chosen once at construction and never changes, so the
/// line can live on the audio thread without reallocating. Reads look back
/// from the write cursor by an offset clamped to `[1, capacity - 1]`.
pub struct DelayLine {
    buffer: Vec<f32>,
    write_pos: usize,
}

impl DelayLine {
    /// Create a line holding `capacity` samples (at least 2).
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: vec![0.0; capacity.max(2)],
            write_pos: 0,
        }
    }

    /// Create a line long enough for `seconds` of audio at `sample_rate`.
    pub fn with_seconds(seconds: f32, sample_rate: f32) -> Self {
        let capacity = (seconds * sample_rate).max(0.0) as usize;
        Self::new(capacity)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn write_pos(&self) -> usize {
        self.write_pos
    }

    /// Clamp a requested look-back to the readable range.
    #[inline]
    pub fn clamp_offset(&self, offset: usize) -> usize {
        offset.clamp(1, self.buffer.len() - 1)
    }

    /// Read the sample written `offset` samples before the cursor.
    #[inline]
    pub fn read(&self, offset: usize) -> f32 {
        let len = self.buffer.len();
        let offset = self.clamp_offset(offset);
        self.buffer[(self.write_pos + len - offset) % len]
    }

    /// Write at the cursor and advance it.
    ///
    /// Non-finite samples are stored as silence so one bad block cannot
    /// keep recirculating through a feedback path.
    #[inline]
    pub fn write(&mut self, sample: f32) {
        self.buffer[self.write_pos] = if sample.is_finite() { sample } else { 0.0 };
        self.write_pos = (self.write_pos + 1) % self.buffer.len();
    }

    pub fn reset(&mut self) {
        self.buffer.fill(0.0);
        self.write_pos = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_back_by_offset() {
        let mut line = DelayLine::new(8);
        for i in 1..=4 {
            line.write(i as f32);
        }
        // Last write was 4.0, one sample back from the cursor
        assert_eq!(line.read(1), 4.0);
        assert_eq!(line.read(3), 2.0);
    }

    #[test]
    fn test_offset_clamped_to_capacity() {
        let mut line = DelayLine::new(4);
        line.write(1.0);
        line.write(2.0);
        // Offset 0 behaves as 1
        assert_eq!(line.read(0), 2.0);
        // Offset beyond capacity behaves as capacity - 1
        assert_eq!(line.read(100), line.read(3));
    }

    #[test]
    fn test_cursor_wraps() {
        let mut line = DelayLine::new(3);
        for i in 0..7 {
            line.write(i as f32);
        }
        assert_eq!(line.write_pos(), 7 % 3);
        assert_eq!(line.read(1), 6.0);
        assert_eq!(line.read(2), 5.0);
    }

    #[test]
    fn test_capacity_from_seconds() {
        let line = DelayLine::with_seconds(0.05, 44_100.0);
        assert_eq!(line.capacity(), 2205);
    }

    #[test]
    fn test_non_finite_writes_become_silence() {
        let mut line = DelayLine::new(4);
        line.write(f32::NAN);
        line.write(f32::INFINITY);
        assert_eq!(line.read(1), 0.0);
        assert_eq!(line.read(2), 0.0);
    }

    #[test]
    fn test_reset_clears() {
        let mut line = DelayLine::new(4);
        line.write(0.5);
        line.reset();
        assert_eq!(line.write_pos(), 0);
        assert_eq!(line.read(1), 0.0);
    }
}
