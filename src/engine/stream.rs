use crate::engine::AudioEngine;

/*
Block Stream
============

The audio device asks for whatever buffer size it likes, interleaved
over however many channels it has. The engine wants whole blocks of the
configured size. `BlockStream` sits between them: it renders a block,
hands it out frame by frame (the mono sample copied to every channel),
and renders the next block only when the last one is used up.

Leftover samples wait for the next callback, so the engine always sees
exactly `block_size` samples per call no matter how the device slices
its requests.
*/

pub struct BlockStream {
    engine: AudioEngine,
    block: Vec<f32>,
    cursor: usize,
    blocks_rendered: u64,
}

impl BlockStream {
    pub fn new(engine: AudioEngine) -> Self {
        let block_size = engine.config().block_size;
        Self {
            engine,
            block: vec![0.0; block_size],
            // Start drained so the first frame triggers a render
            cursor: block_size,
            blocks_rendered: 0,
        }
    }

    pub fn blocks_rendered(&self) -> u64 {
        self.blocks_rendered
    }

    /// Samples of the current block not yet handed out.
    pub fn buffered(&self) -> usize {
        self.block.len() - self.cursor
    }

    /// Fill an interleaved device buffer with `channels` channels.
    pub fn fill(&mut self, data: &mut [f32], channels: usize) {
        if channels == 0 {
            return;
        }

        for frame in data.chunks_mut(channels) {
            if self.cursor == self.block.len() {
                self.engine.process_block(&mut self.block);
                self.cursor = 0;
                self.blocks_rendered += 1;
            }
            frame.fill(self.block[self.cursor]);
            self.cursor += 1;
        }
    }
}
