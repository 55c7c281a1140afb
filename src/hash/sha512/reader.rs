//! Block reader
//!
//! Pulls fixed-size blocks out of a sequential byte source. A block is only
//! reported as the last one once the source returns zero bytes, so sources
//! that hand out short reads mid-stream (pipes, sockets, chunked readers)
//! still produce the same block sequence as a single contiguous read.

use std::io::{ErrorKind, Read};

use tracing::trace;

use super::{BLOCK_SIZE, Block};

/// Result of filling one block from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chunk {
    /// The block holds `BLOCK_SIZE` message bytes. The source may or may not
    /// have more.
    Full,

    /// The source is exhausted. The block holds this many message bytes,
    /// always fewer than `BLOCK_SIZE`.
    Last(usize),
}

/// Reads 128-byte blocks from `R` and counts the bytes consumed.
#[derive(Debug)]
pub struct BlockReader<R> {
    source: R,
    consumed: u64,
}

impl<R: Read> BlockReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            consumed: 0,
        }
    }

    /// Total number of message bytes read so far, modulo 2^64.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Fills `block` with the next bytes of the source.
    ///
    /// Interrupted reads are retried. Any other I/O error is returned as is
    /// and never treated as end of input.
    pub fn next_block(&mut self, block: &mut Block) -> std::io::Result<Chunk> {
        let mut filled = 0;

        while filled < BLOCK_SIZE {
            match self.source.read(&mut block[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {
                    trace!("read interrupted after {filled} bytes, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        self.consumed = self.consumed.wrapping_add(filled as u64);

        if filled == BLOCK_SIZE {
            Ok(Chunk::Full)
        } else {
            Ok(Chunk::Last(filled))
        }
    }
}
