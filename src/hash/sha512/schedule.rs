//! SHA-512 message schedule
//!
//! A block is read as 16 big-endian 64-bit words which are then expanded to
//! the 80 words consumed by the compression rounds. The schedule is rebuilt
//! from scratch for every block.

use super::computations::{small_sigma0, small_sigma1};
use super::{BLOCK_WORDS, Block, ROUNDS};

/// Interprets a block as 16 words, most significant byte first.
pub fn load_words(block: &Block) -> [u64; BLOCK_WORDS] {
    let mut w = [0u64; BLOCK_WORDS];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        *slot = u64::from_be_bytes(bytes);
    }

    w
}

/// Builds the full 80-word message schedule for one block.
pub fn expand(block: &Block) -> [u64; ROUNDS] {
    let mut w = [0u64; ROUNDS];
    w[..BLOCK_WORDS].copy_from_slice(&load_words(block));

    for i in BLOCK_WORDS..ROUNDS {
        w[i] = small_sigma1(w[i - 2])
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 16]);
    }

    w
}
