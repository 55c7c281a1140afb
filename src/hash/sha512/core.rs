//! SHA-512 core hashing functions
//!
//! This module drives the SHA-512 hash over a byte source as defined in
//! FIPS 180-4.
//!
//! It provides:
//! - the compression function operating on 1024-bit blocks
//! - a whole-stream hashing function over any `std::io::Read` source
//! - an in-memory convenience wrapper for byte slices
//!
//! The driver is a single blocking call: blocks are read, scheduled and
//! compressed one at a time, and the hash state only becomes a digest once
//! the padded and sealed final block(s) have been compressed.

use std::io::Read;

use tracing::{debug, trace};

use crate::error::Result;
use crate::hash::sha512::computations::all_rounds;
use crate::hash::sha512::digest::Digest;
use crate::hash::sha512::padding::{Tail, finish};
use crate::hash::sha512::reader::{BlockReader, Chunk};
use crate::hash::sha512::schedule::expand;
use crate::hash::sha512::{BLOCK_SIZE, Block, H512_INIT};

/// Compresses a single 1024-bit message block.
///
/// This function performs the SHA-512 compression step on a single
/// 128-byte block, updating the hash state in place.
///
/// # Parameters
/// - `block`: A 1024-bit (128-byte) message block
/// - `state`: The current hash state (8 × 64-bit words)
pub fn compress(block: &Block, state: &mut [u64; 8]) {
    let w = expand(block);
    all_rounds(state, &w);
}

/// Driver state while walking the input.
enum Phase {
    /// Full blocks keep arriving.
    Streaming,

    /// The final content block has been padded. If it could not also hold
    /// the length, the tail carries the synthetic block that does.
    Finalizing(Tail),
}

/// Computes the SHA-512 hash of everything readable from `source`.
///
/// The source is read until it returns zero bytes. It is neither opened
/// nor closed here; pass `&mut reader` to keep using it afterwards.
///
/// # Errors
/// Returns [`Sha512Error::Io`](crate::error::Sha512Error::Io) if a read
/// fails for any reason other than an interruption. A failed read is never
/// mistaken for the end of the input.
pub fn sha512_stream<R: Read>(source: R) -> Result<Digest> {
    let mut reader = BlockReader::new(source);
    let mut state = H512_INIT;
    let mut block: Block = [0u8; BLOCK_SIZE];
    let mut blocks: u64 = 0;

    let tail = loop {
        let phase = match reader.next_block(&mut block)? {
            Chunk::Full => Phase::Streaming,
            Chunk::Last(valid) => {
                let tail = finish(&mut block, valid, reader.consumed());
                debug!(
                    bytes = reader.consumed(),
                    valid,
                    sealed = matches!(tail, Tail::Sealed),
                    "finalizing"
                );
                Phase::Finalizing(tail)
            }
        };

        trace!(block = blocks, "compressing block");
        compress(&block, &mut state);
        blocks += 1;

        if let Phase::Finalizing(tail) = phase {
            break tail;
        }
    };

    if let Tail::Overflow(extra) = tail {
        trace!(block = blocks, "compressing length block");
        compress(&extra, &mut state);
        blocks += 1;
    }

    debug!(blocks, bytes = reader.consumed(), "digest complete");

    Ok(Digest::from(state))
}

/// Computes the SHA-512 hash of the given input.
///
/// Full blocks are compressed straight out of `input`; the remainder is
/// padded and sealed exactly as [`sha512_stream`] does. Hashing a slice
/// cannot fail.
pub fn sha512(input: &[u8]) -> Digest {
    let mut state = H512_INIT;
    let mut chunks = input.chunks_exact(BLOCK_SIZE);

    for chunk in chunks.by_ref() {
        let mut block: Block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        compress(&block, &mut state);
    }

    let rest = chunks.remainder();
    let mut block: Block = [0u8; BLOCK_SIZE];
    block[..rest.len()].copy_from_slice(rest);

    if let Tail::Overflow(extra) = finish(&mut block, rest.len(), input.len() as u64) {
        compress(&block, &mut state);
        compress(&extra, &mut state);
    } else {
        compress(&block, &mut state);
    }

    Digest::from(state)
}
