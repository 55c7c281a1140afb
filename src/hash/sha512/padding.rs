//! SHA-512 message padding
//!
//! The last block holding message bytes receives a `0x80` terminator
//! followed by zero fill ("padding"). The total message length in bits is
//! then written big-endian into the final 8 bytes ("sealing"), either in the
//! same block when at least 17 bytes follow the content, or in one extra
//! all-zero block otherwise.
//!
//! The standard reserves 128 bits for the length. Only the low 64 bits are
//! written; the upper 64 bits stay zero, which matches the standard for any
//! message shorter than 2^64 bits and wraps modulo 2^64 beyond that.

use super::{BLOCK_SIZE, Block};

/// Largest content length that still leaves room for the terminator byte
/// and the length field in the same block.
pub const MAX_SEALED_CONTENT: usize = BLOCK_SIZE - 17;

/// Offset of the 64-bit length trailer inside a block.
const LENGTH_OFFSET: usize = BLOCK_SIZE - 8;

/// How the final content block was completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tail {
    /// Terminator and length both fit into the final content block.
    Sealed,

    /// The final content block only holds the terminator. The carried block
    /// is all zero except for the length trailer and must be compressed
    /// after it.
    Overflow(Block),
}

/// Writes the `0x80` terminator at `valid` and zeroes everything after it.
///
/// `valid` must be below [`BLOCK_SIZE`].
pub fn pad(block: &mut Block, valid: usize) {
    debug_assert!(valid < BLOCK_SIZE);

    block[valid] = 0x80;
    block[valid + 1..].fill(0);
}

/// Writes the bit length of a `message_len` byte message into the last 8
/// bytes of `block`.
pub fn seal(block: &mut Block, message_len: u64) {
    let bit_len = message_len.wrapping_mul(8);
    block[LENGTH_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());
}

/// Pads the final content block and seals the message length.
///
/// `valid` is the number of message bytes at the start of `block` (below
/// [`BLOCK_SIZE`]), and `message_len` the total number of message bytes
/// read, including these.
pub fn finish(block: &mut Block, valid: usize, message_len: u64) -> Tail {
    pad(block, valid);

    if valid <= MAX_SEALED_CONTENT {
        seal(block, message_len);
        return Tail::Sealed;
    }

    let mut overflow = [0u8; BLOCK_SIZE];
    seal(&mut overflow, message_len);

    Tail::Overflow(overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(valid: usize) -> Block {
        let mut block = [0xAAu8; BLOCK_SIZE];
        block[..valid].fill(0x61);
        block
    }

    #[test]
    fn pad_overwrites_stale_bytes() {
        let mut block = filled(3);
        pad(&mut block, 3);

        assert_eq!(&block[..3], b"aaa");
        assert_eq!(block[3], 0x80);
        assert!(block[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn empty_message_block() {
        let mut block = filled(0);
        assert_eq!(finish(&mut block, 0, 0), Tail::Sealed);

        let mut expected = [0u8; BLOCK_SIZE];
        expected[0] = 0x80;
        assert_eq!(block, expected);
    }

    #[test]
    fn seals_in_place_up_to_111_bytes() {
        let mut block = filled(111);
        assert_eq!(finish(&mut block, 111, 111), Tail::Sealed);

        assert_eq!(block[111], 0x80);
        assert_eq!(&block[112..120], &[0u8; 8]);
        assert_eq!(&block[120..], &(111u64 * 8).to_be_bytes());
    }

    #[test]
    fn overflows_from_112_bytes() {
        for valid in [112, 120, 127] {
            let mut block = filled(valid);
            let total = 128 + valid as u64;

            let Tail::Overflow(extra) = finish(&mut block, valid, total) else {
                panic!("expected an overflow block for {valid} bytes");
            };

            assert_eq!(block[valid], 0x80);
            assert!(block[valid + 1..].iter().all(|&b| b == 0));

            assert!(extra[..120].iter().all(|&b| b == 0));
            assert_eq!(&extra[120..], &(total * 8).to_be_bytes());
        }
    }

    #[test]
    fn length_counts_whole_message() {
        let mut block = filled(5);
        finish(&mut block, 5, 3 * 128 + 5);

        assert_eq!(u64::from_be_bytes(block[120..].try_into().unwrap()), (3 * 128 + 5) * 8);
    }

    #[test]
    fn length_just_above_4_gib() {
        let mut block = [0u8; BLOCK_SIZE];
        seal(&mut block, (1 << 32) + 1);

        assert_eq!(&block[120..], &[0, 0, 0, 0x08, 0, 0, 0, 0x08]);
    }

    #[test]
    fn length_wraps_modulo_2_64() {
        let mut block = [0u8; BLOCK_SIZE];

        // 2^61 bytes is exactly 2^64 bits
        seal(&mut block, 1 << 61);
        assert_eq!(&block[120..], &[0u8; 8]);

        seal(&mut block, (1 << 61) + 3);
        assert_eq!(&block[120..], &24u64.to_be_bytes());

        seal(&mut block, u64::MAX);
        assert_eq!(&block[120..], &(u64::MAX - 7).to_be_bytes());
    }
}
