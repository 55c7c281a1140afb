//! SHA-512 digest value
//!
//! The digest is the final hash state: eight 64-bit words in register
//! order. Its conventional rendering is 128 hexadecimal characters, each
//! word printed as a zero-padded 16-digit group.

use std::fmt::{self, Display, Formatter, LowerHex, UpperHex};

/// Final SHA-512 hash value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Digest([u64; 8]);

impl Digest {
    /// Length of the digest in bytes.
    pub const LEN: usize = 64;

    /// The eight output words, `registers[0]..registers[7]`.
    pub fn words(&self) -> [u64; 8] {
        self.0
    }

    /// Serializes the words big-endian, in register order.
    pub fn to_bytes(&self) -> [u8; Self::LEN] {
        let mut out = [0u8; Self::LEN];
        for (chunk, word) in out.chunks_exact_mut(8).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    /// Lowercase hexadecimal rendering.
    pub fn to_hex(&self) -> String {
        format!("{self:x}")
    }
}

impl From<[u64; 8]> for Digest {
    fn from(words: [u64; 8]) -> Self {
        Digest(words)
    }
}

impl From<Digest> for [u64; 8] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl From<Digest> for [u8; Digest::LEN] {
    fn from(digest: Digest) -> Self {
        digest.to_bytes()
    }
}

impl AsRef<[u64; 8]> for Digest {
    fn as_ref(&self) -> &[u64; 8] {
        &self.0
    }
}

impl LowerHex for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for word in self.0.iter() {
            write!(f, "{word:016x}")?;
        }
        Ok(())
    }
}

impl UpperHex for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for word in self.0.iter() {
            write!(f, "{word:016X}")?;
        }
        Ok(())
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(self, f)
    }
}
