//! Hash algorithms exposed by the crate.
//!
//! Currently includes SHA-512 with a pure-Rust, block-at-a-time
//! implementation.

pub mod sha512;

/// Re-export of the SHA-512 entry points.
pub use sha512::{Digest, sha512, sha512_stream};
