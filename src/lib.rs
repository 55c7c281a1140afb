//! SHA-512 digests of byte streams
//!
//! This crate computes the SHA-512 digest (FIPS 180-4) of an arbitrary byte
//! stream read incrementally from any `std::io::Read` source, and ships a
//! small `sha512sum` command line front end on top of it.
//!
//! # Module overview
//!
//! - `hash`
//!   The SHA-512 algorithm itself: block reading, padding and length
//!   sealing, message schedule expansion and the 80-round compression
//!   function. The whole-stream driver is a single blocking call returning
//!   eight 64-bit words.
//!
//! - `cli`
//!   The thin collaborator around the core: validates that a path names a
//!   regular file, opens it, hashes it and formats the result.
//!
//! - `error`
//!   The crate error type. The hash itself is total; only reading the
//!   source or validating a path can fail.
//!
//! # Example
//!
//! ```
//! let digest = sha512sum::sha512(b"abc");
//! assert!(digest.to_hex().starts_with("ddaf35a193617aba"));
//! ```

#![forbid(unsafe_code)]

pub mod cli;
pub mod error;
pub mod hash;

pub use error::{Result, Sha512Error};
pub use hash::{Digest, sha512, sha512_stream};
