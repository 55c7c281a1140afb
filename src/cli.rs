//! Command line front end
//!
//! Validates each path, opens it, hashes it with the streaming core and
//! prints one line per file. The core never sees a path: it only receives
//! an open, buffered reader positioned at the start of the file, and the
//! handle is closed here once the digest is computed.

use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{error, info, warn};

use crate::error::{Result, Sha512Error};
use crate::hash::{Digest, sha512_stream};

/// Print SHA-512 (512-bit) checksums.
#[derive(Debug, Parser)]
#[command(name = "sha512sum", version)]
pub struct Args {
    /// Files to hash.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Emit BSD-style lines: `SHA512 (FILE) = HEX`.
    #[arg(long)]
    pub tag: bool,
}

/// Checks that `path` exists and names a regular file.
pub fn validate(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| {
        warn!("stat({path:?}) failed: {e}");
        Sha512Error::InvalidPath {
            path: path.to_path_buf(),
        }
    })?;

    if metadata.is_dir() {
        return Err(Sha512Error::IsDirectory {
            path: path.to_path_buf(),
        });
    }

    if !metadata.is_file() {
        return Err(Sha512Error::NotRegularFile {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

/// Validates, opens and hashes the file at `path`.
pub fn hash_file(path: &Path) -> Result<Digest> {
    validate(path)?;

    let file = File::open(path).map_err(|source| Sha512Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let digest = sha512_stream(BufReader::new(file))?;
    info!("{path:?}: {digest}");

    Ok(digest)
}

/// Formats one output line for `path`.
pub fn format_line(digest: &Digest, path: &Path, tag: bool) -> String {
    if tag {
        format!("SHA512 ({}) = {digest}", path.display())
    } else {
        format!("{digest}  {}", path.display())
    }
}

/// Hashes every file named in `args`, writing result lines to `out`.
///
/// Files that fail are reported on stderr and skipped. Returns `true` when
/// every file was hashed.
pub fn run<W: Write>(args: &Args, out: &mut W) -> std::io::Result<bool> {
    let mut all_ok = true;

    for path in &args.files {
        match hash_file(path) {
            Ok(digest) => writeln!(out, "{}", format_line(&digest, path, args.tag))?,
            Err(e) => {
                error!("{e}");
                eprintln!("sha512sum: {e}");
                all_ok = false;
            }
        }
    }

    out.flush()?;
    Ok(all_ok)
}
