// error.rs

use std::path::PathBuf;

pub type Result<T> = core::result::Result<T, Sha512Error>;

#[derive(thiserror::Error, Debug)]
pub enum Sha512Error {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid path: {}", path.display())]
    InvalidPath { path: PathBuf },

    #[error("Path is a directory, must be a file: {}", path.display())]
    IsDirectory { path: PathBuf },

    #[error("Unknown path type, must be a file: {}", path.display())]
    NotRegularFile { path: PathBuf },

    #[error("Unable to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
