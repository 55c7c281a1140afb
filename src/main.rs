// main.rs

#![forbid(unsafe_code)]

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use sha512sum::cli::{self, Args};

fn main() -> ExitCode {
    // logs go to stderr; stdout only carries digests
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    debug!("args: {args:?}");

    let stdout = io::stdout();
    match cli::run(&args, &mut stdout.lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("Unable to write output: {e}");
            ExitCode::FAILURE
        }
    }
}
