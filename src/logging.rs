//! Tracing subscriber setup
//!
//! `RUST_LOG` wins over the level passed on the command line.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Log to stderr, for the line-based commands
pub fn init_stderr(default_level: &str) {
    // Ignore a second initialization
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Log to a file, for the TUI where stderr would corrupt the screen
///
/// # Errors
///
/// Returns an I/O error if the log file cannot be created.
pub fn init_file<P: AsRef<Path>>(default_level: &str, path: P) -> std::io::Result<()> {
    let log_file = File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(default_level))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
