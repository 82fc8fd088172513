//! Log output for a full-screen terminal app.
//!
//! The UI owns the alternate screen, so formatted events go to a file and
//! never to stderr. `RUST_LOG` selects what is recorded; without it nothing
//! is written and the file is not created.

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

/// Used when neither `--log-file` nor `INTUITION_LOG_FILE` is given.
pub const DEFAULT_LOG_FILE: &str = "intuition.log";

#[derive(Debug, thiserror::Error)]
#[error("cannot open log file {path}: {source}")]
pub struct LogError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Open `path` for appending, creating it if needed.
///
/// # Errors
///
/// Returns [`LogError`] when the file cannot be opened.
pub fn open(path: &Path) -> Result<File, LogError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LogError { path: path.to_path_buf(), source })
}

/// Plain-text subscriber writing to `file`.
#[must_use]
pub fn subscriber(file: File, filter: EnvFilter) -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt().with_writer(Mutex::new(file)).with_ansi(false).with_env_filter(filter).finish()
}

/// Install the global subscriber when `RUST_LOG` is set.
///
/// # Errors
///
/// Returns [`LogError`] when logging was requested but the file cannot be
/// opened.
pub fn init(path: &Path) -> Result<(), LogError> {
    let Ok(filter) = EnvFilter::try_from_default_env() else {
        return Ok(());
    };
    let file = open(path)?;
    if let Err(e) = tracing::subscriber::set_global_default(subscriber(file, filter)) {
        eprintln!("logging disabled: {e}");
    }
    Ok(())
}
