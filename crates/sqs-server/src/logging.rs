//! Log sink setup.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("empty log file name")]
    EmptyFileName,

    #[error("creating log file {path}: {source}")]
    CreateFile {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("installing tracing subscriber: {0}")]
    Subscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Create (or truncate) the log file.
pub fn open_log_file(path: impl AsRef<Path>) -> Result<File, LoggingError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(LoggingError::EmptyFileName);
    }

    File::create(path).map_err(|source| LoggingError::CreateFile {
        path: path.display().to_string(),
        source,
    })
}

/// Install the global subscriber writing to `path`.
///
/// Respects `RUST_LOG`, defaults to INFO.
pub fn init(path: impl AsRef<Path>) -> Result<(), LoggingError> {
    let file = open_log_file(path)?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
