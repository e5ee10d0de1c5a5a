use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// Top-level failures of the terminal front end.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to open log file: {0}")]
    Logging(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
