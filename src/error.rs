use std::io;

use thiserror::Error;

/// Failures at the process boundary. The game core itself never fails.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
