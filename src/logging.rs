use std::fs::{self, File};
use std::path::{Path, PathBuf};

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::AppError;

const APP_DIR_NAME: &str = "term-snake";
const LOG_FILE_NAME: &str = "term-snake.log";

/// Returns the platform-correct default log file path.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

/// Installs a file logger at `path`, creating parent directories when needed.
///
/// The terminal is owned by the game while it runs, so log output never goes
/// to stdout or stderr.
pub fn init(path: &Path, verbose: bool) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    WriteLogger::init(level, Config::default(), File::create(path)?)?;

    Ok(())
}
