//! Diagnostic logging setup.
//! Appends to a dated log file under the configured log directory, so every
//! store operation and connection event can be inspected after the fact.

use crate::errors::AppResult;
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Initialize the file logger. Returns the path of the active log file.
/// The level can be overridden through the TTRACK_LOG environment variable.
pub fn init_file_logger(log_dir: &str) -> AppResult<PathBuf> {
    fs::create_dir_all(log_dir)?;

    let today = chrono::Local::now().date_naive();
    let path = Path::new(log_dir).join(format!("ttrack-{today}.log"));
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    // try_init: a second call (e.g. from tests) is not an error
    Builder::new()
        .target(Target::Pipe(Box::new(file)))
        .filter_level(LevelFilter::Info)
        .parse_env("TTRACK_LOG")
        .try_init()
        .ok();

    log::info!("--- starting ttrack session logger ---");
    Ok(path)
}
