//! File-backed logging.
//!
//! The terminal belongs to the UI, so log lines go to ~/.flappy/flappy.log
//! instead of stderr.

use log::LevelFilter;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;

/// Install the global logger writing to `path`.
///
/// Returns `Ok(false)` when a logger was already installed; the first one
/// stays in place.
pub fn init_file_logger(path: &Path, level: LevelFilter) -> io::Result<bool> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let installed = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .is_ok();
    Ok(installed)
}
