//! Load logging for the dataset and the pipeline artifact
//!
//! Both files are re-read on every render, so each load leaves a start line
//! and a completion line carrying the row or tree count and the load time.

use std::path::Path;
use std::time::Duration;

/// Announce that `path` is about to be read
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{operation} {}", path.display());
}

/// Record a finished load
///
/// `items` is what the file yielded: dataset rows or ensemble trees.
pub fn log_operation_complete(operation: &str, path: &Path, items: usize, elapsed: Option<Duration>) {
    match elapsed {
        Some(duration) => log::info!("{} {operation} {items} items in {duration:?}", path.display()),
        None => log::info!("{} {operation} {items} items", path.display()),
    }
}

/// Warn about a recoverable problem, naming the file when there is one
pub fn log_warning(message: &str, path: Option<&Path>) {
    match path {
        Some(path) => log::warn!("{message} ({})", path.display()),
        None => log::warn!("{message}"),
    }
}
