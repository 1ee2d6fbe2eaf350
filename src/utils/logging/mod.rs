//! Logging utilities for render and load operations

pub mod log;

pub use log::{log_operation_complete, log_operation_start, log_warning};
