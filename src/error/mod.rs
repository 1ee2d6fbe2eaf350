//! Error handling for the salary dashboard.

pub mod util;

use std::io;
use std::path::{Path, PathBuf};

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Specialized error type for dataset loading, inference and rendering
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// A file the render depends on does not exist
    #[error("File not found: {} (needed for: {purpose})", path.display())]
    MissingFile {
        /// The path that was looked up
        path: PathBuf,
        /// What the file was needed for
        purpose: String,
    },

    /// Error with file access that carries path context
    #[error("{message}: {}", path.display())]
    FileAccess {
        /// The path being accessed
        path: PathBuf,
        /// Description of what went wrong
        message: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Error processing Arrow data (including CSV parsing)
    #[error("Arrow error: {0}")]
    ArrowError(#[from] ArrowError),

    /// Error processing Parquet data
    #[error("Parquet error: {0}")]
    ParquetError(#[from] ParquetError),

    /// Error converting between Arrow batches and typed rows
    #[error("Row conversion error: {0}")]
    SerdeArrowError(#[from] serde_arrow::Error),

    /// Error parsing a JSON document
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error with the dataset contents or layout
    #[error("Dataset error: {0}")]
    DatasetError(String),

    /// Error with the inference pipeline artifact or its execution
    #[error("Pipeline error: {0}")]
    PipelineError(String),

    /// The encoder met a category it was configured to reject
    #[error("Unknown category '{value}' for column '{column}'")]
    UnknownCategory {
        /// Column being encoded
        column: String,
        /// The unseen value
        value: String,
    },

    /// A value outside an enumerated field's option set
    #[error("Invalid value '{value}' for {field}")]
    InvalidField {
        /// Name of the field
        field: &'static str,
        /// The rejected value
        value: String,
    },

    /// The pipeline returned no output for the record
    #[error("Pipeline returned no prediction")]
    EmptyPrediction,

    /// A blocking render task failed to complete
    #[error("Render task failed: {0}")]
    TaskError(String),
}

impl DashboardError {
    /// Create a dataset error
    pub fn dataset(message: impl Into<String>) -> Self {
        Self::DatasetError(message.into())
    }

    /// Create a pipeline error
    pub fn pipeline(message: impl Into<String>) -> Self {
        Self::PipelineError(message.into())
    }

    /// Create a missing file error
    pub fn missing_file(path: &Path, purpose: impl Into<String>) -> Self {
        Self::MissingFile {
            path: path.to_path_buf(),
            purpose: purpose.into(),
        }
    }

    /// Create a file access error that keeps the underlying IO error
    pub fn file_access(path: &Path, message: impl Into<String>, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.to_path_buf(),
            message: message.into(),
            source,
        }
    }
}

/// Result type for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
