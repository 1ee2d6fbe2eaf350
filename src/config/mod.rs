//! Configuration for the salary dashboard.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::utils::logging::log_warning;

/// Environment variable overriding the dataset path
pub const DATASET_ENV: &str = "SALARY_DASH_DATASET";
/// Environment variable overriding the pipeline artifact path
pub const PIPELINE_ENV: &str = "SALARY_DASH_PIPELINE";
/// Environment variable overriding the listen address
pub const ADDR_ENV: &str = "SALARY_DASH_ADDR";

/// Configuration for the dashboard
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Path of the job-salary dataset (CSV or Parquet)
    pub dataset_path: PathBuf,
    /// Path of the serialized inference pipeline
    pub pipeline_path: PathBuf,
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,
    /// Number of rows shown in the exploration preview
    pub preview_rows: usize,
    /// Number of residences kept in the salary-sum ranking
    pub top_n: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("data/cleaned_df.csv"),
            pipeline_path: PathBuf::from("data/gb_pipeline.json"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8501)),
            preview_rows: 10,
            top_n: 10,
        }
    }
}

impl DashboardConfig {
    /// Build a configuration from defaults overridden by the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from defaults overridden by `lookup`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(path) = lookup(DATASET_ENV) {
            cfg.dataset_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(PIPELINE_ENV) {
            cfg.pipeline_path = PathBuf::from(path);
        }
        if let Some(addr) = lookup(ADDR_ENV) {
            match addr.parse() {
                Ok(addr) => cfg.bind_addr = addr,
                Err(_) => log_warning(
                    &format!("Ignoring unparsable {ADDR_ENV}={addr}, using {}", cfg.bind_addr),
                    None,
                ),
            }
        }

        cfg
    }

    /// Replace the data file paths, keeping everything else
    #[must_use]
    pub fn with_paths(mut self, dataset: impl Into<PathBuf>, pipeline: impl Into<PathBuf>) -> Self {
        self.dataset_path = dataset.into();
        self.pipeline_path = pipeline.into();
        self
    }
}
