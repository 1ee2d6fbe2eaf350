//! The salary prediction operation
//!
//! The pipeline is trained on log salaries, so its raw output is exponentiated
//! once and rounded to cents before display.

use serde::Serialize;

use crate::error::{DashboardError, Result};
use crate::model::{InferencePipeline, PredictionRecord};
use crate::utils::round_to_cents;

/// Outcome of one prediction
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalaryPrediction {
    /// Raw pipeline output on the log-salary scale
    pub log_salary: f64,
    /// `exp(log_salary)` rounded to two decimals
    pub salary: f64,
}

impl SalaryPrediction {
    /// Build a prediction from the pipeline's raw output
    #[must_use]
    pub fn from_log_salary(log_salary: f64) -> Self {
        Self {
            log_salary,
            salary: round_to_cents(log_salary.exp()),
        }
    }

    /// The result sentence shown under the form
    #[must_use]
    pub fn message(&self) -> String {
        format!("The predicted result is: {}", format_salary(self.salary))
    }
}

/// Format a rounded salary, keeping one decimal for whole numbers
#[must_use]
pub fn format_salary(salary: f64) -> String {
    let text = salary.to_string();
    if salary.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

/// Predict the salary for one record
///
/// # Errors
/// Propagates pipeline failures (for example an encoder rejecting an unseen
/// category) and fails if the pipeline returns no value.
pub fn predict_salary(
    pipeline: &dyn InferencePipeline,
    record: &PredictionRecord,
) -> Result<SalaryPrediction> {
    let rows = record.to_record_batch()?;
    let outputs = pipeline.predict(&rows)?;
    let log_salary = outputs.first().copied().ok_or(DashboardError::EmptyPrediction)?;

    log::debug!("Pipeline output {log_salary} for {record:?}");
    Ok(SalaryPrediction::from_log_salary(log_salary))
}
