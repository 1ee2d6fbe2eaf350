//! Fixed schemas for the job-salary dataset and the prediction record.

use std::sync::{Arc, LazyLock};

use arrow_schema::{DataType, Field, Schema, SchemaRef};

pub const WORK_YEAR: &str = "work_year";
pub const JOB_TITLE: &str = "job_title";
pub const JOB_CATEGORY: &str = "job_category";
pub const SALARY_CURRENCY: &str = "salary_currency";
pub const SALARY: &str = "salary";
pub const SALARY_IN_USD: &str = "salary_in_usd";
pub const EMPLOYEE_RESIDENCE: &str = "employee_residence";
pub const EXPERIENCE_LEVEL: &str = "experience_level";
pub const EMPLOYMENT_TYPE: &str = "employment_type";
pub const WORK_SETTING: &str = "work_setting";
pub const COMPANY_LOCATION: &str = "company_location";
pub const COMPANY_SIZE: &str = "company_size";

/// Dataset columns in file order
pub const DATASET_COLUMNS: [&str; 12] = [
    WORK_YEAR,
    JOB_TITLE,
    JOB_CATEGORY,
    SALARY_CURRENCY,
    SALARY,
    SALARY_IN_USD,
    EMPLOYEE_RESIDENCE,
    EXPERIENCE_LEVEL,
    EMPLOYMENT_TYPE,
    WORK_SETTING,
    COMPANY_LOCATION,
    COMPANY_SIZE,
];

/// Columns fed to the inference pipeline, in the order the record is assembled
pub const PREDICTOR_COLUMNS: [&str; 9] = [
    WORK_YEAR,
    JOB_TITLE,
    JOB_CATEGORY,
    EMPLOYEE_RESIDENCE,
    EXPERIENCE_LEVEL,
    EMPLOYMENT_TYPE,
    WORK_SETTING,
    COMPANY_LOCATION,
    COMPANY_SIZE,
];

fn column_type(name: &str) -> DataType {
    match name {
        WORK_YEAR => DataType::Int64,
        SALARY | SALARY_IN_USD => DataType::Float64,
        _ => DataType::Utf8,
    }
}

fn build_schema(columns: &[&str]) -> SchemaRef {
    Arc::new(Schema::new(
        columns
            .iter()
            .map(|name| Field::new(*name, column_type(name), true))
            .collect::<Vec<_>>(),
    ))
}

static JOB_SCHEMA: LazyLock<SchemaRef> = LazyLock::new(|| build_schema(&DATASET_COLUMNS));
static PREDICTOR_SCHEMA: LazyLock<SchemaRef> =
    LazyLock::new(|| build_schema(&PREDICTOR_COLUMNS));

/// Schema of the job-salary dataset
#[must_use]
pub fn job_schema() -> SchemaRef {
    Arc::clone(&JOB_SCHEMA)
}

/// Schema of the single-row record passed to the inference pipeline
#[must_use]
pub fn predictor_schema() -> SchemaRef {
    Arc::clone(&PREDICTOR_SCHEMA)
}

/// Whether a predictor column carries numbers rather than categories
#[must_use]
pub fn is_numeric_column(name: &str) -> bool {
    column_type(name).is_numeric()
}
