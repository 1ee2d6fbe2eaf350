#![allow(dead_code)]

use std::path::PathBuf;

use salary_dash::{
    CompanySize, DashboardConfig, EmploymentType, ExperienceLevel, PredictionRecord, WorkSetting,
    WorkYear,
};

/// Directory holding the test fixtures
#[must_use]
pub fn test_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

/// The 15-row sample dataset
#[must_use]
pub fn sample_dataset() -> PathBuf {
    test_data_dir().join("jobs_sample.csv")
}

/// A small binary-encoder plus two-tree pipeline artifact
#[must_use]
pub fn sample_pipeline() -> PathBuf {
    test_data_dir().join("pipeline.json")
}

/// Header line of the dataset file
pub const DATASET_HEADER: &str = "work_year,job_title,job_category,salary_currency,salary,salary_in_usd,\
employee_residence,experience_level,employment_type,work_setting,company_location,company_size";

/// Write a dataset with the given data lines under the temp directory
pub fn write_dataset(name: &str, lines: &[&str]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("salary-dash-{}-{name}.csv", std::process::id()));
    let mut content = format!("{DATASET_HEADER}\n");
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    std::fs::write(&path, content).unwrap();
    path
}

/// Configuration pointing at the fixtures
#[must_use]
pub fn test_config() -> DashboardConfig {
    DashboardConfig::default().with_paths(sample_dataset(), sample_pipeline())
}

/// Configuration pointing at files that do not exist
#[must_use]
pub fn missing_files_config() -> DashboardConfig {
    let dir = test_data_dir().join("missing");
    DashboardConfig::default().with_paths(dir.join("cleaned_df.csv"), dir.join("gb_pipeline.json"))
}

/// A record whose categories are all known to the sample pipeline
#[must_use]
pub fn senior_scientist() -> PredictionRecord {
    PredictionRecord {
        work_year: WorkYear::Y2023,
        job_title: "Data Scientist".to_string(),
        job_category: "Data Science and Research".to_string(),
        employee_residence: "United States".to_string(),
        experience_level: ExperienceLevel::Senior,
        employment_type: EmploymentType::FullTime,
        work_setting: WorkSetting::Remote,
        company_location: "United States".to_string(),
        company_size: CompanySize::Medium,
    }
}
