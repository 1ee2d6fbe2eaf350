//! A dashboard for exploring data-science job salaries and predicting a
//! salary from job attributes with a pre-trained pipeline.

pub mod charts;
pub mod config;
pub mod dataset;
pub mod error;
pub mod model;
pub mod prediction;
pub mod schema;
pub mod server;
pub mod utils;
pub mod views;

// Core types
pub use config::DashboardConfig;
pub use error::{DashboardError, Result};

// Data loading and aggregation
pub use dataset::{GroupTotal, JobDataset, JobRecord, load_dataset, top_n_by_sum};
pub use schema::{DATASET_COLUMNS, PREDICTOR_COLUMNS, job_schema, predictor_schema};

// Inference
pub use model::{
    CompanySize, EmploymentType, ExperienceLevel, GradientBoostingPipeline, InferencePipeline,
    PredictionRecord, WorkSetting, WorkYear, load_pipeline,
};
pub use prediction::{SalaryPrediction, predict_salary};

// Serving
pub use server::{create_router, serve};
pub use views::Page;

// Arrow types
pub use arrow::record_batch::RecordBatch;
