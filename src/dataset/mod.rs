//! Loading of the job-salary dataset
//!
//! The exploration view reads the whole dataset into a single Arrow record
//! batch on every render. CSV files are parsed against the fixed job schema;
//! Parquet files are read with the Arrow reader and used as stored.

pub mod aggregate;

use std::path::Path;
use std::time::Instant;

use arrow::compute::concat_batches;
use arrow::csv::ReaderBuilder;
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::error::util::safe_open_file;
use crate::error::Result;
use crate::schema::job_schema;
use crate::utils::{log_operation_complete, log_operation_start};

pub use aggregate::{GroupTotal, top_n_by_sum};

/// Default batch size for CSV parsing
pub const DEFAULT_BATCH_SIZE: usize = 8192;

/// One row of the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub work_year: i64,
    pub job_title: String,
    pub job_category: String,
    pub salary_currency: String,
    pub salary: f64,
    pub salary_in_usd: f64,
    pub employee_residence: String,
    pub experience_level: String,
    pub employment_type: String,
    pub work_setting: String,
    pub company_location: String,
    pub company_size: String,
}

/// The job-salary dataset held in memory as one record batch
#[derive(Debug, Clone)]
pub struct JobDataset {
    batch: RecordBatch,
}

impl JobDataset {
    /// Wrap an already loaded record batch
    #[must_use]
    pub const fn from_batch(batch: RecordBatch) -> Self {
        Self { batch }
    }

    /// The underlying record batch
    #[must_use]
    pub const fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    /// Schema of the loaded data
    #[must_use]
    pub fn schema(&self) -> SchemaRef {
        self.batch.schema()
    }

    /// Number of rows in the dataset
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    /// Column names in file order
    #[must_use]
    pub fn column_names(&self) -> Vec<String> {
        self.batch
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }

    /// The first `n` rows in file order, or the whole dataset when shorter
    #[must_use]
    pub fn head(&self, n: usize) -> RecordBatch {
        self.batch.slice(0, n.min(self.batch.num_rows()))
    }

    /// Deserialize every row into a typed record
    pub fn records(&self) -> Result<Vec<JobRecord>> {
        Ok(serde_arrow::from_record_batch(&self.batch)?)
    }
}

/// Load the dataset at `path`
///
/// Files ending in `.parquet` are read with the Parquet reader; anything else
/// is parsed as CSV with a header row.
///
/// # Errors
/// Fails if the file is missing, unreadable, or does not parse
pub fn load_dataset(path: &Path) -> Result<JobDataset> {
    log_operation_start("Loading dataset from", path);
    let start = Instant::now();

    let is_parquet = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"));
    let batch = if is_parquet {
        read_parquet(path)?
    } else {
        read_csv(path)?
    };

    log_operation_complete("loaded", path, batch.num_rows(), Some(start.elapsed()));
    Ok(JobDataset::from_batch(batch))
}

fn read_csv(path: &Path) -> Result<RecordBatch> {
    let file = safe_open_file(path, "reading the job dataset")?;
    let schema = job_schema();

    let reader = ReaderBuilder::new(schema.clone())
        .with_header(true)
        .with_batch_size(DEFAULT_BATCH_SIZE)
        .build(file)?;

    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(concat_batches(&schema, &batches)?)
}

fn read_parquet(path: &Path) -> Result<RecordBatch> {
    let file = safe_open_file(path, "reading the job dataset")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let schema = builder.schema().clone();
    let reader = builder.build()?;

    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(concat_batches(&schema, &batches)?)
}
