//! Binary encoding of categorical predictor columns
//!
//! Each encoded column carries its ordered category list. The category at
//! position `i` gets ordinal `i + 1`, written as a fixed number of binary
//! digits (most significant first). Ordinal 0, all digits zero, is reserved
//! for values the encoder has never seen.

use arrow::array::ArrayRef;
use arrow::record_batch::RecordBatch;
use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{DashboardError, Result};
use crate::schema::{PREDICTOR_COLUMNS, is_numeric_column};
use crate::utils::arrow_utils::{arrow_array_to_f64, arrow_array_to_string, get_column};

/// Encoded feature vector of one row
pub type FeatureRow = SmallVec<[f64; 32]>;

/// What to do with a category that is not in the encoder's list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleUnknown {
    /// Encode as all-zero digits
    #[default]
    Value,
    /// Fail the prediction
    Error,
}

/// Serialized description of one encoded column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedColumn {
    pub name: String,
    pub categories: Vec<String>,
}

/// Serialized encoder configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryEncoderSpec {
    #[serde(default)]
    pub handle_unknown: HandleUnknown,
    pub columns: Vec<EncodedColumn>,
}

#[derive(Debug, Clone)]
enum ColumnPlan {
    Numeric {
        name: &'static str,
    },
    Binary {
        name: &'static str,
        ordinals: FxHashMap<String, usize>,
        digits: usize,
    },
}

/// Number of binary digits needed to write ordinals `1..=categories`
fn digits_for(categories: usize) -> usize {
    (usize::BITS - categories.leading_zeros()).max(1) as usize
}

/// Encoder turning predictor rows into numeric feature vectors
///
/// Feature layout follows the predictor column order; numeric columns take one
/// slot, encoded columns take their digit count.
#[derive(Debug, Clone)]
pub struct BinaryEncoder {
    handle_unknown: HandleUnknown,
    plan: Vec<ColumnPlan>,
}

impl BinaryEncoder {
    /// Build an encoder from its serialized form
    ///
    /// # Errors
    /// Fails if an encoded column is not a categorical predictor, is listed
    /// twice, or if a categorical predictor has no encoding.
    pub fn from_spec(spec: &BinaryEncoderSpec) -> Result<Self> {
        if let Some(name) = spec.columns.iter().map(|c| c.name.as_str()).duplicates().next() {
            return Err(DashboardError::pipeline(format!(
                "Column '{name}' is encoded more than once"
            )));
        }

        for column in &spec.columns {
            if !PREDICTOR_COLUMNS.contains(&column.name.as_str()) {
                return Err(DashboardError::pipeline(format!(
                    "Encoded column '{}' is not a predictor column",
                    column.name
                )));
            }
            if is_numeric_column(&column.name) {
                return Err(DashboardError::pipeline(format!(
                    "Numeric column '{}' cannot be binary encoded",
                    column.name
                )));
            }
        }

        let plan = PREDICTOR_COLUMNS
            .iter()
            .map(|&name| {
                if is_numeric_column(name) {
                    return Ok(ColumnPlan::Numeric { name });
                }
                let column = spec
                    .columns
                    .iter()
                    .find(|c| c.name == name)
                    .ok_or_else(|| {
                        DashboardError::pipeline(format!("Column '{name}' has no encoding"))
                    })?;
                let ordinals = column
                    .categories
                    .iter()
                    .enumerate()
                    .map(|(idx, category)| (category.clone(), idx + 1))
                    .collect();
                Ok(ColumnPlan::Binary {
                    name,
                    ordinals,
                    digits: digits_for(column.categories.len()),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            handle_unknown: spec.handle_unknown,
            plan,
        })
    }

    /// Length of the encoded feature vector
    #[must_use]
    pub fn width(&self) -> usize {
        self.plan
            .iter()
            .map(|column| match column {
                ColumnPlan::Numeric { .. } => 1,
                ColumnPlan::Binary { digits, .. } => *digits,
            })
            .sum()
    }

    /// Encode every row of a predictor batch
    ///
    /// # Errors
    /// Fails if a predictor column is missing, a numeric value is null, or an
    /// unseen category meets `HandleUnknown::Error`.
    pub fn encode(&self, batch: &RecordBatch) -> Result<Vec<FeatureRow>> {
        let columns = self
            .plan
            .iter()
            .map(|column| {
                let name = match column {
                    ColumnPlan::Numeric { name } | ColumnPlan::Binary { name, .. } => *name,
                };
                get_column(batch, name)
            })
            .collect::<Result<Vec<ArrayRef>>>()?;

        (0..batch.num_rows())
            .map(|row| self.encode_row(&columns, row))
            .collect()
    }

    fn encode_row(&self, columns: &[ArrayRef], row: usize) -> Result<FeatureRow> {
        let mut features = FeatureRow::with_capacity(self.width());

        for (column, array) in self.plan.iter().zip(columns) {
            match column {
                ColumnPlan::Numeric { name } => {
                    let value = arrow_array_to_f64(array, row).ok_or_else(|| {
                        DashboardError::pipeline(format!(
                            "Column '{name}' has no numeric value in row {row}"
                        ))
                    })?;
                    features.push(value);
                }
                ColumnPlan::Binary {
                    name,
                    ordinals,
                    digits,
                } => {
                    let value = arrow_array_to_string(array, row);
                    let ordinal = match value.as_deref().and_then(|v| ordinals.get(v)) {
                        Some(&ordinal) => ordinal,
                        None if self.handle_unknown == HandleUnknown::Value => 0,
                        None => {
                            return Err(DashboardError::UnknownCategory {
                                column: (*name).to_string(),
                                value: value.unwrap_or_default(),
                            });
                        }
                    };
                    features.extend((0..*digits).rev().map(|bit| ((ordinal >> bit) & 1) as f64));
                }
            }
        }

        Ok(features)
    }
}
