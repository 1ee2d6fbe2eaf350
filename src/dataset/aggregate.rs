//! Group-by aggregations over the dataset

use std::cmp::Ordering;

use arrow::array::Array;
use arrow::record_batch::RecordBatch;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::Result;
use crate::utils::arrow_utils::{arrow_array_to_f64, arrow_array_to_key, get_column};

/// Sum of a value column for one group key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupTotal {
    pub key: String,
    pub total: f64,
}

/// Sum `value_column` per distinct `key_column`, groups in first-appearance order
///
/// Rows with a null key belong to no group. Null values contribute nothing to
/// their group's sum.
pub fn sum_by_key(batch: &RecordBatch, key_column: &str, value_column: &str) -> Result<Vec<GroupTotal>> {
    let keys = get_column(batch, key_column)?;
    let values = get_column(batch, value_column)?;

    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    let mut totals: Vec<GroupTotal> = Vec::new();

    for row in 0..batch.num_rows() {
        if keys.is_null(row) {
            continue;
        }
        let key = arrow_array_to_key(&keys, row);
        let value = arrow_array_to_f64(&values, row).unwrap_or(0.0);
        match index.get(&key) {
            Some(&slot) => totals[slot].total += value,
            None => {
                index.insert(key.clone(), totals.len());
                totals.push(GroupTotal { key, total: value });
            }
        }
    }

    Ok(totals)
}

/// The `n` groups with the largest sums, descending
///
/// The sort is stable, so groups with equal sums keep the order in which their
/// key first appears in the dataset.
pub fn top_n_by_sum(
    batch: &RecordBatch,
    key_column: &str,
    value_column: &str,
    n: usize,
) -> Result<Vec<GroupTotal>> {
    let mut totals = sum_by_key(batch, key_column, value_column)?;
    totals.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));
    totals.truncate(n);
    Ok(totals)
}
