//! Arrow utility functions for extracting values from record batches
//!
//! The chart builders and the inference pipeline read individual cells out of
//! Arrow arrays; these helpers centralise the downcasting and null handling.

use arrow::array::{
    Array, ArrayRef, Float32Array, Float64Array, Int32Array, Int64Array, LargeStringArray,
    StringArray,
};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use arrow::util::display::{ArrayFormatter, FormatOptions};
use serde_json::Value;

use crate::error::{DashboardError, Result};

/// Extract a string value from an Arrow array at the specified index, handling nulls
///
/// # Returns
/// `Some(String)` if the value exists and is a non-null string, otherwise `None`
pub fn arrow_array_to_string(array: &ArrayRef, index: usize) -> Option<String> {
    if array.is_null(index) {
        return None;
    }

    match array.data_type() {
        DataType::Utf8 => {
            let string_array = array.as_any().downcast_ref::<StringArray>()?;
            Some(string_array.value(index).to_string())
        }
        DataType::LargeUtf8 => {
            let string_array = array.as_any().downcast_ref::<LargeStringArray>()?;
            Some(string_array.value(index).to_string())
        }
        _ => None,
    }
}

/// Extract an f64 value from an Arrow array at the specified index, handling nulls
///
/// # Returns
/// `Some(f64)` if the value exists and is numeric, otherwise `None`
pub fn arrow_array_to_f64(array: &ArrayRef, index: usize) -> Option<f64> {
    if array.is_null(index) {
        return None;
    }

    match array.data_type() {
        DataType::Int32 => {
            let int_array = array.as_any().downcast_ref::<Int32Array>()?;
            Some(f64::from(int_array.value(index)))
        }
        DataType::Int64 => {
            let int_array = array.as_any().downcast_ref::<Int64Array>()?;
            Some(int_array.value(index) as f64)
        }
        DataType::Float32 => {
            let float_array = array.as_any().downcast_ref::<Float32Array>()?;
            Some(f64::from(float_array.value(index)))
        }
        DataType::Float64 => {
            let float_array = array.as_any().downcast_ref::<Float64Array>()?;
            Some(float_array.value(index))
        }
        _ => None,
    }
}

/// Convert a cell into a JSON value suitable for a chart trace
///
/// Numbers stay numbers, strings stay strings, nulls become `null`.
pub fn arrow_array_to_json(array: &ArrayRef, index: usize) -> Value {
    if array.is_null(index) {
        return Value::Null;
    }

    if let Some(number) = arrow_array_to_f64(array, index) {
        return match array.data_type() {
            DataType::Int32 | DataType::Int64 => Value::from(number as i64),
            _ => Value::from(number),
        };
    }

    arrow_array_to_string(array, index).map_or(Value::Null, Value::String)
}

/// Render every cell of a column as display text
///
/// Used by the preview table so that numbers, strings and nulls are printed the
/// same way Arrow's pretty printer does.
pub fn column_display_values(array: &ArrayRef) -> Result<Vec<String>> {
    let options = FormatOptions::default().with_null("");
    let formatter = ArrayFormatter::try_new(array.as_ref(), &options)?;
    Ok((0..array.len())
        .map(|idx| formatter.value(idx).to_string())
        .collect())
}

/// Get the column index by name from a record batch
///
/// # Errors
/// Returns an error if the column does not exist
pub fn get_column_index(batch: &RecordBatch, column_name: &str) -> Result<usize> {
    batch
        .schema()
        .index_of(column_name)
        .map_err(|_| DashboardError::dataset(format!("Column not found: {column_name}")))
}

/// Get a column from a record batch by name
///
/// # Errors
/// Returns an error if the column does not exist
pub fn get_column(batch: &RecordBatch, column_name: &str) -> Result<ArrayRef> {
    let idx = get_column_index(batch, column_name)?;
    Ok(batch.column(idx).clone())
}

/// Group key for a cell: its string value, or its display form for other types
pub fn arrow_array_to_key(array: &ArrayRef, index: usize) -> String {
    if let Some(value) = arrow_array_to_string(array, index) {
        return value;
    }
    match arrow_array_to_json(array, index) {
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
