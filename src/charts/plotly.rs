//! Rendering chart specifications into Plotly figures
//!
//! Figures are plain JSON (`data` traces plus `layout`) handed to plotly.js in
//! the browser. Colour grouping splits the rows into one trace per distinct
//! colour value, in the order the values first appear.

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::record_batch::RecordBatch;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;
use serde_json::{Value, json};

use crate::dataset::aggregate::top_n_by_sum;
use crate::error::Result;
use crate::utils::arrow_utils::{arrow_array_to_f64, arrow_array_to_json, arrow_array_to_key, get_column};

use super::{ChartKind, ChartSource, ChartSpec};

/// Largest marker diameter, in pixels, for size-mapped scatter plots
const MAX_MARKER_SIZE: f64 = 40.0;

/// A Plotly figure ready to be serialized for plotly.js
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

/// Row indices sharing one colour value
struct RowGroup {
    name: Option<String>,
    rows: Vec<usize>,
}

fn group_rows(batch: &RecordBatch, color: Option<&str>) -> Result<Vec<RowGroup>> {
    let Some(color) = color else {
        return Ok(vec![RowGroup {
            name: None,
            rows: (0..batch.num_rows()).collect(),
        }]);
    };

    let column = get_column(batch, color)?;
    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    let mut groups: Vec<RowGroup> = Vec::new();

    for row in 0..batch.num_rows() {
        let key = arrow_array_to_key(&column, row);
        match index.get(&key) {
            Some(&slot) => groups[slot].rows.push(row),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(RowGroup {
                    name: Some(key),
                    rows: vec![row],
                });
            }
        }
    }

    Ok(groups)
}

fn values(array: &ArrayRef, rows: &[usize]) -> Vec<Value> {
    rows.iter().map(|&row| arrow_array_to_json(array, row)).collect()
}

/// Count rows per x value, x values in first-appearance order
fn counts(array: &ArrayRef, rows: &[usize]) -> (Vec<Value>, Vec<Value>) {
    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    let mut keys: Vec<Value> = Vec::new();
    let mut totals: Vec<u64> = Vec::new();

    for &row in rows {
        let key = arrow_array_to_key(array, row);
        match index.get(&key) {
            Some(&slot) => totals[slot] += 1,
            None => {
                index.insert(key, keys.len());
                keys.push(arrow_array_to_json(array, row));
                totals.push(1);
            }
        }
    }

    (keys, totals.into_iter().map(Value::from).collect())
}

fn trace(
    spec: &ChartSpec,
    group: &RowGroup,
    x: &ArrayRef,
    y: Option<&ArrayRef>,
    size: Option<(&ArrayRef, Option<f64>)>,
) -> Value {
    let mut trace = match spec.kind {
        ChartKind::Histogram => {
            let mut t = json!({ "type": "histogram", "x": values(x, &group.rows) });
            if let Some(y) = y {
                t["y"] = Value::from(values(y, &group.rows));
                t["histfunc"] = Value::from("sum");
            }
            t
        }
        ChartKind::Box => json!({
            "type": "box",
            "x": values(x, &group.rows),
            "y": y.map(|y| values(y, &group.rows)),
        }),
        ChartKind::Scatter => {
            let mut t = json!({
                "type": "scatter",
                "mode": "markers",
                "x": values(x, &group.rows),
                "y": y.map(|y| values(y, &group.rows)),
            });
            if let Some((size, max)) = size {
                t["marker"] = json!({
                    "size": values(size, &group.rows),
                    "sizemode": "area",
                    "sizemin": 0,
                });
                if let Some(max) = max {
                    t["marker"]["sizeref"] = Value::from(2.0 * max / (MAX_MARKER_SIZE * MAX_MARKER_SIZE));
                }
            }
            t
        }
        ChartKind::Bar => match y {
            Some(y) => json!({
                "type": "bar",
                "x": values(x, &group.rows),
                "y": values(y, &group.rows),
            }),
            None => {
                let (keys, totals) = counts(x, &group.rows);
                json!({ "type": "bar", "x": keys, "y": totals })
            }
        },
    };

    if let Some(name) = &group.name {
        trace["name"] = Value::from(name.as_str());
        trace["legendgroup"] = Value::from(name.as_str());
    }
    trace
}

fn layout(spec: &ChartSpec) -> Value {
    let y_title = match (&spec.y, spec.kind) {
        (Some(y), ChartKind::Histogram) => format!("sum of {y}"),
        (Some(y), _) => y.clone(),
        (None, _) => "count".to_string(),
    };

    let mut layout = json!({
        "title": { "text": spec.title },
        "xaxis": { "title": { "text": spec.x } },
        "yaxis": { "title": { "text": y_title } },
        "showlegend": spec.color.is_some(),
    });
    if let Some(color) = &spec.color {
        layout["legend"] = json!({ "title": { "text": color } });
    }
    match spec.kind {
        ChartKind::Histogram | ChartKind::Bar => layout["barmode"] = Value::from("relative"),
        ChartKind::Box => layout["boxmode"] = Value::from("group"),
        ChartKind::Scatter => {}
    }
    layout
}

/// Rows of a top-by-sum ranking as a two-column batch
fn ranking_batch(batch: &RecordBatch, key: &str, value: &str, n: usize) -> Result<RecordBatch> {
    let totals = top_n_by_sum(batch, key, value, n)?;
    let keys: ArrayRef = Arc::new(StringArray::from_iter_values(totals.iter().map(|g| g.key.as_str())));
    let sums: ArrayRef = Arc::new(Float64Array::from_iter_values(totals.iter().map(|g| g.total)));
    Ok(RecordBatch::try_from_iter(vec![(key, keys), (value, sums)])?)
}

/// Build the Plotly figure for one chart against the dataset
///
/// # Errors
/// Fails if a referenced column does not exist in the rows the chart uses.
pub fn build_figure(spec: &ChartSpec, dataset: &RecordBatch) -> Result<Figure> {
    let ranked;
    let batch = match &spec.source {
        ChartSource::Dataset => dataset,
        ChartSource::TopBySum { key, value, n } => {
            ranked = ranking_batch(dataset, key, value, *n)?;
            &ranked
        }
    };

    let x = get_column(batch, &spec.x)?;
    let y = spec.y.as_deref().map(|c| get_column(batch, c)).transpose()?;
    let size = spec.size.as_deref().map(|c| get_column(batch, c)).transpose()?;
    // sizeref is left to plotly when there is nothing positive to scale by
    let size = size.as_ref().map(|array| {
        let max = (0..array.len())
            .filter_map(|row| arrow_array_to_f64(array, row))
            .fold(0.0_f64, f64::max);
        (array, (max.is_finite() && max > 0.0).then_some(max))
    });

    let data = group_rows(batch, spec.color.as_deref())?
        .iter()
        .map(|group| trace(spec, group, &x, y.as_ref(), size))
        .collect();

    Ok(Figure {
        data,
        layout: layout(spec),
    })
}

/// Build many figures in parallel, keeping their order
pub fn build_figures(specs: &[ChartSpec], dataset: &RecordBatch) -> Result<Vec<Figure>> {
    specs
        .par_iter()
        .map(|spec| build_figure(spec, dataset))
        .collect()
}
