//! Exploration view: dataset preview and the chart tabs

use std::fmt::Write;
use std::time::Instant;

use arrow::record_batch::RecordBatch;

use crate::charts::{ChartTab, Figure, build_figures, exploration_tabs};
use crate::config::DashboardConfig;
use crate::dataset::load_dataset;
use crate::error::Result;
use crate::utils::arrow_utils::column_display_values;
use crate::utils::escape_html;

use super::Page;
use super::layout::page;

pub const TITLE: &str = "Analysis";

/// Render `batch` as an HTML table, header row first
pub fn preview_table(batch: &RecordBatch) -> Result<String> {
    let columns = batch
        .columns()
        .iter()
        .map(column_display_values)
        .collect::<Result<Vec<_>>>()?;

    let mut html = String::from("<div class=\"table-wrap\"><table>\n<thead><tr><th></th>");
    for field in batch.schema().fields() {
        let _ = write!(html, "<th>{}</th>", escape_html(field.name()));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for row in 0..batch.num_rows() {
        let _ = write!(html, "<tr><th>{row}</th>");
        for column in &columns {
            let _ = write!(html, "<td>{}</td>", escape_html(&column[row]));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody></table></div>");
    Ok(html)
}

/// Serialize a figure for an inline script
///
/// `</` is escaped so that a cell value cannot close the script element.
fn figure_json(figure: &Figure) -> Result<String> {
    Ok(serde_json::to_string(figure)?.replace("</", "<\\/"))
}

fn render_tab(html: &mut String, index: usize, tab: &ChartTab, figures: &[Figure]) -> Result<()> {
    let _ = write!(html, "<div class=\"tab-panel\" id=\"panel-{index}\">");
    if let Some(intro) = tab.intro {
        let _ = write!(html, "<h3>{intro}</h3>");
    }

    for (chart, (spec, figure)) in tab.charts.iter().zip(figures).enumerate() {
        let id = format!("chart-{index}-{chart}");
        if tab.intro.is_none() {
            let _ = write!(html, "<h3>{}</h3>", escape_html(&spec.title));
        }
        let _ = write!(
            html,
            "<div id=\"{id}\"></div>\n<script>(function(){{var f={json};\
             Plotly.newPlot(\"{id}\",f.data,f.layout,{{responsive:true}});}})();</script>\n",
            json = figure_json(figure)?,
        );
    }

    html.push_str("</div>\n");
    Ok(())
}

/// Render the exploration page
///
/// The dataset is read again on every call.
///
/// # Errors
/// Fails if the dataset cannot be loaded or a chart references a column it
/// does not have.
pub fn render_exploration(config: &DashboardConfig) -> Result<String> {
    let start = Instant::now();
    let dataset = load_dataset(&config.dataset_path)?;
    let tabs = exploration_tabs(&dataset.column_names(), config.top_n);

    let mut content = format!(
        "<h3>Head of Dataframe</h3>\n{}\n<div class=\"tabs\">\n",
        preview_table(&dataset.head(config.preview_rows))?
    );

    for (index, tab) in tabs.iter().enumerate() {
        let checked = if index == 0 { " checked" } else { "" };
        let _ = write!(
            content,
            "<input type=\"radio\" name=\"tab\" id=\"tab-{index}\"{checked}>\
             <label class=\"tab\" for=\"tab-{index}\">{}</label>",
            tab.title
        );
    }
    content.push('\n');

    for (index, tab) in tabs.iter().enumerate() {
        let figures = build_figures(&tab.charts, dataset.batch())?;
        render_tab(&mut content, index, tab, &figures)?;
    }
    content.push_str("</div>");

    log::debug!(
        "Rendered exploration view for {} rows in {:?}",
        dataset.num_rows(),
        start.elapsed()
    );
    Ok(page(Page::Exploration, TITLE, &content))
}
