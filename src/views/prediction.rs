//! Prediction view: the nine-field form and its result

use std::fmt::Write;

use crate::config::DashboardConfig;
use crate::error::Result;
use crate::model::{
    CompanySize, EmploymentType, ExperienceLevel, PredictionRecord, WorkSetting, WorkYear,
    load_pipeline,
};
use crate::prediction::{SalaryPrediction, predict_salary};
use crate::utils::escape_html;

use super::Page;
use super::layout::page;

pub const TITLE: &str = "Model Regression";

fn select<T: PartialEq + ToString>(
    html: &mut String,
    name: &str,
    prompt: &str,
    options: &[T],
    selected: Option<&T>,
) {
    let _ = write!(
        html,
        "<div class=\"field\"><label for=\"{name}\">{prompt}</label><select id=\"{name}\" name=\"{name}\">"
    );
    for option in options {
        let value = escape_html(&option.to_string());
        let mark = if selected == Some(option) { " selected" } else { "" };
        let _ = write!(html, "<option value=\"{value}\"{mark}>{value}</option>");
    }
    html.push_str("</select></div>\n");
}

fn text_input(html: &mut String, name: &str, prompt: &str, value: Option<&str>) {
    let _ = write!(
        html,
        "<div class=\"field\"><label for=\"{name}\">{prompt}</label>\
         <input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{}\"></div>\n",
        escape_html(value.unwrap_or_default())
    );
}

/// The input form, prefilled with `record` when one was submitted
///
/// Option sets and their order come from the record's enum types.
#[must_use]
pub fn render_prediction_form(record: Option<&PredictionRecord>) -> String {
    let mut html = String::from("<form method=\"post\" action=\"/prediction\">\n");

    select(
        &mut html,
        WorkYear::FIELD,
        "Please provide the number of years",
        WorkYear::ALL,
        record.map(|r| &r.work_year),
    );
    text_input(&mut html, "job_title", "Please write your job title", record.map(|r| r.job_title.as_str()));
    text_input(
        &mut html,
        "job_category",
        "Please write your job category",
        record.map(|r| r.job_category.as_str()),
    );
    text_input(
        &mut html,
        "employee_residence",
        "Please write your employee residence",
        record.map(|r| r.employee_residence.as_str()),
    );
    select(
        &mut html,
        ExperienceLevel::FIELD,
        "Please select your experience level",
        ExperienceLevel::ALL,
        record.map(|r| &r.experience_level),
    );
    select(
        &mut html,
        EmploymentType::FIELD,
        "Please select your employment type",
        EmploymentType::ALL,
        record.map(|r| &r.employment_type),
    );
    select(
        &mut html,
        WorkSetting::FIELD,
        "Please select your work setting",
        WorkSetting::ALL,
        record.map(|r| &r.work_setting),
    );
    text_input(
        &mut html,
        "company_location",
        "Please write your company location",
        record.map(|r| r.company_location.as_str()),
    );
    select(
        &mut html,
        CompanySize::FIELD,
        "Please select your company size",
        CompanySize::ALL,
        record.map(|r| &r.company_size),
    );

    html.push_str("<button type=\"submit\">Predict</button>\n</form>");
    html
}

fn render_result(prediction: &SalaryPrediction) -> String {
    format!(
        "<div class=\"result\"><h3>Prediction Result:</h3><p>{}</p></div>",
        prediction.message()
    )
}

/// Render the prediction page, predicting for `record` when it is given
///
/// The pipeline artifact is loaded before anything is rendered, on every call.
///
/// # Errors
/// Fails if the pipeline cannot be loaded or rejects the record.
pub fn render_prediction(config: &DashboardConfig, record: Option<&PredictionRecord>) -> Result<String> {
    let pipeline = load_pipeline(&config.pipeline_path)?;

    let mut content = format!("<h1>{TITLE}</h1>\n{}", render_prediction_form(record));
    if let Some(record) = record {
        let prediction = predict_salary(&pipeline, record)?;
        log::info!("Predicted salary {} for {}", prediction.salary, record.job_title);
        content.push_str(&render_result(&prediction));
    }

    Ok(page(Page::Prediction, TITLE, &content))
}
