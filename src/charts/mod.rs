//! Chart specifications for the exploration view
//!
//! A chart is described declaratively (kind, axes, colour and size columns)
//! and turned into a Plotly figure against the loaded dataset by
//! [`plotly::build_figure`].

pub mod plotly;

use serde::Serialize;

use crate::schema::{
    COMPANY_SIZE, EMPLOYEE_RESIDENCE, EMPLOYMENT_TYPE, EXPERIENCE_LEVEL, JOB_CATEGORY,
    SALARY_IN_USD, WORK_SETTING, WORK_YEAR,
};

pub use plotly::{Figure, build_figure, build_figures};

/// Plot type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Histogram,
    Box,
    Scatter,
    Bar,
}

/// Where the chart's rows come from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ChartSource {
    /// Every row of the dataset
    Dataset,
    /// `value` summed per `key`, largest `n` sums first
    TopBySum {
        key: String,
        value: String,
        n: usize,
    },
}

/// Declarative description of one chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    pub source: ChartSource,
    pub x: String,
    pub y: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
}

impl ChartSpec {
    /// A chart over the whole dataset with only an x column
    pub fn new(kind: ChartKind, title: impl Into<String>, x: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind,
            source: ChartSource::Dataset,
            x: x.into(),
            y: None,
            color: None,
            size: None,
        }
    }

    #[must_use]
    pub fn y(mut self, column: impl Into<String>) -> Self {
        self.y = Some(column.into());
        self
    }

    #[must_use]
    pub fn color(mut self, column: impl Into<String>) -> Self {
        self.color = Some(column.into());
        self
    }

    #[must_use]
    pub fn size(mut self, column: impl Into<String>) -> Self {
        self.size = Some(column.into());
        self
    }

    #[must_use]
    pub fn source(mut self, source: ChartSource) -> Self {
        self.source = source;
        self
    }
}

/// One tab of the exploration view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartTab {
    pub title: &'static str,
    pub intro: Option<&'static str>,
    pub charts: Vec<ChartSpec>,
}

/// One histogram per column, in column order
pub fn univariate_charts(columns: &[String]) -> Vec<ChartSpec> {
    columns
        .iter()
        .map(|column| ChartSpec::new(ChartKind::Histogram, column.clone(), column.clone()))
        .collect()
}

/// Pairwise questions about the dataset
pub fn bivariate_charts(top_n: usize) -> Vec<ChartSpec> {
    vec![
        ChartSpec::new(
            ChartKind::Box,
            "Does the job category affect the salary in USD?",
            JOB_CATEGORY,
        )
        .y(SALARY_IN_USD),
        ChartSpec::new(
            ChartKind::Scatter,
            "Is there a correlation between work year and salary in USD?",
            WORK_YEAR,
        )
        .y(SALARY_IN_USD),
        ChartSpec::new(
            ChartKind::Bar,
            "How does employment type relate to job category?",
            JOB_CATEGORY,
        )
        .color(EMPLOYMENT_TYPE),
        ChartSpec::new(
            ChartKind::Box,
            "Does the company size impact the work setting?",
            WORK_SETTING,
        )
        .y(COMPANY_SIZE),
        ChartSpec::new(
            ChartKind::Bar,
            "Is there a difference in salaries based on employee residence?",
            EMPLOYEE_RESIDENCE,
        )
        .y(SALARY_IN_USD)
        .source(ChartSource::TopBySum {
            key: EMPLOYEE_RESIDENCE.to_string(),
            value: SALARY_IN_USD.to_string(),
            n: top_n,
        }),
    ]
}

/// Questions involving three columns
pub fn multivariate_charts() -> Vec<ChartSpec> {
    vec![
        ChartSpec::new(
            ChartKind::Histogram,
            "How does work experience level, job category, and salary in USD correlate?",
            JOB_CATEGORY,
        )
        .y(SALARY_IN_USD)
        .color(EXPERIENCE_LEVEL),
        ChartSpec::new(
            ChartKind::Box,
            "Is there a relationship between company size, job category, and salary in USD?",
            COMPANY_SIZE,
        )
        .y(SALARY_IN_USD)
        .color(JOB_CATEGORY),
        ChartSpec::new(
            ChartKind::Box,
            "How does employment type, work setting, and salary in USD vary together?",
            EMPLOYMENT_TYPE,
        )
        .y(SALARY_IN_USD)
        .color(WORK_SETTING),
        ChartSpec::new(
            ChartKind::Box,
            "Does the combination of work year, job title, and job category have an impact on salaries in USD?",
            JOB_CATEGORY,
        )
        .y(SALARY_IN_USD)
        .color(WORK_YEAR),
        ChartSpec::new(
            ChartKind::Scatter,
            "How do job title, company location, and company size interact in terms of salaries in USD?",
            COMPANY_SIZE,
        )
        .y(SALARY_IN_USD)
        .color(JOB_CATEGORY)
        .size(SALARY_IN_USD),
    ]
}

/// The three exploration tabs for a dataset with the given columns
pub fn exploration_tabs(columns: &[String], top_n: usize) -> Vec<ChartTab> {
    vec![
        ChartTab {
            title: "Univariate Analysis",
            intro: Some("Univariate Analysis with Histogram for each Feature"),
            charts: univariate_charts(columns),
        },
        ChartTab {
            title: "Bivariate Analysis",
            intro: None,
            charts: bivariate_charts(top_n),
        },
        ChartTab {
            title: "Multivariate Analysis",
            intro: None,
            charts: multivariate_charts(),
        },
    ]
}
