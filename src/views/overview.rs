//! Overview view: static description of the dataset

use std::fmt::Write;

use crate::schema::{
    COMPANY_LOCATION, COMPANY_SIZE, EMPLOYEE_RESIDENCE, EMPLOYMENT_TYPE, EXPERIENCE_LEVEL,
    JOB_CATEGORY, JOB_TITLE, SALARY, SALARY_CURRENCY, SALARY_IN_USD, WORK_SETTING, WORK_YEAR,
};

use super::Page;
use super::layout::page;

pub const TITLE: &str = "Jobs and Salaries in Data Science";

const INTRODUCTION: &str = "In an age dominated by data, the field of data science stands as a \
beacon of innovation and opportunity. Behind every groundbreaking discovery, every insightful \
trend, lies a team of dedicated professionals armed with the tools of analysis and the power of \
visualization. Welcome to our exploration of the dynamic landscape of data science careers and \
salaries, where numbers tell stories and trends reveal themselves in vibrant hues.";

/// Description of each dataset column, in file order
pub const COLUMN_DESCRIPTIONS: [(&str, &str); 12] = [
    (
        WORK_YEAR,
        "The year in which the data was recorded. This field indicates the temporal context of \
         the data, important for understanding salary trends over time.",
    ),
    (
        JOB_TITLE,
        "The specific title of the job role, like 'Data Scientist', 'Data Engineer', or 'Data \
         Analyst'. This column is crucial for understanding the salary distribution across \
         various specialized roles within the data field.",
    ),
    (
        JOB_CATEGORY,
        "A classification of the job role into broader categories for easier analysis. This \
         might include areas like 'Data Analysis', 'Machine Learning', 'Data Engineering', etc.",
    ),
    (
        SALARY_CURRENCY,
        "The currency in which the salary is paid, such as USD, EUR, etc. This is important for \
         currency conversion and understanding the actual value of the salary in a global context.",
    ),
    (
        SALARY,
        "The annual gross salary of the role in the local currency. This raw salary figure is \
         key for direct regional salary comparisons.",
    ),
    (
        SALARY_IN_USD,
        "The annual gross salary converted to United States Dollars (USD). This uniform currency \
         conversion aids in global salary comparisons and analyses.",
    ),
    (
        EMPLOYEE_RESIDENCE,
        "The country of residence of the employee. This data point can be used to explore \
         geographical salary differences and cost-of-living variations.",
    ),
    (
        EXPERIENCE_LEVEL,
        "Classifies the professional experience level of the employee. Common categories might \
         include 'Entry-level', 'Mid-level', 'Senior', and 'Executive', providing insight into \
         how experience influences salary in data-related roles.",
    ),
    (
        EMPLOYMENT_TYPE,
        "Specifies the type of employment, such as 'Full-time', 'Part-time', 'Contract', etc. \
         This helps in analyzing how different employment arrangements affect salary structures.",
    ),
    (
        WORK_SETTING,
        "The work setting or environment, like 'Remote', 'In-person', or 'Hybrid'. This column \
         reflects the impact of work settings on salary levels in the data industry.",
    ),
    (
        COMPANY_LOCATION,
        "The country where the company is located. It helps in analyzing how the location of \
         the company affects salary structures.",
    ),
    (
        COMPANY_SIZE,
        "The size of the employer company, often categorized into small (S), medium (M), and \
         large (L) sizes. This allows for analysis of how company size influences salary.",
    ),
];

/// Render the overview page
#[must_use]
pub fn render_overview() -> String {
    let mut content = format!(
        "<h1>{TITLE}</h1>\n<h3>Introduction to the data</h3>\n<p>{INTRODUCTION}</p>\n\
         <h2>Dataset Feature Overview</h2>\n<dl>\n"
    );
    for (column, description) in COLUMN_DESCRIPTIONS {
        let _ = writeln!(content, "<dt><em>{column}</em></dt><dd>{description}</dd>");
    }
    content.push_str("</dl>");

    page(Page::Overview, TITLE, &content)
}
