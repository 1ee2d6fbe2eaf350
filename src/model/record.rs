//! The prediction request record and its enumerated fields
//!
//! Enumerated fields are closed enums: a value outside the option set cannot be
//! represented, and parsing one (from a form, JSON, or `FromStr`) fails.

use std::fmt;
use std::str::FromStr;

use arrow::record_batch::RecordBatch;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DashboardError, Result};
use crate::schema::predictor_schema;

/// Generate a closed option set with string labels
macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every option, in the order the form lists them
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Field name used in forms and error messages
            pub const FIELD: &'static str = $field;

            /// The label stored in the dataset and shown in the form
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DashboardError;

            fn from_str(s: &str) -> Result<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.as_str() == s)
                    .ok_or_else(|| DashboardError::InvalidField {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }
    };
}

option_set! {
    /// Professional experience level of the employee
    ExperienceLevel, "experience_level" {
        MidLevel => "Mid-level",
        Senior => "Senior",
        Executive => "Executive",
        EntryLevel => "Entry-level",
    }
}

option_set! {
    /// Type of employment contract
    EmploymentType, "employment_type" {
        FullTime => "Full-time",
        PartTime => "Part-time",
        Contract => "Contract",
        Freelance => "Freelance",
    }
}

option_set! {
    /// Where the work is carried out
    WorkSetting, "work_setting" {
        Hybrid => "Hybrid",
        InPerson => "In-person",
        Remote => "Remote",
    }
}

option_set! {
    /// Size of the employing company
    CompanySize, "company_size" {
        Large => "L",
        Medium => "M",
        Small => "S",
    }
}

/// Year the salary was recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkYear {
    Y2020,
    Y2021,
    Y2022,
    Y2023,
}

impl WorkYear {
    /// Every option, in the order the form lists them
    pub const ALL: &'static [Self] = &[Self::Y2020, Self::Y2021, Self::Y2022, Self::Y2023];

    /// Field name used in forms and error messages
    pub const FIELD: &'static str = "work_year";

    /// The calendar year
    #[must_use]
    pub const fn year(&self) -> i64 {
        match self {
            Self::Y2020 => 2020,
            Self::Y2021 => 2021,
            Self::Y2022 => 2022,
            Self::Y2023 => 2023,
        }
    }
}

impl TryFrom<i64> for WorkYear {
    type Error = DashboardError;

    fn try_from(year: i64) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|option| option.year() == year)
            .ok_or_else(|| DashboardError::InvalidField {
                field: Self::FIELD,
                value: year.to_string(),
            })
    }
}

impl FromStr for WorkYear {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        let year = s.parse::<i64>().map_err(|_| DashboardError::InvalidField {
            field: Self::FIELD,
            value: s.to_string(),
        })?;
        Self::try_from(year)
    }
}

impl fmt::Display for WorkYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.year())
    }
}

impl Serialize for WorkYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.year())
    }
}

impl<'de> Deserialize<'de> for WorkYear {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        // Forms submit the year as text, JSON clients as a number.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawYear {
            Number(i64),
            Text(String),
        }

        let parsed = match RawYear::deserialize(deserializer)? {
            RawYear::Number(year) => Self::try_from(year),
            RawYear::Text(text) => text.parse(),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

/// The nine predictor fields of one prediction request
///
/// Free-text fields are kept exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub work_year: WorkYear,
    pub job_title: String,
    pub job_category: String,
    pub employee_residence: String,
    pub experience_level: ExperienceLevel,
    pub employment_type: EmploymentType,
    pub work_setting: WorkSetting,
    pub company_location: String,
    pub company_size: CompanySize,
}

/// Flat row with the predictor column layout, used for Arrow conversion
#[derive(Debug, Serialize)]
struct PredictorRow<'a> {
    work_year: i64,
    job_title: &'a str,
    job_category: &'a str,
    employee_residence: &'a str,
    experience_level: &'a str,
    employment_type: &'a str,
    work_setting: &'a str,
    company_location: &'a str,
    company_size: &'a str,
}

impl PredictionRecord {
    fn as_row(&self) -> PredictorRow<'_> {
        PredictorRow {
            work_year: self.work_year.year(),
            job_title: &self.job_title,
            job_category: &self.job_category,
            employee_residence: &self.employee_residence,
            experience_level: self.experience_level.as_str(),
            employment_type: self.employment_type.as_str(),
            work_setting: self.work_setting.as_str(),
            company_location: &self.company_location,
            company_size: self.company_size.as_str(),
        }
    }

    /// Assemble the record into a one-row batch with the predictor schema
    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        let schema = predictor_schema();
        Ok(serde_arrow::to_record_batch(schema.fields(), &[self.as_row()])?)
    }

    /// Assemble many records into one batch, one row per record
    pub fn batch_of(records: &[Self]) -> Result<RecordBatch> {
        let schema = predictor_schema();
        let rows: Vec<PredictorRow<'_>> = records.iter().map(Self::as_row).collect();
        Ok(serde_arrow::to_record_batch(schema.fields(), &rows)?)
    }
}
