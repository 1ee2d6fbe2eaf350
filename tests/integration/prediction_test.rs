use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use salary_dash::model::{EncodedColumn, HandleUnknown, PipelineArtifact};
use salary_dash::utils::round_to_cents;
use salary_dash::{
    CompanySize, DashboardError, EmploymentType, ExperienceLevel, GradientBoostingPipeline,
    InferencePipeline, PredictionRecord, WorkSetting, WorkYear, load_pipeline, predict_salary,
};

use crate::utils::{missing_files_config, sample_pipeline, senior_scientist};

const TITLES: &[&str] = &["Data Scientist", "Data Engineer", "Data Analyst", "Prompt Engineer"];
const CATEGORIES: &[&str] = &["Data Science and Research", "Data Engineering", "Data Analysis"];
const COUNTRIES: &[&str] = &["United States", "United Kingdom", "Germany", "Spain", "Japan"];

fn pick<T: Copy>(rng: &mut StdRng, options: &[T]) -> T {
    *options.choose(rng).unwrap()
}

fn random_record(rng: &mut StdRng) -> PredictionRecord {
    PredictionRecord {
        work_year: pick(rng, WorkYear::ALL),
        job_title: pick(rng, TITLES).to_string(),
        job_category: pick(rng, CATEGORIES).to_string(),
        employee_residence: pick(rng, COUNTRIES).to_string(),
        experience_level: pick(rng, ExperienceLevel::ALL),
        employment_type: pick(rng, EmploymentType::ALL),
        work_setting: pick(rng, WorkSetting::ALL),
        company_location: pick(rng, COUNTRIES).to_string(),
        company_size: pick(rng, CompanySize::ALL),
    }
}

#[test]
fn test_known_record_prediction() -> salary_dash::Result<()> {
    let pipeline = load_pipeline(&sample_pipeline())?;
    let prediction = predict_salary(&pipeline, &senior_scientist())?;

    // 2023 takes the right branch of the first tree, Senior the right branch of the second
    let expected_log = 11.5 + 0.1 * (0.5 + -0.3);
    assert!((prediction.log_salary - expected_log).abs() < 1e-12);
    assert_eq!(prediction.salary, round_to_cents(prediction.log_salary.exp()));
    assert!((prediction.salary - 100_709.96).abs() < 0.02);
    Ok(())
}

#[test]
fn test_exp_is_applied_exactly_once() -> salary_dash::Result<()> {
    let pipeline = load_pipeline(&sample_pipeline())?;
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let record = random_record(&mut rng);
        let raw = pipeline.predict(&record.to_record_batch()?)?;
        let prediction = predict_salary(&pipeline, &record)?;

        assert_eq!(prediction.log_salary, raw[0]);
        assert_eq!(prediction.salary, round_to_cents(raw[0].exp()));
        // Values stay on the salary scale, not exp(exp(..))
        assert!(prediction.salary > 10_000.0 && prediction.salary < 1_000_000.0);
    }
    Ok(())
}

#[test]
fn test_prediction_is_deterministic() -> salary_dash::Result<()> {
    let mut rng = StdRng::seed_from_u64(2023);

    for _ in 0..20 {
        let record = random_record(&mut rng);
        // Reload the artifact each time, as the view does on every render
        let first = predict_salary(&load_pipeline(&sample_pipeline())?, &record)?;
        let second = predict_salary(&load_pipeline(&sample_pipeline())?, &record)?;
        assert_eq!(first, second);
        assert_eq!(first.message(), second.message());
    }
    Ok(())
}

#[test]
fn test_batch_prediction_matches_single_rows() -> salary_dash::Result<()> {
    let pipeline = load_pipeline(&sample_pipeline())?;
    let mut rng = StdRng::seed_from_u64(42);
    let records: Vec<_> = (0..10).map(|_| random_record(&mut rng)).collect();

    let batch = pipeline.predict(&PredictionRecord::batch_of(&records)?)?;
    assert_eq!(batch.len(), records.len());
    for (record, value) in records.iter().zip(batch) {
        assert_eq!(predict_salary(&pipeline, record)?.log_salary, value);
    }
    Ok(())
}

#[test]
fn test_unknown_categories_follow_artifact_setting() -> salary_dash::Result<()> {
    let json = std::fs::read_to_string(sample_pipeline())?;
    let mut artifact: PipelineArtifact = serde_json::from_str(&json)?;

    let mut record = senior_scientist();
    record.job_title = "Prompt Whisperer".to_string();

    let lenient = GradientBoostingPipeline::from_artifact(artifact.clone())?;
    assert!(predict_salary(&lenient, &record).is_ok());

    artifact.encoder.handle_unknown = HandleUnknown::Error;
    let strict = GradientBoostingPipeline::from_artifact(artifact)?;
    let err = predict_salary(&strict, &record).unwrap_err();
    assert!(matches!(err, DashboardError::UnknownCategory { ref value, .. } if value == "Prompt Whisperer"));
    Ok(())
}

#[test]
fn test_artifact_referencing_missing_feature_is_rejected() -> salary_dash::Result<()> {
    let json = std::fs::read_to_string(sample_pipeline())?;
    let mut artifact: PipelineArtifact = serde_json::from_str(&json)?;
    // Dropping categories shrinks the feature vector below feature 12
    artifact.encoder.columns = artifact
        .encoder
        .columns
        .into_iter()
        .map(|column| EncodedColumn {
            categories: column.categories.into_iter().take(1).collect(),
            ..column
        })
        .collect();

    assert!(GradientBoostingPipeline::from_artifact(artifact).is_err());
    Ok(())
}

#[test]
fn test_out_of_set_values_are_rejected() {
    assert!("Guru".parse::<ExperienceLevel>().is_err());
    assert!("XL".parse::<CompanySize>().is_err());
    assert!("Office".parse::<WorkSetting>().is_err());
    assert!("Internship".parse::<EmploymentType>().is_err());
    assert!("2019".parse::<WorkYear>().is_err());

    let json = r#"{"work_year":2023,"job_title":"a","job_category":"b","employee_residence":"c",
        "experience_level":"Senior","employment_type":"Full-time","work_setting":"Onsite",
        "company_location":"d","company_size":"M"}"#;
    assert!(serde_json::from_str::<PredictionRecord>(json).is_err());
}

#[test]
fn test_missing_pipeline_fails_immediately() {
    let err = load_pipeline(&missing_files_config().pipeline_path).unwrap_err();
    assert!(matches!(err, DashboardError::MissingFile { .. }));
}
