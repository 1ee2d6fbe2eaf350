use arrow::array::{Array, StringArray};
use salary_dash::schema::{EMPLOYEE_RESIDENCE, JOB_TITLE, SALARY_IN_USD};
use salary_dash::charts::{build_figures, exploration_tabs};
use salary_dash::{DATASET_COLUMNS, DashboardError, load_dataset, top_n_by_sum};

use crate::utils::{missing_files_config, sample_dataset, write_dataset};

#[test]
fn test_loads_full_dataset_with_fixed_schema() -> salary_dash::Result<()> {
    let dataset = load_dataset(&sample_dataset())?;
    assert_eq!(dataset.num_rows(), 15);
    assert_eq!(dataset.column_names(), DATASET_COLUMNS.to_vec());
    Ok(())
}

#[test]
fn test_head_is_first_ten_rows_in_file_order() -> salary_dash::Result<()> {
    let dataset = load_dataset(&sample_dataset())?;
    let head = dataset.head(10);
    assert_eq!(head.num_rows(), 10);

    let titles = head
        .column(head.schema().index_of(JOB_TITLE)?)
        .as_any()
        .downcast_ref::<StringArray>()
        .map(|a| a.iter().flatten().map(str::to_string).collect::<Vec<_>>())
        .unwrap_or_default();
    assert_eq!(titles.first().map(String::as_str), Some("Data Scientist"));
    assert_eq!(titles.last().map(String::as_str), Some("Data Architect"));

    // Asking for more rows than exist returns everything
    assert_eq!(dataset.head(100).num_rows(), 15);
    Ok(())
}

#[test]
fn test_records_match_batch() -> salary_dash::Result<()> {
    let dataset = load_dataset(&sample_dataset())?;
    let records = dataset.records()?;
    assert_eq!(records.len(), 15);
    assert_eq!(records[3].work_year, 2022);
    assert_eq!(records[3].salary_in_usd, 200_000.0);
    assert_eq!(records[6].salary_currency, "INR");
    assert_eq!(records[14].company_size, "S");
    Ok(())
}

#[test]
fn test_top_residences_by_salary_sum() -> salary_dash::Result<()> {
    let dataset = load_dataset(&sample_dataset())?;
    let top = top_n_by_sum(dataset.batch(), EMPLOYEE_RESIDENCE, SALARY_IN_USD, 10)?;

    let keys: Vec<_> = top.iter().map(|g| g.key.as_str()).collect();
    // Ties keep the order in which residences first appear
    assert_eq!(
        keys,
        vec![
            "United States",
            "Germany",
            "United Kingdom",
            "Australia",
            "Canada",
            "France",
            "Netherlands",
            "Portugal",
            "Spain",
            "Poland",
        ]
    );
    assert_eq!(top[0].total, 350_000.0);
    assert_eq!(top[1].total, 110_000.0);
    Ok(())
}

#[test]
fn test_top_residences_are_deterministic() -> salary_dash::Result<()> {
    let first = top_n_by_sum(load_dataset(&sample_dataset())?.batch(), EMPLOYEE_RESIDENCE, SALARY_IN_USD, 10)?;
    for _ in 0..5 {
        let again =
            top_n_by_sum(load_dataset(&sample_dataset())?.batch(), EMPLOYEE_RESIDENCE, SALARY_IN_USD, 10)?;
        assert_eq!(again, first);
    }
    Ok(())
}

#[test]
fn test_missing_dataset_fails_immediately() {
    let config = missing_files_config();
    let err = load_dataset(&config.dataset_path).unwrap_err();
    assert!(matches!(err, DashboardError::MissingFile { .. }));
}

#[test]
fn test_parquet_round_trip_through_loader() -> salary_dash::Result<()> {
    use parquet::arrow::ArrowWriter;

    let dataset = load_dataset(&sample_dataset())?;
    let path = std::env::temp_dir().join(format!("salary-dash-{}.parquet", std::process::id()));
    {
        let file = std::fs::File::create(&path)?;
        let mut writer = ArrowWriter::try_new(file, dataset.schema(), None)?;
        writer.write(dataset.batch())?;
        writer.close()?;
    }

    let reloaded = load_dataset(&path)?;
    std::fs::remove_file(&path)?;

    assert_eq!(reloaded.num_rows(), dataset.num_rows());
    assert_eq!(reloaded.column_names(), dataset.column_names());
    let residence = reloaded.batch().column(6);
    assert_eq!(residence.len(), 15);
    Ok(())
}

fn figure_count(dataset: &salary_dash::JobDataset) -> salary_dash::Result<usize> {
    let mut count = 0;
    for tab in exploration_tabs(&dataset.column_names(), 10) {
        count += build_figures(&tab.charts, dataset.batch())?.len();
    }
    Ok(count)
}

#[test]
fn test_header_only_dataset_still_builds_every_figure() -> salary_dash::Result<()> {
    let path = write_dataset("header-only", &[]);
    let dataset = load_dataset(&path)?;
    std::fs::remove_file(&path)?;

    assert_eq!(dataset.num_rows(), 0);
    assert_eq!(dataset.head(10).num_rows(), 0);
    assert!(top_n_by_sum(dataset.batch(), EMPLOYEE_RESIDENCE, SALARY_IN_USD, 10)?.is_empty());
    assert_eq!(figure_count(&dataset)?, 22);
    Ok(())
}

#[test]
fn test_single_row_dataset() -> salary_dash::Result<()> {
    let path = write_dataset(
        "single-row",
        &["2023,Data Scientist,Data Science and Research,USD,0,0,United States,Senior,Full-time,Remote,United States,M"],
    );
    let dataset = load_dataset(&path)?;
    std::fs::remove_file(&path)?;

    assert_eq!(dataset.head(10).num_rows(), 1);
    // A zero salary leaves the sized scatter without a positive scale
    assert_eq!(figure_count(&dataset)?, 22);
    Ok(())
}
