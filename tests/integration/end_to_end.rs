// tests/integration/end_to_end.rs
use count_values::{app, config::Config, options::OutputFormat};
use count_values_shared_kernel::{CountValuesError, DomainError};

#[path = "../common/mod.rs"]
mod common;
use common::{SHORT_ROW_CSV, SUCCESS_CSV, TWO_COLUMN_CSV, two_column_entries, write_file};

fn config_for(path: std::path::PathBuf, format: OutputFormat) -> Config {
    Config { delimiter: count_values::options::delimiter_for(&path), input: path, format }
}

#[test]
fn run_returns_output_and_writes_report() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_file(&tmp, "two.csv", TWO_COLUMN_CSV);

    let mut out = Vec::new();
    let output = app::run(&config_for(path, OutputFormat::Json), &mut out).unwrap();

    assert_eq!(output.rows, 3);
    assert_eq!(output.entries.len(), 4);
    let written: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(written, two_column_entries());
}

#[test]
fn counts_sum_to_row_count_per_column() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_file(&tmp, "two.csv", TWO_COLUMN_CSV);

    let output = app::run(&config_for(path, OutputFormat::Json), std::io::sink()).unwrap();
    for summary in &output.summaries {
        assert_eq!(summary.total, output.rows);
    }
}

#[test]
fn short_row_is_a_missing_field_error_and_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_file(&tmp, "short.csv", SHORT_ROW_CSV);

    let mut out = Vec::new();
    let err = app::run(&config_for(path, OutputFormat::Json), &mut out).unwrap_err();

    assert!(out.is_empty());
    assert!(matches!(
        err.root(),
        CountValuesError::Domain(DomainError::MissingField { column, row: 1 }) if column == "b"
    ));
}

#[test]
fn running_twice_is_idempotent() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_file(&tmp, "success.csv", SUCCESS_CSV);
    let config = config_for(path, OutputFormat::Json);

    let first = app::run(&config, std::io::sink()).unwrap();
    let second = app::run(&config, std::io::sink()).unwrap();
    assert_eq!(first, second);
}
