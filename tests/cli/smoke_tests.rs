use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{SHORT_ROW_CSV, SUCCESS_CSV, TWO_COLUMN_CSV, TWO_COLUMN_TSV, two_column_entries, write_file};

fn count_values() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_count_values"));
    cmd.env_remove("COUNT_VALUES_FORMAT").env_remove("RUST_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout is JSON")
}

#[test]
fn shows_help() {
    count_values()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("count_values"))
        .stdout(predicate::str::contains("CSV_FILE"));
}

#[test]
fn requires_input_argument() {
    count_values().assert().failure().stderr(predicate::str::contains("CSV_FILE"));
}

#[test]
fn counts_single_column() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_file(&tmp, "success.csv", SUCCESS_CSV);

    let json = stdout_json(count_values().arg(&path));
    assert_eq!(
        json,
        serde_json::json!([
            {"key": "success", "value": "True", "count": 2},
            {"key": "success", "value": "False", "count": 1}
        ])
    );
}

#[test]
fn counts_every_column_in_header_order() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_file(&tmp, "two.csv", TWO_COLUMN_CSV);

    assert_eq!(stdout_json(count_values().arg(&path)), two_column_entries());
}

#[test]
fn tsv_extension_switches_to_tabs() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_file(&tmp, "two.tsv", TWO_COLUMN_TSV);

    assert_eq!(stdout_json(count_values().arg(&path)), two_column_entries());
}

#[test]
fn header_only_file_prints_empty_list() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_file(&tmp, "empty.csv", "a,b\n");

    assert_eq!(stdout_json(count_values().arg(&path)), serde_json::json!([]));
}

#[test]
fn missing_file_fails_with_diagnostic() {
    count_values()
        .arg("definitely-missing.csv")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("definitely-missing.csv"));
}

#[test]
fn directory_argument_fails() {
    let tmp = tempfile::tempdir().unwrap();
    count_values().arg(tmp.path()).assert().failure().stderr(predicate::str::contains("directory"));
}

#[test]
fn short_row_fails_naming_the_column() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_file(&tmp, "short.csv", SHORT_ROW_CSV);

    count_values()
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Missing field 'b'"))
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn table_format_from_environment() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_file(&tmp, "success.csv", SUCCESS_CSV);

    count_values()
        .env("COUNT_VALUES_FORMAT", "table")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("KEY"))
        .stdout(predicate::str::contains("success: 2 distinct / 3 total"));
}

#[test]
fn unknown_format_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_file(&tmp, "success.csv", SUCCESS_CSV);

    count_values()
        .env("COUNT_VALUES_FORMAT", "xml")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("COUNT_VALUES_FORMAT"));
}

#[test]
fn piped_logs_carry_no_color_codes() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_file(&tmp, "success.csv", SUCCESS_CSV);

    count_values()
        .env("RUST_LOG", "debug")
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("success"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}
