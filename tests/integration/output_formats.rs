// tests/integration/output_formats.rs
use count_values::{app, config::Config, options::OutputFormat};

#[path = "../common/mod.rs"]
mod common;
use common::{SUCCESS_CSV, write_file};

fn render(format: OutputFormat) -> String {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_file(&tmp, "success.csv", SUCCESS_CSV);
    let config = Config { input: path, delimiter: b',', format };

    let mut out = Vec::new();
    app::run(&config, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn json_is_pretty_printed_array() {
    let text = render(OutputFormat::Json);
    assert!(text.starts_with("[\n"));
    assert!(text.contains("\"key\": \"success\""));
    assert!(text.ends_with("]\n"));
}

#[test]
fn jsonl_has_one_entry_per_line() {
    let text = render(OutputFormat::Jsonl);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["key"], "success");
    }
}

#[test]
fn table_lists_entries_then_summary() {
    let text = render(OutputFormat::Table);
    let true_at = text.find("True").unwrap();
    let false_at = text.find("False").unwrap();
    assert!(true_at < false_at);
    assert!(text.contains("3 rows"));
}
