// src/app.rs
use crate::config::Config;
use crate::options::OutputFormat;
use count_values_infra::{CsvRecordSource, JsonLinesReportWriter, JsonReportWriter, TableReportWriter};
use count_values_ports::report::ReportWriter;
use count_values_shared_kernel::{ErrorContext, Result};
use count_values_usecase::{CountValues, CountValuesOutput};
use std::io::Write;

/// Reads `config.input`, counts values per column and writes the report to `out`.
pub fn run<W: Write>(config: &Config, out: W) -> Result<CountValuesOutput> {
    log::debug!(
        "input={} delimiter={:?} format={}",
        config.input.display(),
        char::from(config.delimiter),
        config.format
    );

    let source = CsvRecordSource::new();
    let output = CountValues::new(&source).run(&config.plan())?;

    let mut writer = writer_for(config.format, out);
    writer.write_report(&output.to_report()).context("writing report")?;

    Ok(output)
}

pub fn writer_for<'a, W: Write + 'a>(format: OutputFormat, out: W) -> Box<dyn ReportWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonReportWriter::new(out)),
        OutputFormat::Jsonl => Box::new(JsonLinesReportWriter::new(out)),
        OutputFormat::Table => Box::new(TableReportWriter::new(out)),
    }
}
