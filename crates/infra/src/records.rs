// crates/infra/src/records.rs
use std::{io::Read, path::Path};

use count_values_ports::records::{RecordDto, RecordReadPlan, RecordSource};
use count_values_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileReader;

/// Reads a header-prefixed delimited file with the `csv` crate.
///
/// Lines may carry fewer or more cells than the header: short lines yield
/// records without the trailing columns, surplus cells are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvRecordSource;

impl CsvRecordSource {
    pub fn new() -> Self {
        Self
    }

    /// Parses records from any reader, labelling errors with `plan.path`.
    pub fn read_from<R: Read>(&self, reader: R, plan: &RecordReadPlan) -> Result<Vec<RecordDto>> {
        let mut csv = csv::ReaderBuilder::new()
            .delimiter(plan.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv.headers().map_err(|e| parse_error(&plan.path, &e))?.clone();
        log::debug!("headers of {}: {:?}", plan.path.display(), headers);

        let mut records = Vec::new();
        for result in csv.records() {
            let record = result.map_err(|e| parse_error(&plan.path, &e))?;
            if record.len() != headers.len() {
                log::debug!(
                    "{}: record with {} fields against {} headers",
                    plan.path.display(),
                    record.len(),
                    headers.len()
                );
            }
            let fields = headers
                .iter()
                .zip(record.iter())
                .map(|(column, value)| (column.to_string(), value.to_string()))
                .collect();
            records.push(RecordDto { line: record.position().map(csv::Position::line), fields });
        }

        Ok(records)
    }
}

impl RecordSource for CsvRecordSource {
    fn read(&self, plan: &RecordReadPlan) -> Result<Vec<RecordDto>> {
        let file = FileReader::open_buffered(&plan.path)?;
        self.read_from(file, plan)
    }
}

fn parse_error(path: &Path, err: &csv::Error) -> InfrastructureError {
    InfrastructureError::RecordParse {
        path: path.to_path_buf(),
        line: err.position().map(csv::Position::line),
        details: err.to_string(),
    }
}
