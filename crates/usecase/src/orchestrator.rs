use count_values_domain::{Aggregator, Row};
use count_values_ports::records::{RecordDto, RecordReadPlan, RecordSource};
use count_values_shared_kernel::{DomainError, ErrorContext, Result};

use crate::dto::CountValuesOutput;

pub struct CountValues<'a> {
    source: &'a dyn RecordSource,
}

impl<'a> CountValues<'a> {
    pub fn new(source: &'a dyn RecordSource) -> Self {
        Self { source }
    }

    pub fn run(&self, plan: &RecordReadPlan) -> Result<CountValuesOutput> {
        let records = self.source.read(plan)?;
        log::debug!("read {} records from {}", records.len(), plan.path.display());

        let lines: Vec<Option<u64>> = records.iter().map(|r| r.line).collect();
        let rows: Vec<Row> = records.into_iter().map(record_to_row).collect();

        let table = match Aggregator::tabulate(&rows) {
            Ok(table) => table,
            Err(err) => {
                let context = failure_context(&err, &lines, plan);
                return Err(err).context(context);
            }
        };

        let summaries = table.summaries();
        for summary in &summaries {
            log::debug!(
                "column '{}': {} distinct values over {} rows",
                summary.column,
                summary.distinct,
                summary.total
            );
        }

        let entries = table.into_entries();
        log::info!("counted {} distinct (column, value) pairs", entries.len());

        Ok(CountValuesOutput { rows: rows.len(), entries, summaries })
    }
}

fn record_to_row(record: RecordDto) -> Row {
    record.fields.into_iter().collect()
}

/// Points a row-level failure back at the source line when the reader knows it.
fn failure_context(err: &DomainError, lines: &[Option<u64>], plan: &RecordReadPlan) -> String {
    let line = match err {
        DomainError::MissingField { row, .. } => lines.get(*row).copied().flatten(),
    };
    match line {
        Some(line) => format!("line {line} of '{}'", plan.path.display()),
        None => format!("counting values in '{}'", plan.path.display()),
    }
}
