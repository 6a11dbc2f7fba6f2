use count_values_domain::{ColumnSummary, CountEntry};
use count_values_ports::report::{ColumnSummaryDto, CountEntryDto, CountReport};

/// Result of counting values over one source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountValuesOutput {
    pub rows: usize,
    pub entries: Vec<CountEntry>,
    pub summaries: Vec<ColumnSummary>,
}

impl CountValuesOutput {
    pub fn to_report(&self) -> CountReport {
        CountReport {
            rows: self.rows,
            entries: self.entries.iter().map(entry_to_dto).collect(),
            columns: self.summaries.iter().map(summary_to_dto).collect(),
        }
    }
}

fn entry_to_dto(entry: &CountEntry) -> CountEntryDto {
    CountEntryDto {
        key: entry.key.clone(),
        value: entry.value.clone(),
        count: entry.count.value(),
    }
}

fn summary_to_dto(summary: &ColumnSummary) -> ColumnSummaryDto {
    ColumnSummaryDto {
        column: summary.column.clone(),
        distinct: summary.distinct,
        total: summary.total.value(),
    }
}
