// crates/ports/src/report.rs
use count_values_shared_kernel::Result;
use serde::Serialize;

/// DTO representing one (column, value, count) triple handed to an output port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntryDto {
    pub key: String,
    pub value: String,
    pub count: usize,
}

/// DTO summarising one column for report footers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSummaryDto {
    pub column: String,
    pub distinct: usize,
    pub total: usize,
}

/// Everything a report writer renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountReport {
    pub rows: usize,
    pub entries: Vec<CountEntryDto>,
    pub columns: Vec<ColumnSummaryDto>,
}

/// Port for rendering a report to a user-facing channel.
pub trait ReportWriter {
    fn write_report(&mut self, report: &CountReport) -> Result<()>;
}
