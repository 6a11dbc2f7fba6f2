use count_values_shared_kernel::Occurrences;

/// Per-column totals over a frequency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSummary {
    pub column: String,
    /// Number of distinct values seen.
    pub distinct: usize,
    /// Sum of all counts; equals the row count for a complete table.
    pub total: Occurrences,
}

impl ColumnSummary {
    pub fn new(column: impl Into<String>, distinct: usize, total: Occurrences) -> Self {
        Self { column: column.into(), distinct, total }
    }
}
