use count_values_shared_kernel::{DomainError, DomainResult};

use crate::{
    analytics::FrequencyTable,
    model::{CountEntry, Row},
};

/// Counts distinct values per column over a materialized set of rows.
pub struct Aggregator;

impl Aggregator {
    /// Flattens the per-column value counts of `rows` into entries.
    ///
    /// Columns come from the first row, in its key order; values within a
    /// column appear in the order they were first seen. Empty input yields
    /// no entries.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingField`] when any row lacks a column of
    /// the first row. No partial result is produced.
    pub fn aggregate(rows: &[Row]) -> DomainResult<Vec<CountEntry>> {
        Ok(Self::tabulate(rows)?.into_entries())
    }

    /// Builds the frequency table behind [`Aggregator::aggregate`].
    ///
    /// Keys present only on later rows are ignored.
    ///
    /// # Errors
    ///
    /// Same as [`Aggregator::aggregate`].
    pub fn tabulate(rows: &[Row]) -> DomainResult<FrequencyTable> {
        let Some(first) = rows.first() else {
            return Ok(FrequencyTable::new());
        };

        let columns: Vec<&str> = first.columns().collect();
        let mut table = FrequencyTable::with_columns(columns.iter().copied());

        for column in &columns {
            for (index, row) in rows.iter().enumerate() {
                let value = row.get(column).ok_or_else(|| DomainError::MissingField {
                    column: (*column).to_string(),
                    row: index,
                })?;
                table.record(column, value);
            }
        }

        Ok(table)
    }
}
