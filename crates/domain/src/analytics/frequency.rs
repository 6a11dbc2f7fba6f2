use count_values_shared_kernel::Occurrences;
use indexmap::IndexMap;

use crate::model::{ColumnSummary, CountEntry};

/// Column -> value -> occurrences, both levels in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    columns: IndexMap<String, IndexMap<String, Occurrences>>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers columns up front so their order does not depend on which is recorded first.
    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = columns.into_iter().map(|c| (c.into(), IndexMap::new())).collect();
        Self { columns }
    }

    /// Inserts `value` under `column` with a count of one, or increments the existing count.
    /// Returns the count after the update.
    pub fn record(&mut self, column: &str, value: &str) -> Occurrences {
        let index = match self.columns.get_index_of(column) {
            Some(index) => index,
            None => self.columns.insert_full(column.to_string(), IndexMap::new()).0,
        };
        let values = &mut self.columns[index];

        match values.get_mut(value) {
            Some(count) => {
                count.increment();
                *count
            }
            None => {
                values.insert(value.to_string(), Occurrences::one());
                Occurrences::one()
            }
        }
    }

    pub fn count(&self, column: &str, value: &str) -> Option<Occurrences> {
        self.columns.get(column)?.get(value).copied()
    }

    /// Number of output entries the table flattens into.
    pub fn entry_count(&self) -> usize {
        self.columns.values().map(IndexMap::len).sum()
    }

    pub fn summaries(&self) -> Vec<ColumnSummary> {
        self.columns
            .iter()
            .map(|(column, values)| ColumnSummary::new(column.clone(), values.len(), values.values().sum()))
            .collect()
    }

    pub fn into_entries(self) -> Vec<CountEntry> {
        let mut entries = Vec::with_capacity(self.entry_count());
        for (column, values) in self.columns {
            entries.extend(
                values
                    .into_iter()
                    .map(|(value, count)| CountEntry { key: column.clone(), value, count }),
            );
        }
        entries
    }
}
