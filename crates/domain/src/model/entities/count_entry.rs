use count_values_shared_kernel::Occurrences;
use serde::{Deserialize, Serialize};

/// How often `value` appeared under column `key`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountEntry {
    pub key: String,
    pub value: String,
    pub count: Occurrences,
}

impl CountEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>, count: impl Into<Occurrences>) -> Self {
        Self { key: key.into(), value: value.into(), count: count.into() }
    }
}
