// crates/ports/src/records.rs
use std::path::PathBuf;

use count_values_shared_kernel::Result;

/// Input parameters controlling how a delimited source is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordReadPlan {
    pub path: PathBuf,
    pub delimiter: u8,
}

impl RecordReadPlan {
    pub fn new(path: impl Into<PathBuf>, delimiter: u8) -> Self {
        Self { path: path.into(), delimiter }
    }
}

/// DTO representing one data line keyed by header.
///
/// `fields` holds at most one pair per header column, in header order.
/// A short line carries fewer pairs than there are headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDto {
    /// 1-based line number in the source, when known.
    pub line: Option<u64>,
    pub fields: Vec<(String, String)>,
}

/// Port for reading every record of a source into memory.
pub trait RecordSource: Send + Sync {
    fn read(&self, plan: &RecordReadPlan) -> Result<Vec<RecordDto>>;
}
