// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod persistence;
pub mod records;
pub mod report;

pub use records::CsvRecordSource;
pub use report::{JsonLinesReportWriter, JsonReportWriter, TableReportWriter};
