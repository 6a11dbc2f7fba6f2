pub mod summary;

pub use summary::ColumnSummary;
