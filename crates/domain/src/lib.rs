#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod model;

pub use analytics::{Aggregator, FrequencyTable};
pub use model::{ColumnSummary, CountEntry, Row};
