//! Column value frequency analysis.

pub mod aggregate;
pub mod frequency;

pub use aggregate::Aggregator;
pub use frequency::FrequencyTable;
