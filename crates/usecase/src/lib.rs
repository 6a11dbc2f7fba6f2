//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: reads records through a port and counts values per column
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::CountValuesOutput;
pub use orchestrator::CountValues;
