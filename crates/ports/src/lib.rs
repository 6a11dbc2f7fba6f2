//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`records`]: reading delimited records from a source
//! - [`report`]: writing count entries to an output channel
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod records;
pub mod report;
