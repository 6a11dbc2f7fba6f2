pub mod entities;
pub mod value_objects;

pub use entities::{CountEntry, Row};
pub use value_objects::ColumnSummary;
