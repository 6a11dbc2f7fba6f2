pub mod count_entry;
pub mod row;

pub use count_entry::CountEntry;
pub use row::Row;
