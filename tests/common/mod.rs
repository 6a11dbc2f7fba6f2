// tests/common/mod.rs
//! 共通テストユーティリティ


#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use temp::write_file;
