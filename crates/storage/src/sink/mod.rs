//! Write-only destinations for audit entries.

pub mod database;
pub mod file;
pub mod r#trait;

pub use database::DatabaseStorage;
pub use file::FileStorage;
pub use r#trait::Sink;
