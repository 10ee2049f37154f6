pub mod database;
pub mod environment;

pub use database::{init_db, is_duplicate_entry, DbPool};
