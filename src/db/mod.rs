//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `pool.rs`: the process-wide connection pool

pub mod models;
pub mod pool;
pub mod schema;

pub use models::{DbContactSubmission, DbUser};
pub use pool::connect;
pub use schema::SQLITE_INIT;
pub use sqlx::SqlitePool;
