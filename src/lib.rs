pub mod config;
pub mod db;
pub mod error;
pub mod server;
pub mod storage;

pub use contact_schema;
pub use error::{AppError, ConfigError};
pub use storage::{ContactStorage, DbStorage};
