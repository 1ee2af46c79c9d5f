mod app;
mod config;

pub use app::{AppError, ErrorBody, MessageBody};
pub use config::ConfigError;

/// Body returned by the contact route when persistence fails.
pub const SUBMIT_FAILED: &str = "Failed to submit contact form";

/// Body returned by the terminal error handler when nothing more specific is known.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";
