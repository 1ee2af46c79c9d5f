use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use contact_schema::ValidationError;
use serde::Serialize;
use thiserror::Error as ThisError;

use super::SUBMIT_FAILED;
use crate::server::respond::json_response;

#[derive(Debug, ThisError)]
pub enum AppError {
    /// The body parsed but does not match the expected shape.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The body could not be read or parsed at all.
    #[error("{message}")]
    Request { status: StatusCode, message: String },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Request { status, .. } => *status,
        }
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        AppError::Request {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::Validation(err) => json_response(
                status,
                &ErrorBody {
                    error: err.to_string(),
                },
            ),
            AppError::Database(_) => json_response(
                status,
                &ErrorBody {
                    error: SUBMIT_FAILED.to_string(),
                },
            ),
            AppError::Request { message, .. } => json_response(status, &MessageBody { message }),
        }
    }
}

/// `{"error": ...}`: route-level failures.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `{"message": ...}`: failures caught outside the routes.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}
