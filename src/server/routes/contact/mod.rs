use crate::server::router::AppState;
use axum::{Router, routing::post};

pub mod handlers;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/contact", post(handlers::submit_contact))
}
