use crate::server::router::AppState;
use axum::Router;

pub mod contact;

/// Every API route. Static assets are attached separately.
pub fn router() -> Router<AppState> {
    Router::new().merge(contact::router())
}
