use crate::error::{INTERNAL_SERVER_ERROR, MessageBody};
use crate::server::access_log::access_log;
use crate::server::respond::json_response;
use crate::server::routes;
use crate::storage::ContactStorage;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware,
    response::Response,
};
use std::{any::Any, sync::Arc};
use tower_http::catch_panic::CatchPanicLayer;
use tracing::error;

/// Largest request body accepted by any route.
pub const BODY_LIMIT: usize = 100 * 1024;

/// Dependencies handed to every handler. Built once in `main` and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn ContactStorage>,
}

impl AppState {
    pub fn new(storage: Arc<dyn ContactStorage>) -> Self {
        Self { storage }
    }
}

/// Terminal error handler: a panic anywhere below this layer becomes a JSON 500.
///
/// The request stops here. The panic is logged and not re-raised, so the process keeps
/// serving other connections.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    error!(panic = %detail, "request handler panicked");

    json_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        &MessageBody {
            message: INTERNAL_SERVER_ERROR.to_string(),
        },
    )
}

async fn method_not_allowed() -> Response {
    json_response(
        StatusCode::METHOD_NOT_ALLOWED,
        &MessageBody {
            message: "Method Not Allowed".to_string(),
        },
    )
}

/// Assemble the application.
///
/// `setup` runs after the API routes are registered and before any layer is installed.
/// The binary uses it to attach the static asset server as the fallback; tests can pass
/// `std::convert::identity`. A known path hit with the wrong method answers a JSON 405
/// unless `setup` already installed a handler for that case.
pub fn build_router<F>(state: AppState, setup: F) -> Router
where
    F: FnOnce(Router<AppState>) -> Router<AppState>,
{
    setup(routes::router())
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(access_log))
}
