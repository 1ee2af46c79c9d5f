use axum::{
    http::{HeaderValue, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::error;

/// Rendered JSON body of a response, attached as a response extension so the access log
/// can print it without re-reading the body stream.
#[derive(Debug, Clone)]
pub struct CapturedJson(pub Arc<str>);

/// Serialize `body` once, send it as `application/json` and keep a copy in
/// [`CapturedJson`].
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    let text = match serde_json::to_string(body) {
        Ok(text) => text,
        Err(e) => {
            error!(error = %e, "failed to serialize response body");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let captured = CapturedJson(Arc::from(text.as_str()));
    let mut resp = (
        status,
        [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        text,
    )
        .into_response();
    resp.extensions_mut().insert(captured);
    resp
}

/// `200 OK` JSON response that records its body for the access log.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<T: Serialize> IntoResponse for ApiJson<T> {
    fn into_response(self) -> Response {
        json_response(StatusCode::OK, &self.0)
    }
}
