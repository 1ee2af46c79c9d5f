use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{StatusCode, header::CONTENT_TYPE},
};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::AppError;

/// A request body decoded into JSON, with the raw bytes kept alongside.
///
/// - `application/json` and `*+json`: parsed; only objects and arrays are accepted.
///   An empty body becomes `{}`.
/// - `application/x-www-form-urlencoded`: decoded into an object of strings. A key that
///   repeats becomes an array of its values.
/// - anything else, or no content type: `{}`. The raw bytes are still kept.
///
/// Bodies over the router's `DefaultBodyLimit` are rejected with 413.
#[derive(Debug, Clone)]
pub struct RequestBody {
    pub raw: Bytes,
    pub value: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(content_type: Option<&str>) -> BodyKind {
    let Some(content_type) = content_type else {
        return BodyKind::Other;
    };
    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if media_type == "application/json" || media_type.ends_with("+json") {
        BodyKind::Json
    } else if media_type == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

fn parse_json(raw: &[u8]) -> Result<Value, AppError> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }

    let value: Value = serde_json::from_slice(raw).map_err(|e| AppError::Request {
        status: StatusCode::BAD_REQUEST,
        message: format!("Malformed JSON body: {e}"),
    })?;

    match value {
        Value::Object(_) | Value::Array(_) => Ok(value),
        _ => Err(AppError::Request {
            status: StatusCode::BAD_REQUEST,
            message: "JSON body must be an object or an array".to_string(),
        }),
    }
}

fn parse_form(raw: &[u8]) -> Value {
    let mut fields = Map::new();
    for (key, value) in url::form_urlencoded::parse(raw) {
        let value = Value::String(value.into_owned());
        match fields.get_mut(key.as_ref()) {
            Some(Value::Array(values)) => values.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                fields.insert(key.into_owned(), value);
            }
        }
    }
    Value::Object(fields)
}

impl<S> FromRequest<S> for RequestBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = body_kind(
            req.headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
        );

        let raw = Bytes::from_request(req, state).await?;

        let value = match kind {
            BodyKind::Json => parse_json(&raw)?,
            BodyKind::Form => parse_form(&raw),
            BodyKind::Other => Value::Object(Map::new()),
        };

        debug!(bytes = raw.len(), kind = ?kind, "request body captured");
        Ok(Self { raw, value })
    }
}
