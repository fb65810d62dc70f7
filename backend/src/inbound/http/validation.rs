//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every helper returns the first failure as an [`ErrorCode::InvalidRequest`]
//! error carrying the client-facing message; none of them touch storage.
//!
//! [`ErrorCode::InvalidRequest`]: crate::domain::ErrorCode::InvalidRequest

use actix_web::error::PayloadError;
use actix_web::web;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::error::Category;
use tracing::debug;

use crate::domain::{Error, TodoId, TodoTitle};

pub(crate) const INVALID_JSON_MESSAGE: &str = "Request body must be valid JSON.";
pub(crate) const INVALID_PAYLOAD_MESSAGE: &str = "Invalid request payload.";
pub(crate) const INVALID_TODO_ID_MESSAGE: &str = "Invalid todo id.";
pub(crate) const TITLE_REQUIRED_MESSAGE: &str = "Title is required.";
pub(crate) const NO_FIELDS_MESSAGE: &str = "Provide at least one field to update.";
pub(crate) const BODY_TOO_LARGE_MESSAGE: &str = "Request body is too large.";

/// Parse a `/todos/{id}` path segment.
///
/// Accepts base-10 integers in `1..=i32::MAX` only.
pub(crate) fn parse_todo_id(raw: &str) -> Result<TodoId, Error> {
    raw.parse::<TodoId>()
        .map_err(|_| Error::invalid_request(INVALID_TODO_ID_MESSAGE))
}

/// Unwrap the raw request body, reporting extraction failures as validation
/// errors so clients always receive an `{ "error": ... }` body.
pub(crate) fn read_body(body: Result<web::Bytes, actix_web::Error>) -> Result<web::Bytes, Error> {
    body.map_err(|err| {
        debug!(error = %err, "request body rejected");
        match err.as_error::<PayloadError>() {
            Some(PayloadError::Overflow) => Error::invalid_request(BODY_TOO_LARGE_MESSAGE),
            _ => Error::invalid_request(INVALID_PAYLOAD_MESSAGE),
        }
    })
}

/// Deserialize an optional field that may be omitted but must not be `null`.
///
/// Pair with `#[serde(default)]`: a missing key stays `None`, while an
/// explicit `null` fails as a wrong-typed payload.
pub(crate) fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Deserialize a JSON request body.
///
/// Syntax errors and truncated input report [`INVALID_JSON_MESSAGE`];
/// well-formed JSON of the wrong shape reports [`INVALID_PAYLOAD_MESSAGE`].
pub(crate) fn parse_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(body).map_err(|err| match err.classify() {
        Category::Data => Error::invalid_request(INVALID_PAYLOAD_MESSAGE),
        Category::Syntax | Category::Eof | Category::Io => {
            Error::invalid_request(INVALID_JSON_MESSAGE)
        }
    })
}

/// Trim and bound-check a raw title.
pub(crate) fn parse_title(raw: &str) -> Result<TodoTitle, Error> {
    TodoTitle::new(raw).map_err(|err| Error::invalid_request(err.to_string()))
}
