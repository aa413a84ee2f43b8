//! Error types for MBTA API operations.
//!
//! Failed responses are classified by HTTP status: 400 and 404 carry a
//! JSON:API error document whose first entry names the offending parameter,
//! 403 and 429 are fixed conditions, and anything else is surfaced as a
//! generic API error.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur during MBTA API operations.
#[derive(Debug, Error)]
pub enum MbtaError {
    /// Request parameters failed local validation before any network call.
    #[error("invalid request configuration: {0}")]
    InvalidConfig(String),

    /// An empty ID was passed to a get-by-id operation.
    #[error("must specify an id (cannot be an empty string)")]
    MustSpecifyId,

    /// A get-by-id endpoint returned `data: null`.
    #[error("{resource_type} '{id}' not found")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// The API rejected the request (status 400 or 404) with a structured
    /// error body.
    #[error("parameter \"{parameter}\" caused error [{code}]: ({detail})")]
    BadRequest {
        parameter: String,
        detail: String,
        code: String,
    },

    /// Status 403.
    #[error("forbidden")]
    Forbidden,

    /// Status 429.
    #[error("you have exceeded your allowed usage rate")]
    RateLimitExceeded,

    /// Any other non-2xx status.
    #[error("MBTA API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// A timestamp attribute matched neither the full ISO8601 format nor the
    /// date-only format.
    #[error("malformed timestamp: {0}")]
    MalformedTimestamp(String),

    /// The response was not a structurally valid JSON:API document.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Field-level decode error inside a resource.
    #[error("failed to decode response: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Result type alias for MBTA operations.
pub type Result<T> = core::result::Result<T, MbtaError>;

/// One entry of a JSON:API `errors` array.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorObject {
    #[serde(default)]
    pub source: Option<ErrorSource>,
    /// The API puts the human-readable summary in `title`.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorSource {
    #[serde(default)]
    pub parameter: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorDocument {
    #[serde(default)]
    errors: Vec<ErrorObject>,
}

/// Map a non-2xx status and its body to a classified error.
pub(crate) fn classify(status: u16, body: &str) -> MbtaError {
    match status {
        400 | 404 => bad_request_from_body(body),
        403 => MbtaError::Forbidden,
        429 => MbtaError::RateLimitExceeded,
        _ => MbtaError::Api {
            status,
            message: best_effort_message(body),
        },
    }
}

/// Build a [`MbtaError::BadRequest`] from a non-empty `errors` array.
///
/// The decoder calls this when a 2xx payload carries `errors`; the caller
/// guarantees the slice is non-empty.
pub(crate) fn from_error_objects(errors: &[ErrorObject]) -> MbtaError {
    match errors.first() {
        Some(first) => bad_request_from_object(first.clone()),
        None => MbtaError::MalformedPayload("empty errors array".to_string()),
    }
}

fn bad_request_from_body(body: &str) -> MbtaError {
    let document: ErrorDocument = match serde_json::from_str(body) {
        Ok(document) => document,
        Err(_) => {
            return MbtaError::MalformedPayload(
                "error response body is not a JSON:API error document".to_string(),
            )
        }
    };
    // The upstream API should never send an empty errors array on 400/404,
    // but guard it rather than indexing blindly.
    match document.errors.into_iter().next() {
        Some(first) => bad_request_from_object(first),
        None => {
            MbtaError::MalformedPayload("error response with an empty errors array".to_string())
        }
    }
}

fn bad_request_from_object(error: ErrorObject) -> MbtaError {
    MbtaError::BadRequest {
        parameter: error
            .source
            .and_then(|source| source.parameter)
            .unwrap_or_default(),
        detail: error.title.unwrap_or_default(),
        code: error.code.unwrap_or_default(),
    }
}

fn best_effort_message(body: &str) -> String {
    let document: ErrorDocument = serde_json::from_str(body).unwrap_or_default();
    match document.errors.first().and_then(|error| error.title.clone()) {
        Some(title) => title,
        None => body.to_string(),
    }
}
