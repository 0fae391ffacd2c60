//! Error types
//!
//! [`Error`] is returned by every client operation. Remote failures carry the
//! decoded [`ApiError`] document so callers can inspect status and detail.

use crate::session::TransportError;
use crate::validation::ValidationErrors;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Result<T, E = Error> = std::result::Result<T, E>;

const UNPARSEABLE_TITLE: &str =
    "Failed to unmarshal error body. Bot Manager API failed. Check details for more information.";

/// Errors returned by [`crate::Botman`] operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required request field was left at its zero value. Nothing was sent.
    #[error("struct validation: {0}")]
    Validation(#[from] ValidationErrors),

    /// The API answered with an unexpected status.
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("{operation} request failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: TransportError,
    },

    #[error("{operation}: failed to decode response body: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A list record lacks the string field used for filtering.
    #[error("list record {index} has no string field `{key}`")]
    MalformedRecord { key: &'static str, index: usize },
}

impl Error {
    /// The remote error document, if this is an API error.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(api) => Some(api),
            _ => None,
        }
    }

    /// HTTP status of an API error.
    pub fn status(&self) -> Option<u16> {
        self.api_error().map(|api| api.status_code)
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// True when this is an API error equal to `target`.
    pub fn is(&self, target: &ApiError) -> bool {
        self.api_error().is_some_and(|api| api == target)
    }
}

/// Problem document returned by the API on failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(rename = "type", default)]
    pub error_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub instance: String,
    #[serde(rename = "behaviorName", default, skip_serializing_if = "String::is_empty")]
    pub behavior_name: String,
    #[serde(rename = "errorLocation", default, skip_serializing_if = "String::is_empty")]
    pub error_location: String,
    #[serde(rename = "status", default, deserialize_with = "lenient_status")]
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
}

/// A body `status` outside the `u16` range or of the wrong type reads as 0
/// instead of failing the whole document.
fn lenient_status<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_u64()
        .and_then(|status| u16::try_from(status).ok())
        .unwrap_or_default())
}

impl ApiError {
    /// Build an error from a response that did not carry the expected status.
    ///
    /// The HTTP status always wins over any `status` in the body. A body that
    /// is not a JSON error document is kept verbatim as the detail.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let mut error = match serde_json::from_str::<ApiError>(body) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::error!("could not unmarshal API error: {}", err);
                ApiError {
                    title: UNPARSEABLE_TITLE.to_string(),
                    detail: body.to_string(),
                    ..Default::default()
                }
            }
        };
        error.status_code = status.as_u16();
        error
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string_pretty(self) {
            Ok(doc) => write!(f, "API error: \n{}", doc),
            Err(err) => write!(f, "error marshaling API error: {}", err),
        }
    }
}

impl std::error::Error for ApiError {}

/// Two errors are equal when they share a status code and render identically.
impl PartialEq for ApiError {
    fn eq(&self, other: &Self) -> bool {
        self.status_code == other.status_code && self.to_string() == other.to_string()
    }
}
