//! Transport seam
//!
//! [`Botman`](crate::Botman) never talks to the network directly. Each call is
//! handed to a [`Transport`] as an [`ApiRequest`] and comes back as an
//! [`ApiResponse`] whose body has already been read in full, so nothing is
//! left open once `send` returns, whatever the status.
//!
//! - [`http`] - [`HttpSession`], the reqwest-backed transport
//!
//! Signing schemes such as EdgeGrid belong in a custom transport.

pub mod http;

pub use http::HttpSession;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde_json::Value;

/// One outbound call: method, API path and optional JSON body.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute API path, e.g. `/appsec/v1/configs/1/versions/2/custom-clients`.
    pub path: String,
    pub body: Option<Value>,
}

/// Status and fully read body of a response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Errors raised by a transport before a response is available.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid request path {path:?}: {source}")]
    InvalidPath {
        path: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("transport error: {0}")]
    Custom(Box<dyn std::error::Error + Send + Sync>),
}

/// Sends a request and returns the response.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}
