//! Bot Manager client
//!
//! [`Botman`] owns a shared [`Transport`] and drives every operation through
//! [`Botman::exec`]: validate, send, check status, decode.

use crate::config::ClientConfig;
use crate::error::{ApiError, Error, Result};
use crate::session::http::sanitize_for_log;
use crate::session::{ApiRequest, ApiResponse, HttpSession, Transport, TransportError};
use crate::validation::Validate;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Name, verb and expected success status of one API operation.
#[derive(Debug, Clone)]
pub(crate) struct Operation {
    pub name: &'static str,
    pub method: Method,
    pub expected: StatusCode,
}

impl Operation {
    pub(crate) fn new(name: &'static str, method: Method, expected: StatusCode) -> Self {
        Self {
            name,
            method,
            expected,
        }
    }

    pub(crate) fn read(name: &'static str) -> Self {
        Self::new(name, Method::GET, StatusCode::OK)
    }

    pub(crate) fn create(name: &'static str) -> Self {
        Self::new(name, Method::POST, StatusCode::CREATED)
    }

    pub(crate) fn update(name: &'static str) -> Self {
        Self::new(name, Method::PUT, StatusCode::OK)
    }

    pub(crate) fn remove(name: &'static str) -> Self {
        Self::new(name, Method::DELETE, StatusCode::NO_CONTENT)
    }
}

/// `/appsec/v1/configs/{config_id}/versions/{version}`
pub(crate) fn config_path(config_id: i64, version: i64) -> String {
    format!("/appsec/v1/configs/{}/versions/{}", config_id, version)
}

/// `/appsec/v1/configs/{config_id}/versions/{version}/security-policies/{policy}`
pub(crate) fn policy_path(config_id: i64, version: i64, security_policy_id: &str) -> String {
    format!(
        "{}/security-policies/{}",
        config_path(config_id, version),
        security_policy_id
    )
}

/// Client for the Bot Manager API
#[derive(Clone)]
pub struct Botman {
    transport: Arc<dyn Transport>,
}

impl Botman {
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Build a client over an [`HttpSession`] configured from `config`
    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        Ok(Self::new(HttpSession::from_config(config)?))
    }

    /// Run an operation and decode the success body into `T`.
    ///
    /// An empty success body decodes to `T::default()`.
    pub(crate) async fn exec<T, P>(
        &self,
        op: &Operation,
        params: &P,
        path: String,
        body: Option<Value>,
    ) -> Result<T>
    where
        T: DeserializeOwned + Default,
        P: Validate + ?Sized,
    {
        let response = self.round_trip(op, params, path, body).await?;
        if response.body.trim().is_empty() {
            return Ok(T::default());
        }
        serde_json::from_str(&response.body).map_err(|source| Error::Decode {
            operation: op.name,
            source,
        })
    }

    /// Run an operation whose success response carries no body.
    pub(crate) async fn exec_empty<P>(
        &self,
        op: &Operation,
        params: &P,
        path: String,
        body: Option<Value>,
    ) -> Result<()>
    where
        P: Validate + ?Sized,
    {
        self.round_trip(op, params, path, body).await.map(|_| ())
    }

    async fn round_trip<P>(
        &self,
        op: &Operation,
        params: &P,
        path: String,
        body: Option<Value>,
    ) -> Result<ApiResponse>
    where
        P: Validate + ?Sized,
    {
        tracing::debug!("{}: {} {}", op.name, op.method, path);

        params.validate()?;

        let request = ApiRequest {
            method: op.method.clone(),
            path,
            body,
        };
        let response = self
            .transport
            .send(request)
            .await
            .map_err(|source| Error::Transport {
                operation: op.name,
                source,
            })?;

        if response.status != op.expected {
            tracing::error!(
                "{}: API error: {} - {}",
                op.name,
                response.status,
                sanitize_for_log(&response.body)
            );
            return Err(ApiError::from_response(response.status, &response.body).into());
        }

        Ok(response)
    }
}
