//! HTTP transport for Bot Manager API calls

use super::{ApiRequest, ApiResponse, Transport, TransportError};
use crate::config::ClientConfig;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

const DEFAULT_USER_AGENT: &str = concat!("botman/", env!("CARGO_PKG_VERSION"));

/// Sanitize response body for logging
/// Truncates long responses and strips non-printable characters
pub(crate) fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let mut end = MAX_LOG_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... [truncated, {} bytes total]", &body[..end], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// reqwest-backed [`Transport`]
#[derive(Clone, Debug)]
pub struct HttpSession {
    client: Client,
    base_url: Url,
    access_token: Option<String>,
}

impl HttpSession {
    /// Create a session against `base_url` with default client settings
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let client = Client::builder().user_agent(DEFAULT_USER_AGENT).build()?;
        Ok(Self::with_client(client, parse_base_url(base_url)?))
    }

    /// Create a session from a loaded [`ClientConfig`]
    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        let mut builder = Client::builder().user_agent(
            config
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        );
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let session = Self::with_client(builder.build()?, parse_base_url(&config.base_url)?);
        Ok(match &config.access_token {
            Some(token) => session.with_access_token(token),
            None => session,
        })
    }

    /// Wrap an already configured reqwest client
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self {
            client,
            base_url,
            access_token: None,
        }
    }

    /// Send `Authorization: Bearer <token>` with every request
    pub fn with_access_token(mut self, token: &str) -> Self {
        self.access_token = Some(token.to_string());
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

fn parse_base_url(url: &str) -> Result<Url, TransportError> {
    Url::parse(url).map_err(|source| TransportError::InvalidBaseUrl {
        url: url.to_string(),
        source,
    })
}

#[async_trait]
impl Transport for HttpSession {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self
            .base_url
            .join(&request.path)
            .map_err(|source| TransportError::InvalidPath {
                path: request.path.clone(),
                source,
            })?;

        tracing::debug!("{} {}", request.method, url);

        let mut builder = self.client.request(request.method, url);
        if let Some(token) = &self.access_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        // Consumes the response; the connection is released on every path.
        let body = response.text().await?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_short_bodies() {
        assert_eq!(sanitize_for_log(r#"{"detail": "x"}"#), r#"{"detail": "x"}"#);
    }

    #[test]
    fn test_sanitize_truncates_long_bodies() {
        let body = "a".repeat(500);
        let sanitized = sanitize_for_log(&body);
        assert!(sanitized.starts_with(&"a".repeat(200)));
        assert!(sanitized.ends_with("[truncated, 500 bytes total]"));
    }

    #[test]
    fn test_sanitize_respects_char_boundaries() {
        let body = format!("{}é{}", "a".repeat(199), "b".repeat(100));
        let sanitized = sanitize_for_log(&body);
        assert!(sanitized.contains("[truncated,"));
    }

    #[test]
    fn test_sanitize_strips_control_characters() {
        assert_eq!(sanitize_for_log("line1\nline2\t!"), "line1line2!");
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let err = HttpSession::new("not a url").unwrap_err();
        assert!(matches!(err, TransportError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_from_config_applies_token() {
        let config = ClientConfig {
            base_url: "https://akab-test.luna.akamaiapis.net".to_string(),
            access_token: Some("secret".to_string()),
            user_agent: None,
            timeout_secs: Some(30),
        };
        let session = HttpSession::from_config(&config).unwrap();
        assert_eq!(session.base_url().host_str(), Some("akab-test.luna.akamaiapis.net"));
        assert_eq!(session.access_token.as_deref(), Some("secret"));
    }
}
