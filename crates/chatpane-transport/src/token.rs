//! Connection token fetch.
//!
//! The token endpoint is a plain HTTP collaborator: GET the configured URL,
//! expect a 2xx JSON body `{"token": "<opaque string>"}`.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::TransportError;

/// Source of connection tokens. Behind a trait so hosts and tests can
/// substitute the HTTP implementation.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn fetch_token(&self, url: &str) -> Result<String, TransportError>;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

/// HTTP token client with a per-request timeout.
pub struct HttpTokenClient {
    http: reqwest::Client,
}

impl HttpTokenClient {
    pub fn new(request_timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .unwrap_or_default();
        Self { http }
    }
}

impl Default for HttpTokenClient {
    fn default() -> Self {
        Self::new(Duration::from_secs(10))
    }
}

#[async_trait]
impl TokenSource for HttpTokenClient {
    async fn fetch_token(&self, url: &str) -> Result<String, TransportError> {
        let response = self.http.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else {
                TransportError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::ApiError(format!(
                "token endpoint returned {status}"
            )));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| TransportError::ParseError(e.to_string()))?;

        debug!(url = %url, token_len = body.token.len(), "fetched connection token");
        Ok(body.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_parses() {
        let body: TokenResponse = serde_json::from_str(r#"{"token":"abc123"}"#).unwrap();
        assert_eq!(body.token, "abc123");
    }

    #[test]
    fn token_response_ignores_extra_fields() {
        let body: TokenResponse =
            serde_json::from_str(r#"{"token":"abc123","expires_in":1800}"#).unwrap();
        assert_eq!(body.token, "abc123");
    }

    #[test]
    fn token_response_requires_token_field() {
        let result: Result<TokenResponse, _> = serde_json::from_str(r#"{"expires_in":1800}"#);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_network_error() {
        let client = HttpTokenClient::new(Duration::from_secs(1));
        // Port 9 (discard) on localhost is not listening
        let result = client.fetch_token("http://127.0.0.1:9/token").await;
        assert!(matches!(
            result,
            Err(TransportError::NetworkError(_)) | Err(TransportError::Timeout)
        ));
    }

    #[test]
    fn http_client_is_constructible_with_timeout() {
        let _client = HttpTokenClient::new(Duration::from_secs(5));
        let _default = HttpTokenClient::default();
    }
}
