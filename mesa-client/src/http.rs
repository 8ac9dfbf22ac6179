//! HTTP client for the floor backend
//!
//! Thin wrapper over `reqwest` in the shape every endpoint shares: a
//! bearer header from the injected [`TokenProvider`], a JSON body in,
//! a JSON envelope out, and exactly one forced-token-refresh retry on
//! 401. There is no other retry policy anywhere in the client.

use crate::session::{StaticToken, TokenProvider};
use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::response::ConflictBody;
use std::sync::Arc;

/// HTTP client for making network requests to the floor backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    ///
    /// The config's token (if any) becomes a [`StaticToken`]; use
    /// [`with_token_provider`](Self::with_token_provider) to plug in a
    /// refreshing session instead.
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        let tokens: Arc<dyn TokenProvider> = match &config.token {
            Some(token) => Arc::new(StaticToken::new(token.clone())),
            None => Arc::new(StaticToken::anonymous()),
        };

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        }
    }

    /// Replace the token provider
    pub fn with_token_provider(mut self, tokens: Arc<dyn TokenProvider>) -> Self {
        self.tokens = tokens;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send_once(
        &self,
        method: &Method,
        url: &str,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> ClientResult<reqwest::Response> {
        let mut request = self.client.request(method.clone(), url);
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(token) = token {
            request = request.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token));
        }
        Ok(request.send().await?)
    }

    /// Send a request, replaying it once with a refreshed token on 401
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> ClientResult<reqwest::Response> {
        let url = self.url(path);
        let token = self.tokens.token().await;

        let response = self
            .send_once(&method, &url, body.as_ref(), token.as_deref())
            .await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        let Some(fresh) = self.tokens.refresh().await? else {
            return Err(ClientError::Unauthorized);
        };
        tracing::debug!(%url, "retrying request with refreshed token");
        self.send_once(&method, &url, body.as_ref(), Some(&fresh))
            .await
    }

    /// Make a request and decode the JSON response
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> ClientResult<T> {
        let response = self.send(method, path, body).await?;
        Self::handle_response(response).await
    }

    /// Make a request and discard the response body
    pub async fn request_unit(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> ClientResult<()> {
        let response = self.send(method, path, body).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(Self::error_for(status, response.text().await?))
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::error_for(status, text));
        }

        response.json().await.map_err(Into::into)
    }

    /// Map an error status and body to a [`ClientError`]
    ///
    /// Conflict-shaped bodies are parsed into the assignment taxonomy
    /// regardless of whether the backend used 400 or 409 for them.
    fn error_for(status: StatusCode, text: String) -> ClientError {
        if matches!(status, StatusCode::BAD_REQUEST | StatusCode::CONFLICT) {
            if let Ok(body) = serde_json::from_str::<ConflictBody>(&text) {
                if body.error.is_some() || body.detail.is_some() {
                    return ClientError::Conflict(body.into_assignment_error());
                }
            }
        }

        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(text),
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST => ClientError::Validation(text),
            _ => ClientError::Internal(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::AssignmentError;

    #[test]
    fn url_joins_without_double_slash() {
        let client = HttpClient::new(&ClientConfig::new("http://backend:8000/"));
        assert_eq!(client.url("/tables"), "http://backend:8000/tables");
        assert_eq!(client.url("tables"), "http://backend:8000/tables");
    }

    #[test]
    fn conflict_body_beats_generic_validation_mapping() {
        let err = HttpClient::error_for(
            StatusCode::BAD_REQUEST,
            r#"{"error": "Table is busy"}"#.to_string(),
        );
        assert!(matches!(
            err,
            ClientError::Conflict(AssignmentError::TableBusy)
        ));
    }

    #[test]
    fn plain_bad_request_maps_to_validation() {
        let err = HttpClient::error_for(StatusCode::BAD_REQUEST, "nope".to_string());
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[test]
    fn not_found_keeps_body_text() {
        let err = HttpClient::error_for(StatusCode::NOT_FOUND, "no such order".to_string());
        match err {
            ClientError::NotFound(text) => assert_eq!(text, "no such order"),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
