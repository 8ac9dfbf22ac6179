//! Client configuration

/// Client configuration for connecting to the floor backend
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | MESA_BASE_URL | http://127.0.0.1:8000 | Backend base URL |
/// | MESA_TIMEOUT_SECS | 30 | Request timeout in seconds |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://127.0.0.1:8000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Initial bearer token, if the session already has one
    pub token: Option<String>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            token: None,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("MESA_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".into());
        let timeout = std::env::var("MESA_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        Self {
            base_url,
            timeout,
            token: None,
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://127.0.0.1:8000")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chain() {
        let config = ClientConfig::new("http://backend:8000")
            .with_token("tok")
            .with_timeout(5);
        assert_eq!(config.base_url, "http://backend:8000");
        assert_eq!(config.timeout, 5);
        assert_eq!(config.token.as_deref(), Some("tok"));
    }
}
