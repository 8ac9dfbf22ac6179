//! Session tokens
//!
//! The backend authenticates with bearer tokens minted by an external
//! identity provider. Rather than reading ambient global auth state,
//! the token source is injected: [`HttpClient`](crate::HttpClient)
//! asks the provider for the current token on every request and asks
//! it to refresh exactly once when the backend answers 401.

use crate::error::ClientResult;
use async_trait::async_trait;
use std::fmt;
use std::sync::Mutex;

/// Source of bearer tokens for the HTTP client
#[async_trait]
pub trait TokenProvider: Send + Sync + fmt::Debug {
    /// The current token, if the session has one
    async fn token(&self) -> Option<String>;

    /// Force-refresh the token after a 401
    ///
    /// Returns the new token, or `None` when the provider cannot mint
    /// one (anonymous sessions).
    async fn refresh(&self) -> ClientResult<Option<String>>;
}

/// A fixed token (or none at all) that never refreshes
///
/// Suits service credentials and the customer-facing endpoints, which
/// accept anonymous calls.
#[derive(Debug)]
pub struct StaticToken {
    token: Mutex<Option<String>>,
}

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    pub fn anonymous() -> Self {
        Self {
            token: Mutex::new(None),
        }
    }

    /// Replace the stored token (e.g. after an external re-login)
    pub fn set(&self, token: Option<String>) {
        *self.token.lock().expect("token lock poisoned") = token;
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn token(&self) -> Option<String> {
        self.token.lock().expect("token lock poisoned").clone()
    }

    async fn refresh(&self) -> ClientResult<Option<String>> {
        // A static token has nowhere to refresh from.
        Ok(None)
    }
}
