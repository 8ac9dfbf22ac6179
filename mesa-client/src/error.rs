//! Client error types

use shared::{AppError, AssignmentError};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required (refresh already retried once)
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Domain conflict reported by the assignment endpoints
    #[error("{0}")]
    Conflict(#[from] AssignmentError),

    /// Structured application error
    #[error("{0}")]
    App(#[from] AppError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// The user-facing message for this error, when one exists
    ///
    /// Conflicts carry fixed copy; everything else falls back to the
    /// generic retry line the way the floor screens do.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Conflict(conflict) => conflict.user_message(),
            ClientError::Validation(msg) => msg.clone(),
            _ => "An error occurred. Please try again.".to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_surfaces_fixed_copy() {
        let err = ClientError::Conflict(AssignmentError::InsufficientCapacity);
        assert_eq!(
            err.user_message(),
            "The table does not have enough capacity for the reservation."
        );
    }

    #[test]
    fn transport_errors_fall_back_to_generic_copy() {
        let err = ClientError::Internal("boom".into());
        assert_eq!(err.user_message(), "An error occurred. Please try again.");
    }
}
