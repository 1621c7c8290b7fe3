//! Error handling for the Book My Seat client
//!
//! Validation problems stay on the device; network problems are retryable;
//! a rejection carries the server's reason verbatim so the UI can show it
//! unchanged.

use shared::validation::ValidationError;
use thiserror::Error;

/// Client error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Caller-correctable input problems. Never sent over the network.
    #[error("validation failed: {0:?}")]
    Validation(Vec<ValidationError>),

    /// Transport-level failure (timeout, refused connection, 5xx). The
    /// request may be retried; local draft state is untouched.
    #[error("network error: {0}")]
    Network(String),

    /// The backend refused a semantically valid request. The reason is the
    /// server's message verbatim and must reach the user unchanged.
    #[error("booking rejected: {0}")]
    Rejected(String),

    /// A submit for this draft is already in flight
    #[error("a submission is already in flight")]
    SubmitInFlight,

    /// The OS notification service failed. Non-blocking for the booking
    /// flow; the reservation stays valid without a reminder.
    #[error("notification service error: {0}")]
    Notification(String),

    #[error("configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Whether the caller may offer a retry for this error
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Network(_))
    }

    /// The field-level problems, when this is a validation failure
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        match self {
            AppError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Result type alias for the client core
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_network_errors_are_retryable() {
        assert!(AppError::Network("timed out".into()).is_retryable());
        assert!(!AppError::Rejected("no tables left".into()).is_retryable());
        assert!(!AppError::Validation(vec![]).is_retryable());
        assert!(!AppError::SubmitInFlight.is_retryable());
    }

    #[test]
    fn test_rejection_reason_is_preserved_verbatim() {
        let err = AppError::Rejected("No availability for party of 8 at 19:00".into());
        match err {
            AppError::Rejected(reason) => {
                assert_eq!(reason, "No availability for party of 8 at 19:00")
            }
            _ => panic!("expected rejection"),
        }
    }
}
