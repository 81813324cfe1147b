// ==========================================
// Luggage Fulfillment Tracking - API Error Types
// ==========================================
// Caller-facing taxonomy. Validation fails before any network call;
// transport failure stays a distinct type so "fetch failed" is never
// conflated with "query succeeded, zero matches" (an empty entity sequence
// is a valid Ok outcome everywhere in this crate).
// ==========================================

use crate::client::ClientError;
use thiserror::Error;

/// API-layer error type
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== Validation (raised synchronously, no network call made) =====
    #[error("invalid input: {0}")]
    InvalidInput(String),

    // ===== Transport / provider =====
    #[error("spreadsheet fetch failed: {0}")]
    Transport(#[from] ClientError),

    // ===== Generic =====
    #[error("internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// True when the failure happened in the transport, as opposed to input
    /// validation. Views use this to pick between "check your input" and
    /// "connection problem" messaging.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

/// Result alias
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_converts_to_transport() {
        let err: ApiError = ClientError::EndpointStatus { status: 503 }.into();
        assert!(err.is_transport());
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_validation_is_not_transport() {
        assert!(!ApiError::InvalidInput("empty brand".to_string()).is_transport());
    }
}
