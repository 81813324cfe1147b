// ==========================================
// Luggage Fulfillment Tracking - Client Error Types
// ==========================================
// Transport failure is a distinct typed error so callers can tell
// "fetch failed" apart from "query succeeded, zero matches".
// ==========================================

use thiserror::Error;

/// Client-layer error type
#[derive(Error, Debug)]
pub enum ClientError {
    // ===== Transport errors =====
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("spreadsheet endpoint returned HTTP {status}")]
    EndpointStatus { status: u16 },

    // ===== Payload errors =====
    #[error("response body is not valid JSON: {0}")]
    Decode(String),

    #[error("provider reported an error: {0}")]
    Provider(String),

    // ===== Generic =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ClientError {
    /// True for failures of the transport itself (network, non-OK status),
    /// as opposed to a payload the provider did return.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ClientError::Transport(_) | ClientError::EndpointStatus { .. }
        )
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

/// Result alias
pub type ClientResult<T> = Result<T, ClientError>;
