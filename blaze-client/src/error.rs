//! Error types for the gateway connector.

use tokio_tungstenite::tungstenite;
use tokio_tungstenite::tungstenite::http::header::InvalidHeaderValue;

/// The identity could not be proven to the gateway.
///
/// Not retryable without fixing the configured key material.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("Invalid private key: {0}")]
    InvalidKey(String),

    #[error("Token signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error("Token is not a valid header value: {0}")]
    InvalidToken(#[from] InvalidHeaderValue),
}

/// The network handshake could not be completed.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error(transparent)]
    Handshake(#[from] tungstenite::Error),
}

/// Failure of a gateway connection attempt.
///
/// Wraps exactly one upstream failure domain. `Display` is the upstream
/// message with no added context.
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ConnectError {
    /// Whether a caller may reasonably retry after backing off.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ConnectError::Transport(_))
    }

    /// Short name of the failure domain, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ConnectError::Credential(_) => "credential",
            ConnectError::Transport(_) => "transport",
        }
    }
}

pub type Result<T> = std::result::Result<T, ConnectError>;
