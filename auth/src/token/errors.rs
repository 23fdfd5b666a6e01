use thiserror::Error;

/// Error type for token operations.
///
/// Display strings double as the client-facing rejection reasons, so
/// they stay short and stable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("failed to encode token: {0}")]
    Encoding(String),

    #[error("invalid token")]
    Malformed,

    #[error("invalid token signature")]
    InvalidSignature,

    #[error("token is expired")]
    Expired,
}
