use auth::TokenError;
use thiserror::Error;

/// Error for user-record store operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("username already exists: {0}")]
    Duplicate(String),

    #[error("database error: {0}")]
    Database(String),
}

/// Top-level error for authentication operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("username already taken: {0}")]
    DuplicateUser(String),

    /// Unknown username and wrong password collapse into this one
    /// variant so the error cannot be used for username enumeration.
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("database error: {0}")]
    Database(String),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(username) => AuthError::DuplicateUser(username),
            StoreError::Database(msg) => AuthError::Database(msg),
        }
    }
}
