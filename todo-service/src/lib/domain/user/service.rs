use std::sync::Arc;

use auth::CredentialHasher;
use auth::TokenCodec;
use chrono::Utc;

use crate::domain::user::errors::AuthError;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserStore;

/// Authentication service orchestrating registration and login.
///
/// Hashes credentials via the injected [`CredentialHasher`], persists
/// and looks up records through the [`UserStore`] port, and issues
/// session tokens through the [`TokenCodec`].
pub struct AuthService<S, H>
where
    S: UserStore,
    H: CredentialHasher,
{
    store: Arc<S>,
    hasher: H,
    token_codec: Arc<TokenCodec>,
}

impl<S, H> AuthService<S, H>
where
    S: UserStore,
    H: CredentialHasher,
{
    /// Create a new authentication service with injected dependencies.
    pub fn new(store: Arc<S>, hasher: H, token_codec: Arc<TokenCodec>) -> Self {
        Self {
            store,
            hasher,
            token_codec,
        }
    }

    /// Register a new user and return its identity.
    ///
    /// The plaintext is hashed before it reaches the store; only the
    /// digest is persisted.
    ///
    /// # Errors
    /// * `DuplicateUser` - Username is already taken
    /// * `Database` - Store operation failed
    pub async fn register(&self, username: &str, password: &str) -> Result<UserId, AuthError> {
        let digest = self.hasher.hash(password);
        let id = self.store.insert_user(username, &digest).await?;

        tracing::info!(user_id = %id, "User registered");

        Ok(id)
    }

    /// Verify credentials and issue a session token.
    ///
    /// A single combined (username, digest) lookup keeps unknown-user
    /// and wrong-password failures identical; callers must not split
    /// this into two queries.
    ///
    /// # Errors
    /// * `InvalidCredentials` - No record matches the pair
    /// * `Token` - Token issuance failed
    /// * `Database` - Store operation failed
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let digest = self.hasher.hash(password);
        let record = self
            .store
            .find_user(username, &digest)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let token = self.token_codec.issue(record.id.0, Utc::now())?;

        tracing::debug!(user_id = %record.id, "Session token issued");

        Ok(token)
    }
}
