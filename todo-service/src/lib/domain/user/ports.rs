use async_trait::async_trait;

use crate::domain::user::errors::StoreError;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserRecord;

/// Persistence port for user records.
///
/// The single capability the authentication service needs from
/// storage: insert a (username, digest) pair and look one up. The
/// combined lookup is deliberate — see
/// [`AuthService::login`](crate::domain::user::service::AuthService::login).
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Persist a new user record.
    ///
    /// # Errors
    /// * `Duplicate` - Username is already taken
    /// * `Database` - Storage operation failed
    async fn insert_user(&self, username: &str, digest: &str) -> Result<UserId, StoreError>;

    /// Look up a user by username and credential digest.
    ///
    /// Returns `None` when no record matches the pair, without
    /// distinguishing which half failed to match.
    ///
    /// # Errors
    /// * `Database` - Storage operation failed
    async fn find_user(
        &self,
        username: &str,
        digest: &str,
    ) -> Result<Option<UserRecord>, StoreError>;
}
