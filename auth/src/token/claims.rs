use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Session token payload.
///
/// Carries the authenticated identity plus its validity window as Unix
/// timestamps. The token is a pure function of these fields and the
/// signing key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Authenticated user identifier
    pub user_id: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims for a session starting at `now` and lasting `window`.
    pub fn new(user_id: i64, now: DateTime<Utc>, window: Duration) -> Self {
        Self {
            user_id,
            iat: now.timestamp(),
            exp: (now + window).timestamp(),
        }
    }

    /// A token is valid strictly before its expiry.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}
