use std::fmt;

/// User unique identifier type.
///
/// The minimal authenticated principal: everything downstream of the
/// identity middleware sees only this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Stored user record.
///
/// The credential is persisted only as its digest; the plaintext never
/// crosses the store boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    pub password_hash: String,
}
