use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::user::errors::StoreError;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserRecord;
use crate::domain::user::ports::UserStore;

pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn insert_user(&self, username: &str, digest: &str) -> Result<UserId, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(username)
        .bind(digest)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return StoreError::Duplicate(username.to_string());
                }
            }
            StoreError::Database(e.to_string())
        })?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(UserId(id))
    }

    async fn find_user(
        &self,
        username: &str,
        digest: &str,
    ) -> Result<Option<UserRecord>, StoreError> {
        // Combined predicate: one query for (username, digest) so the
        // caller cannot tell which half missed
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash
            FROM users
            WHERE username = $1 AND password_hash = $2
            "#,
        )
        .bind(username)
        .bind(digest)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(UserRecord {
                id: UserId(
                    r.try_get("id")
                        .map_err(|e| StoreError::Database(e.to_string()))?,
                ),
                username: r
                    .try_get("username")
                    .map_err(|e| StoreError::Database(e.to_string()))?,
                password_hash: r
                    .try_get("password_hash")
                    .map_err(|e| StoreError::Database(e.to_string()))?,
            })),
            None => Ok(None),
        }
    }
}
