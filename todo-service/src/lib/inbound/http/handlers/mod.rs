use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::user::errors::AuthError;

pub mod identity;
pub mod sign_in;
pub mod sign_up;

/// Error body shared by handler failures and middleware rejections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    Conflict(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiErrorBody { message })).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::DuplicateUser(_) => ApiError::Conflict(err.to_string()),
            AuthError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            AuthError::Token(_) | AuthError::Database(_) => {
                // Detail stays server-side for security-relevant failures
                tracing::error!(error = %err, "Authentication infrastructure failure");
                ApiError::InternalServerError("internal server error".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use auth::TokenError;

    use super::*;

    async fn into_parts(response: Response) -> (StatusCode, String) {
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_duplicate_user_maps_to_conflict() {
        let err = ApiError::from(AuthError::DuplicateUser("alice".to_string()));
        assert_eq!(
            err,
            ApiError::Conflict("username already taken: alice".to_string())
        );

        let (status, body) = into_parts(err.into_response()).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, r#"{"message":"username already taken: alice"}"#);
    }

    #[tokio::test]
    async fn test_invalid_credentials_maps_to_unauthorized() {
        let err = ApiError::from(AuthError::InvalidCredentials);

        let (status, body) = into_parts(err.into_response()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, r#"{"message":"invalid username or password"}"#);
    }

    #[tokio::test]
    async fn test_infrastructure_failures_stay_opaque() {
        let token_err = ApiError::from(AuthError::Token(TokenError::Encoding("boom".to_string())));
        let database_err = ApiError::from(AuthError::Database("connection reset".to_string()));

        for err in [token_err, database_err] {
            let (status, body) = into_parts(err.into_response()).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, r#"{"message":"internal server error"}"#);
        }
    }
}
