use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::inbound::http::router::AppState;

pub async fn sign_up(
    State(state): State<AppState>,
    Json(body): Json<SignUpRequestBody>,
) -> Result<(StatusCode, Json<SignUpResponseData>), ApiError> {
    body.validate()?;

    state
        .auth_service
        .register(&body.username, &body.password)
        .await
        .map_err(ApiError::from)
        .map(|id| (StatusCode::CREATED, Json(SignUpResponseData { id: id.0 })))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignUpRequestBody {
    username: String,
    password: String,
}

impl SignUpRequestBody {
    fn validate(&self) -> Result<(), ApiError> {
        if self.username.trim().is_empty() {
            return Err(ApiError::UnprocessableEntity(
                "username must not be empty".to_string(),
            ));
        }
        if self.password.is_empty() {
            return Err(ApiError::UnprocessableEntity(
                "password must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Bare creation body: `{"id": <int>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignUpResponseData {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use axum::response::IntoResponse;

    use super::*;

    #[tokio::test]
    async fn test_created_response_is_bare_id() {
        let response = (StatusCode::CREATED, Json(SignUpResponseData { id: 1 })).into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"id":1}"#);
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let blank_username = SignUpRequestBody {
            username: "  ".to_string(),
            password: "pw1".to_string(),
        };
        let blank_password = SignUpRequestBody {
            username: "alice".to_string(),
            password: String::new(),
        };

        assert!(matches!(
            blank_username.validate(),
            Err(ApiError::UnprocessableEntity(_))
        ));
        assert!(matches!(
            blank_password.validate(),
            Err(ApiError::UnprocessableEntity(_))
        ));
    }
}
