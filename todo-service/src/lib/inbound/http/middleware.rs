use std::sync::Arc;

use auth::TokenCodec;
use axum::extract::Request;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde_json::json;

use crate::domain::user::models::UserId;

/// Expected scheme keyword of the `Authorization` header.
const AUTH_SCHEME: &str = "Bearer";

/// Extension type carrying the authenticated identity through one
/// request's processing chain. Never cached across requests.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Rejection response for requests that fail authorization.
///
/// Serializes as a 401 with the exact `{"message": "<reason>"}` body
/// the header contract specifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRejection(String);

impl AuthRejection {
    fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, Json(json!({ "message": self.0 }))).into_response()
    }
}

/// Authorize one request from its headers.
///
/// Pure function: walks the header states (absent, malformed, empty
/// token, verification) and either yields the identity or the rejection
/// to short-circuit with. Exactly one of the two per request.
pub fn authorize(
    headers: &HeaderMap,
    codec: &TokenCodec,
    now: DateTime<Utc>,
) -> Result<UserId, AuthRejection> {
    let header = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if header.is_empty() {
        return Err(AuthRejection::new("empty auth header"));
    }

    let parts: Vec<&str> = header.split(' ').collect();
    if parts.len() != 2 || parts[0] != AUTH_SCHEME {
        return Err(AuthRejection::new("invalid auth header"));
    }

    let token = parts[1].trim();
    if token.is_empty() {
        return Err(AuthRejection::new("token is empty"));
    }

    codec.verify(token, now).map(UserId).map_err(|e| {
        tracing::warn!(reason = %e, "Token verification failed");
        AuthRejection::new(e.to_string())
    })
}

/// Middleware binding the verified identity into request extensions.
///
/// Downstream handlers read [`AuthenticatedUser`] via `Extension`; its
/// absence there is a middleware-ordering bug, not a runtime failure
/// path.
pub async fn authenticate(
    State(codec): State<Arc<TokenCodec>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthRejection> {
    let user_id = authorize(req.headers(), &codec, Utc::now())?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}
