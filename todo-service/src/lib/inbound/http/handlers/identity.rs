use axum::Extension;
use axum::Json;
use serde::Serialize;

use crate::inbound::http::middleware::AuthenticatedUser;

/// Return the identity bound by the middleware.
///
/// The `Extension` extractor fails with a 500 when the middleware did
/// not run first; that is a routing bug, not a request failure.
pub async fn get_identity(
    Extension(user): Extension<AuthenticatedUser>,
) -> Json<IdentityResponseData> {
    Json(IdentityResponseData {
        user_id: user.user_id.0,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityResponseData {
    pub user_id: i64,
}
