use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, StatusCode},
    Json,
};
use std::sync::Arc;

use super::schema::ErrorResponse;
use crate::AppState;

/// Bearer-token extractor for protected endpoints. Validates the access
/// token's signature and expiry, then the revocation store; any failure maps
/// to 401.
pub struct AuthUser {
    pub user_id: i64,
    pub issued_at: i64,
    pub expires_at: i64,
}

fn unauthorized() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse::new("Unauthorized")),
    )
}

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let authorization = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(unauthorized)?;

        let token = authorization
            .strip_prefix("Bearer ")
            .ok_or_else(unauthorized)?;

        let claims = state
            .tokens
            .verify_access(token)
            .map_err(|_| unauthorized())?;

        if state.revocation.is_revoked(claims.iat).await {
            return Err(unauthorized());
        }

        let user_id = claims.sub.parse::<i64>().map_err(|_| unauthorized())?;

        Ok(AuthUser {
            user_id,
            issued_at: claims.iat,
            expires_at: claims.exp,
        })
    }
}
