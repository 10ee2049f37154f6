use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

use super::crud::{AuthCrud, AuthError};
use super::extractor::AuthUser;
use super::schema::{
    ErrorResponse, MeResponse, MeUser, OauthLoginRequest, OauthLoginResponse, OauthTokensResponse,
    OauthUserResponse, RefreshRequest, RequestCodeRequest, TokenResponse, VerifyRequest,
};
use crate::services::identity::Provider;
use crate::AppState;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(err: AuthError) -> ApiError {
    (err.status_code(), Json(ErrorResponse::new(err.to_string())))
}

fn validation_error(err: validator::ValidationErrors) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(err.to_string())),
    )
}

// =============================================================================
// POST /auth/request-code
// =============================================================================

pub async fn request_code(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RequestCodeRequest>,
) -> Result<StatusCode, ApiError> {
    req.validate().map_err(validation_error)?;

    let crud = AuthCrud::new(state.db.clone());
    crud.request_code(&req.email, state.auth_code_ttl_minutes)
        .await
        .map_err(api_error)?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// POST /auth/verify
// =============================================================================

pub async fn verify(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VerifyRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    req.validate().map_err(validation_error)?;

    let crud = AuthCrud::new(state.db.clone());
    let user = crud
        .verify_code(&req.email, &req.code)
        .await
        .map_err(api_error)?;

    let access_token = state.tokens.issue_access(user.id).map_err(token_error)?;
    let refresh_token = state.tokens.issue_refresh(user.id).map_err(token_error)?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "Bearer",
        refresh_token: Some(refresh_token),
    }))
}

fn token_error(err: crate::services::jwt::TokenError) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(err.to_string())),
    )
}

// =============================================================================
// POST /auth/refresh
// =============================================================================

pub async fn refresh(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let claims = state
        .tokens
        .verify_refresh(&req.refresh_token)
        .map_err(|_| api_error(AuthError::InvalidToken))?;

    let user_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| api_error(AuthError::InvalidToken))?;

    let access_token = state.tokens.issue_access(user_id).map_err(token_error)?;

    // The refresh token is not rotated.
    Ok(Json(TokenResponse {
        access_token,
        token_type: "Bearer",
        refresh_token: None,
    }))
}

// =============================================================================
// POST /auth/logout
// =============================================================================

pub async fn logout(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<StatusCode, ApiError> {
    let remaining = user.expires_at - Utc::now().timestamp();

    state
        .revocation
        .revoke(user.issued_at, remaining)
        .await
        .map_err(|e| api_error(AuthError::RevocationUnavailable(e.to_string())))?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// GET /auth/me
// =============================================================================

pub async fn me(user: AuthUser) -> Json<MeResponse> {
    Json(MeResponse {
        user: MeUser { id: user.user_id },
    })
}

// =============================================================================
// POST /auth/login (Google/Apple identity token exchange)
// =============================================================================

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<OauthLoginRequest>,
) -> Result<Json<OauthLoginResponse>, ApiError> {
    let provider = Provider::parse(&req.provider)
        .ok_or_else(|| api_error(AuthError::UnsupportedProvider))?;

    let identity = state
        .identity
        .verify(provider, &req.id_token)
        .await
        .map_err(|e| api_error(e.into()))?;

    let crud = AuthCrud::new(state.db.clone());
    let user = crud
        .users()
        .get_or_create_by_email(&identity.email)
        .await
        .map_err(|e| api_error(e.into()))?;

    let access_token = state.tokens.issue_access(user.id).map_err(token_error)?;
    let refresh_token = state.tokens.issue_refresh(user.id).map_err(token_error)?;

    Ok(Json(OauthLoginResponse {
        user: OauthUserResponse {
            id: user.id,
            email: user.email,
            provider: provider.as_str(),
        },
        tokens: OauthTokensResponse {
            access_token,
            refresh_token,
            token_type: "Bearer",
            expires_in: state.tokens.access_ttl_secs(),
        },
    }))
}
