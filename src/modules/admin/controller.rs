use axum::{
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

use super::schema::ResetTodayResponse;
use crate::modules::activity::crud::{ActivityCrud, ActivityError};
use crate::modules::auth::schema::ErrorResponse;
use crate::modules::challenge::crud::{ChallengeCrud, ChallengeError};
use crate::modules::challenge::schema::{
    ChallengeCreateRequest, ChallengeResponse, ChallengeUpdateRequest,
};
use crate::AppState;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(err: ChallengeError) -> ApiError {
    (err.status_code(), Json(ErrorResponse::new(err.to_string())))
}

// =============================================================================
// ADMIN GUARD
// =============================================================================

/// Every admin request must carry the shared-secret header; there is no
/// debug or environment bypass path.
pub async fn require_admin_token(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get("x-admin-token")
        .and_then(|value| value.to_str().ok());

    if provided != Some(state.admin_token.as_str()) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("Unauthorized")),
        )
            .into_response();
    }

    next.run(request).await
}

// =============================================================================
// POST /admin/challenges
// =============================================================================

pub async fn create_challenge(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChallengeCreateRequest>,
) -> Result<(StatusCode, Json<ChallengeResponse>), ApiError> {
    if let Err(e) = req.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(e.to_string())),
        ));
    }

    let crud = ChallengeCrud::new(state.db.clone());
    let challenge = crud.create(&req).await.map_err(api_error)?;

    Ok((StatusCode::CREATED, Json(challenge.into())))
}

// =============================================================================
// PUT /admin/challenges/{id} - the explicit admin edit path
// =============================================================================

pub async fn update_challenge(
    State(state): State<Arc<AppState>>,
    Path(challenge_id): Path<i64>,
    Json(req): Json<ChallengeUpdateRequest>,
) -> Result<Json<ChallengeResponse>, ApiError> {
    if let Err(e) = req.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(e.to_string())),
        ));
    }

    let crud = ChallengeCrud::new(state.db.clone());
    let challenge = crud.update(challenge_id, &req).await.map_err(api_error)?;

    Ok(Json(challenge.into()))
}

// =============================================================================
// POST /admin/reset-today - testing aid
// =============================================================================

pub async fn reset_today(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ResetTodayResponse>, ApiError> {
    let crud = ActivityCrud::new(state.db.clone());
    let deleted = crud
        .delete_for_day(Utc::now().date_naive())
        .await
        .map_err(|e| {
            let err = ActivityError::Database(e);
            (err.status_code(), Json(ErrorResponse::new(err.to_string())))
        })?;

    Ok(Json(ResetTodayResponse {
        message: "Today's progress has been reset successfully!",
        deleted_activities: deleted,
    }))
}
