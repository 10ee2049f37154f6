use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

use super::crud::{ReplacementCrud, ReplacementError};
use super::schema::{PeriodQuery, ReplacementCreateRequest, ReplacementResponse};
use crate::modules::auth::extractor::AuthUser;
use crate::modules::auth::schema::ErrorResponse;
use crate::services::quota::ActionKind;
use crate::AppState;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(err: ReplacementError) -> ApiError {
    (err.status_code(), Json(ErrorResponse::new(err.to_string())))
}

// =============================================================================
// POST /replacements/ - quota-gated
// =============================================================================

pub async fn create_replacement(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(req): Json<ReplacementCreateRequest>,
) -> Result<(StatusCode, Json<ReplacementResponse>), ApiError> {
    if let Err(e) = req.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(e.to_string())),
        ));
    }

    let crud = ReplacementCrud::new(state.db.clone());
    let replacement = crud
        .create_with_limit(
            user.user_id,
            &req.from_item,
            &req.to_item,
            Utc::now().date_naive(),
            state.quota.limit_for(ActionKind::Replacement),
        )
        .await
        .map_err(api_error)?;

    Ok((StatusCode::CREATED, Json(replacement.into())))
}

// =============================================================================
// GET /replacements/?date_from&date_to
// =============================================================================

pub async fn list_replacements(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<Vec<ReplacementResponse>>, ApiError> {
    let crud = ReplacementCrud::new(state.db.clone());
    let replacements = crud
        .list_for_period(user.user_id, query.date_from, query.date_to)
        .await
        .map_err(|e| api_error(ReplacementError::Database(e)))?;

    Ok(Json(replacements.into_iter().map(Into::into).collect()))
}
