use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use super::crud::{ChallengeCrud, ChallengeError, CompletionCrud};
use super::schema::{
    ChallengeListQuery, ChallengeResponse, CompletionResponse, PeriodQuery, RandomChallengeQuery,
};
use crate::modules::auth::extractor::AuthUser;
use crate::modules::auth::schema::ErrorResponse;
use crate::services::quota::ActionKind;
use crate::AppState;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(err: ChallengeError) -> ApiError {
    (err.status_code(), Json(ErrorResponse::new(err.to_string())))
}

fn db_error(err: sqlx::Error) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(err.to_string())),
    )
}

// =============================================================================
// GET /challenges/ - public listing with filters
// =============================================================================

pub async fn list_challenges(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChallengeListQuery>,
) -> Result<Json<Vec<ChallengeResponse>>, ApiError> {
    let crud = ChallengeCrud::new(state.db.clone());
    let challenges = crud.list(&query).await.map_err(api_error)?;

    Ok(Json(challenges.into_iter().map(Into::into).collect()))
}

// =============================================================================
// GET /challenges/random - random picks for daily use
// =============================================================================

pub async fn random_challenges(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RandomChallengeQuery>,
) -> Result<Json<Vec<ChallengeResponse>>, ApiError> {
    let crud = ChallengeCrud::new(state.db.clone());
    let challenges = crud.get_random(&query).await.map_err(api_error)?;

    Ok(Json(challenges.into_iter().map(Into::into).collect()))
}

// =============================================================================
// GET /challenges/{id}
// =============================================================================

pub async fn get_challenge(
    State(state): State<Arc<AppState>>,
    Path(challenge_id): Path<i64>,
) -> Result<Json<ChallengeResponse>, ApiError> {
    let crud = ChallengeCrud::new(state.db.clone());
    let challenge = crud
        .get_by_id(challenge_id)
        .await
        .map_err(api_error)?
        .ok_or_else(|| api_error(ChallengeError::NotFound))?;

    Ok(Json(challenge.into()))
}

// =============================================================================
// POST /challenges/{id}/complete - quota-gated
// =============================================================================

pub async fn complete_challenge(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(challenge_id): Path<i64>,
) -> Result<(StatusCode, Json<CompletionResponse>), ApiError> {
    let crud = CompletionCrud::new(state.db.clone());
    let completion = crud
        .complete_with_limit(
            user.user_id,
            challenge_id,
            Utc::now().date_naive(),
            state.quota.limit_for(ActionKind::Completion),
        )
        .await
        .map_err(api_error)?;

    Ok((StatusCode::CREATED, Json(completion.into())))
}

// =============================================================================
// GET /challenges/completions?date_from&date_to
// =============================================================================

pub async fn list_completions(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<Vec<CompletionResponse>>, ApiError> {
    let crud = CompletionCrud::new(state.db.clone());
    let completions = crud
        .list_for_period(user.user_id, query.date_from, query.date_to)
        .await
        .map_err(db_error)?;

    Ok(Json(completions.into_iter().map(Into::into).collect()))
}
