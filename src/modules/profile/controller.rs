use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use std::sync::Arc;

use super::schema::DayProgressResponse;
use crate::modules::auth::extractor::AuthUser;
use crate::modules::auth::schema::ErrorResponse;
use crate::modules::challenge::crud::CompletionCrud;
use crate::modules::replacement::crud::ReplacementCrud;
use crate::AppState;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn db_error(err: sqlx::Error) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(err.to_string())),
    )
}

// =============================================================================
// GET /profile/day - today's progress
// =============================================================================

pub async fn day_progress(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<Json<DayProgressResponse>, ApiError> {
    let today = Utc::now().date_naive();

    let completions = CompletionCrud::new(state.db.clone());
    let replacements = ReplacementCrud::new(state.db.clone());

    let challenges_today = completions
        .count_for_day(user.user_id, today)
        .await
        .map_err(db_error)?;
    let replacements_today = replacements
        .count_for_day(user.user_id, today)
        .await
        .map_err(db_error)?;

    Ok(Json(DayProgressResponse {
        challenges_today,
        replacements_today,
        day_passed: challenges_today >= 1,
    }))
}
