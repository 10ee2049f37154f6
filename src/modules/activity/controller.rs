use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use super::crud::{ActivityCrud, ActivityError, FavoriteCrud};
use super::schema::{
    FavoriteRequest, FavoritesResponse, MessageResponse, SelectRequest, SelectedResponse,
    SwipeRequest, SwipesTodayResponse, ViewRequest, ViewedResponse,
};
use crate::modules::auth::extractor::AuthUser;
use crate::modules::auth::schema::ErrorResponse;
use crate::AppState;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(err: ActivityError) -> ApiError {
    (err.status_code(), Json(ErrorResponse::new(err.to_string())))
}

fn db_error(err: sqlx::Error) -> ApiError {
    api_error(ActivityError::Database(err))
}

// =============================================================================
// TRACKING
// =============================================================================

pub async fn track_swipe(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(req): Json<SwipeRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let crud = ActivityCrud::new(state.db.clone());
    crud.track_swipe(user.user_id, req.challenge_id, &req.direction)
        .await
        .map_err(api_error)?;

    Ok(Json(MessageResponse {
        message: "Swipe tracked successfully",
    }))
}

pub async fn track_view(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(req): Json<ViewRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let crud = ActivityCrud::new(state.db.clone());
    crud.track_view(user.user_id, req.challenge_id)
        .await
        .map_err(api_error)?;

    Ok(Json(MessageResponse {
        message: "View tracked successfully",
    }))
}

pub async fn track_selection(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(req): Json<SelectRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let crud = ActivityCrud::new(state.db.clone());
    crud.track_selection(user.user_id, req.challenge_id)
        .await
        .map_err(api_error)?;

    Ok(Json(MessageResponse {
        message: "Selection tracked successfully",
    }))
}

pub async fn swipes_today(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<Json<SwipesTodayResponse>, ApiError> {
    let crud = ActivityCrud::new(state.db.clone());
    let swipes = crud
        .count_swipes_today(user.user_id, Utc::now().date_naive())
        .await
        .map_err(db_error)?;

    Ok(Json(SwipesTodayResponse {
        swipes_today: swipes,
    }))
}

pub async fn viewed_challenges(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<Json<ViewedResponse>, ApiError> {
    let crud = ActivityCrud::new(state.db.clone());
    let viewed = crud.viewed_challenges(user.user_id).await.map_err(db_error)?;

    Ok(Json(ViewedResponse { viewed }))
}

pub async fn selected_challenges(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<Json<SelectedResponse>, ApiError> {
    let crud = ActivityCrud::new(state.db.clone());
    let selected = crud
        .selected_challenges(user.user_id)
        .await
        .map_err(db_error)?;

    Ok(Json(SelectedResponse { selected }))
}

// =============================================================================
// FAVORITES
// =============================================================================

pub async fn add_favorite(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(req): Json<FavoriteRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let crud = FavoriteCrud::new(state.db.clone());
    crud.add(user.user_id, req.challenge_id)
        .await
        .map_err(api_error)?;

    Ok(Json(MessageResponse {
        message: "Added to favorites successfully",
    }))
}

pub async fn remove_favorite(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(challenge_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let crud = FavoriteCrud::new(state.db.clone());
    crud.remove(user.user_id, challenge_id)
        .await
        .map_err(api_error)?;

    Ok(Json(MessageResponse {
        message: "Removed from favorites successfully",
    }))
}

pub async fn list_favorites(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<Json<FavoritesResponse>, ApiError> {
    let crud = FavoriteCrud::new(state.db.clone());
    let favorites = crud.list(user.user_id).await.map_err(db_error)?;

    Ok(Json(FavoritesResponse { favorites }))
}
