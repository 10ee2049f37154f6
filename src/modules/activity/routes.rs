use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn activity_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/swipe", post(controller::track_swipe))
        .route("/view", post(controller::track_view))
        .route("/select", post(controller::track_selection))
        .route("/swipes/today", get(controller::swipes_today))
        .route("/viewed", get(controller::viewed_challenges))
        .route("/selected", get(controller::selected_challenges))
        .route("/favorite", post(controller::add_favorite))
        .route("/favorite/{challenge_id}", delete(controller::remove_favorite))
        .route("/favorites", get(controller::list_favorites))
}
