use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn challenge_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(controller::list_challenges))
        .route("/random", get(controller::random_challenges))
        .route("/completions", get(controller::list_completions))
        .route("/{challenge_id}", get(controller::get_challenge))
        .route("/{challenge_id}/complete", post(controller::complete_challenge))
}
