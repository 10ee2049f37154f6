use axum::{
    middleware,
    routing::{post, put},
    Router,
};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn admin_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/challenges", post(controller::create_challenge))
        .route("/challenges/{challenge_id}", put(controller::update_challenge))
        .route("/reset-today", post(controller::reset_today))
        .layer(middleware::from_fn_with_state(
            state,
            controller::require_admin_token,
        ))
}
