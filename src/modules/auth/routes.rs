use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn auth_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/request-code", post(controller::request_code))
        .route("/verify", post(controller::verify))
        .route("/refresh", post(controller::refresh))
        .route("/logout", post(controller::logout))
        .route("/login", post(controller::login))
        .route("/me", get(controller::me))
}
