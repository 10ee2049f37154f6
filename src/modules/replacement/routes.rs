use axum::{routing::post, Router};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn replacement_routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/",
        post(controller::create_replacement).get(controller::list_replacements),
    )
}
