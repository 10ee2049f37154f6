use axum::{routing::get, Router};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn meta_routes() -> Router<Arc<AppState>> {
    Router::new().route("/filters", get(controller::filters))
}
