use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use super::crud::MetaCrud;
use super::schema::FiltersResponse;
use crate::modules::auth::schema::ErrorResponse;
use crate::AppState;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn db_error(err: sqlx::Error) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(err.to_string())),
    )
}

// =============================================================================
// GET /meta/filters
// =============================================================================

pub async fn filters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FiltersResponse>, ApiError> {
    let crud = MetaCrud::new(state.db.clone());

    let categories = crud.category_names().await.map_err(db_error)?;
    let sizes = crud.size_names().await.map_err(db_error)?;
    let tags = crud.tag_names().await.map_err(db_error)?;

    Ok(Json(FiltersResponse {
        categories,
        sizes,
        tags,
    }))
}
