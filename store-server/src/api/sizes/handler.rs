//! Size API Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::core::AppState;
use crate::db::repository::size;
use crate::utils::{AppError, AppResult, Json};
use shared::models::{Size, SizeCreate, SizeUpdate};

/// GET /sizes - list all sizes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Size>>> {
    let sizes = size::find_all(&state.pool).await?;
    Ok(Json(sizes))
}

/// GET /sizes/:id - single size
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Size>> {
    let size = size::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Size {id} not found")))?;
    Ok(Json(size))
}

/// POST /sizes - create a size
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<SizeCreate>,
) -> AppResult<(StatusCode, Json<Size>)> {
    let size = size::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(size)))
}

/// PUT /sizes/:id - rename a size
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SizeUpdate>,
) -> AppResult<Json<Size>> {
    let size = size::update(&state.pool, id, payload).await?;
    Ok(Json(size))
}

/// DELETE /sizes/:id - delete a size, returning the deleted row
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Size>> {
    let size = size::delete(&state.pool, id).await?;
    Ok(Json(size))
}
