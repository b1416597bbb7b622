//! Color API Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::core::AppState;
use crate::db::repository::color;
use crate::utils::{AppError, AppResult, Json};
use shared::models::{Color, ColorCreate, ColorUpdate};

/// GET /colors - list all colors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Color>>> {
    let colors = color::find_all(&state.pool).await?;
    Ok(Json(colors))
}

/// GET /colors/:id - single color
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Color>> {
    let color = color::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Color {id} not found")))?;
    Ok(Json(color))
}

/// POST /colors - create a color
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ColorCreate>,
) -> AppResult<(StatusCode, Json<Color>)> {
    let color = color::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(color)))
}

/// PUT /colors/:id - rename a color
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ColorUpdate>,
) -> AppResult<Json<Color>> {
    let color = color::update(&state.pool, id, payload).await?;
    Ok(Json(color))
}

/// DELETE /colors/:id - delete a color, returning the deleted row
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Color>> {
    let color = color::delete(&state.pool, id).await?;
    Ok(Json(color))
}
