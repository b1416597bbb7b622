//! Category API Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::core::AppState;
use crate::db::repository::category;
use crate::utils::{AppError, AppResult, Json};
use shared::models::{Category, CategoryCreate, CategoryUpdate};

/// GET /categories - list all categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = category::find_all(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /categories/:id - single category
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Category>> {
    let category = category::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category {id} not found")))?;
    Ok(Json(category))
}

/// POST /categories - create a category
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = category::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /categories/:id - rename a category
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CategoryUpdate>,
) -> AppResult<Json<Category>> {
    let category = category::update(&state.pool, id, payload).await?;
    Ok(Json(category))
}

/// DELETE /categories/:id - delete a category, returning the deleted row
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Category>> {
    let category = category::delete(&state.pool, id).await?;
    Ok(Json(category))
}
