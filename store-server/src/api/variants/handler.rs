//! Variant API Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::core::AppState;
use crate::db::repository::variant;
use crate::utils::{AppError, AppResult, Json};
use shared::models::{Variant, VariantCreate, VariantUpdate};

/// GET /variants - list all variants
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Variant>>> {
    let variants = variant::find_all(&state.pool).await?;
    Ok(Json(variants))
}

/// GET /variants/:id - single variant
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Variant>> {
    let variant = variant::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Variant {id} not found")))?;
    Ok(Json(variant))
}

/// POST /variants - create a variant for a product
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<VariantCreate>,
) -> AppResult<(StatusCode, Json<Variant>)> {
    let variant = variant::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(variant)))
}

/// PUT /variants/:id - partial update
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<VariantUpdate>,
) -> AppResult<Json<Variant>> {
    let variant = variant::update(&state.pool, id, payload).await?;
    Ok(Json(variant))
}

/// DELETE /variants/:id - delete a variant, returning the deleted row
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Variant>> {
    let variant = variant::delete(&state.pool, id).await?;
    Ok(Json(variant))
}
