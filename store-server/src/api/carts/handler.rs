//! Cart API Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::core::AppState;
use crate::db::repository::cart;
use crate::utils::{AppError, AppResult, Json};
use shared::models::{Cart, CartCreate};

/// GET /carts - list all carts
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Cart>>> {
    let carts = cart::find_all(&state.pool).await?;
    Ok(Json(carts))
}

/// GET /carts/:id - single cart
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Cart>> {
    let cart = cart::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Cart {id} not found")))?;
    Ok(Json(cart))
}

/// POST /carts - open a cart for a user
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CartCreate>,
) -> AppResult<(StatusCode, Json<Cart>)> {
    let cart = cart::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(cart)))
}

/// DELETE /carts/:id - delete a cart and its items, returning the deleted row
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Cart>> {
    let cart = cart::delete(&state.pool, id).await?;
    Ok(Json(cart))
}
