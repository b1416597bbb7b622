//! Cart Item API Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::core::AppState;
use crate::db::repository::cart_item;
use crate::utils::{AppError, AppResult, Json};
use shared::models::{CartItem, CartItemCreate, CartItemUpdate};

/// GET /cart-items - list every cart item
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CartItem>>> {
    let items = cart_item::find_all(&state.pool).await?;
    Ok(Json(items))
}

/// GET /cart-items/:id - single cart item
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<CartItem>> {
    let item = cart_item::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Cart item {id} not found")))?;
    Ok(Json(item))
}

/// POST /cart-items - add a product to a cart (quantity defaults to 1)
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CartItemCreate>,
) -> AppResult<(StatusCode, Json<CartItem>)> {
    let item = cart_item::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /cart-items/:id - change the quantity
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CartItemUpdate>,
) -> AppResult<Json<CartItem>> {
    let item = cart_item::update(&state.pool, id, payload).await?;
    Ok(Json(item))
}

/// DELETE /cart-items/:id - remove an item, returning the deleted row
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<CartItem>> {
    let item = cart_item::delete(&state.pool, id).await?;
    Ok(Json(item))
}
