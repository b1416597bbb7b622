//! Order API Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::core::AppState;
use crate::db::repository::order;
use crate::utils::{AppResult, Json};
use shared::models::{Order, OrderCreate, OrderDetail};

/// GET /orders - list all order headers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Order>>> {
    let orders = order::find_all(&state.pool).await?;
    Ok(Json(orders))
}

/// GET /orders/:id - order header with its lines
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<OrderDetail>> {
    let detail = order::find_detail(&state.pool, id).await?;
    Ok(Json(detail))
}

/// POST /orders - place an order
///
/// Lines are priced server-side from each product's current base price and
/// written together with the header in one transaction.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<OrderDetail>)> {
    let detail = order::place_order(&state.pool, payload).await?;

    tracing::info!(
        order_id = %detail.order.id,
        user_id = %detail.order.user_id,
        total_cost = %detail.order.total_cost,
        lines = %detail.items.len(),
        "Order placed"
    );

    Ok((StatusCode::CREATED, Json(detail)))
}
