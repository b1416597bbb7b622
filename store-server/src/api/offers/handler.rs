//! Offer API Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;

use crate::core::AppState;
use crate::db::repository::offer;
use crate::utils::{AppResult, Json};
use shared::models::{Offer, OfferCreate, OfferDetail, OfferUpdate};

/// PATCH /offers/:id/products body
#[derive(Debug, Deserialize)]
pub struct OfferProductsPatch {
    #[serde(default)]
    pub product_ids: Vec<i64>,
}

/// GET /offers - list all offers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Offer>>> {
    let offers = offer::find_all(&state.pool).await?;
    Ok(Json(offers))
}

/// GET /offers/:id - offer with its associated products
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<OfferDetail>> {
    let detail = offer::find_detail(&state.pool, id).await?;
    Ok(Json(detail))
}

/// POST /offers - create an offer
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<OfferCreate>,
) -> AppResult<(StatusCode, Json<Offer>)> {
    let offer = offer::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(offer)))
}

/// PUT /offers/:id - partial update
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<OfferUpdate>,
) -> AppResult<Json<Offer>> {
    let offer = offer::update(&state.pool, id, payload).await?;
    Ok(Json(offer))
}

/// DELETE /offers/:id - delete an offer, returning the deleted row
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Offer>> {
    let offer = offer::delete(&state.pool, id).await?;
    Ok(Json(offer))
}

/// PATCH /offers/:id/products - associate products with an offer
///
/// An empty `product_ids` list is accepted and changes nothing; unknown
/// product ids fail the whole request.
pub async fn add_products(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<OfferProductsPatch>,
) -> AppResult<Json<OfferDetail>> {
    let detail = offer::add_products(&state.pool, id, &payload.product_ids).await?;
    Ok(Json(detail))
}
