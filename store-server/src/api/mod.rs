//! HTTP API
//!
//! Each resource module owns its routes and exposes a `router()`; this
//! module merges them and applies the shared middleware stack.

mod cart_items;
mod carts;
mod categories;
mod colors;
mod health;
mod offers;
mod orders;
mod products;
mod sizes;
mod users;
mod variants;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(categories::router())
        .merge(colors::router())
        .merge(sizes::router())
        .merge(products::router())
        .merge(variants::router())
        .merge(offers::router())
        .merge(carts::router())
        .merge(cart_items::router())
        .merge(orders::router())
        .merge(users::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
