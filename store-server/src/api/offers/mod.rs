//! Offer API

mod handler;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/offers", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/products", patch(handler::add_products))
}
