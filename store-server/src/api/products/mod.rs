//! Product API

mod handler;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/products", routes())
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
        .route(
            "/{id}/image",
            // allow some slack over MAX_FILE_SIZE for multipart framing
            post(handler::upload_image)
                .layer(DefaultBodyLimit::max(handler::MAX_FILE_SIZE + 64 * 1024)),
        )
}
