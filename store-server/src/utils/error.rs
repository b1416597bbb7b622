//! Unified error handling
//!
//! [`AppError`] is the HTTP-facing error type. Every handler returns
//! `AppResult<Json<T>>`; repository errors convert into it via `From` so
//! `?` propagates them without boilerplate.
//!
//! Error bodies are always `{"message": "..."}`. Storage failures map to
//! 500 with the raw error message in the body; they are also logged with
//! `target: "database"` so the filter can route them separately.

use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Referenced entity absent (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Missing or malformed input (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Storage or transaction failure (500)
    #[error("Database error: {0}")]
    Database(String),

    /// Everything else (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        AppError::Validation(format!("Multipart error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_message_body() {
        let response = AppError::NotFound("Product 42 not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Product 42 not found");
    }

    #[tokio::test]
    async fn validation_maps_to_400() {
        let response = AppError::Validation("quantity must be a positive integer".into())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["message"], "quantity must be a positive integer");
    }

    #[tokio::test]
    async fn database_error_exposes_raw_message_on_500() {
        let response = AppError::Database("connection reset by peer".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["message"], "connection reset by peer");
    }

    #[test]
    fn repo_errors_convert_by_kind() {
        let app: AppError = RepoError::NotFound("Cart 1 not found".into()).into();
        assert!(matches!(app, AppError::NotFound(_)));
        let app: AppError = RepoError::Validation("bad".into()).into();
        assert!(matches!(app, AppError::Validation(_)));
        let app: AppError = RepoError::Database("boom".into()).into();
        assert!(matches!(app, AppError::Database(_)));
    }
}
