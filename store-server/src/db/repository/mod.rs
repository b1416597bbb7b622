//! Repository Module
//!
//! One module per entity. Repositories are free async functions taking the
//! pool (or an open transaction) explicitly; nothing here holds global
//! state.

// Catalog
pub mod category;
pub mod color;
pub mod product;
pub mod product_image;
pub mod size;
pub mod variant;

// Offers
pub mod offer;

// Cart
pub mod cart;
pub mod cart_item;

// Orders
pub mod order;

// Users
pub mod user;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
