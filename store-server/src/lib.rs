//! Storefront REST server
//!
//! HTTP API over a PostgreSQL-backed product catalog, shopping carts,
//! discount offers, and order placement.
//!
//! # Module structure
//!
//! ```text
//! store-server/src/
//! ├── core/        # configuration and shared state
//! ├── api/         # HTTP routes and handlers
//! ├── db/          # repositories over PostgreSQL
//! ├── pricing/     # decimal money arithmetic
//! └── utils/       # error, result, and extractor types
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod pricing;
pub mod utils;

pub use crate::core::{AppState, Config};
pub use utils::{AppError, AppResult};
