//! Shared types for the storefront workspace
//!
//! Domain models exchanged between the API server and its clients, plus
//! the ID/time utilities every member uses.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
