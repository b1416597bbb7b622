//! Cart Model

use serde::{Deserialize, Serialize};

/// Cart entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Cart {
    pub id: i64,
    pub user_id: i64,
    pub created_at: i64,
}

/// Create cart payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartCreate {
    pub user_id: Option<i64>,
}
