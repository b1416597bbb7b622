//! Size Model

use serde::{Deserialize, Serialize};

/// Size entity (variant axis)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Size {
    pub id: i64,
    pub name: String,
}

/// Create size payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeCreate {
    pub name: Option<String>,
}

/// Update size payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeUpdate {
    pub name: Option<String>,
}
