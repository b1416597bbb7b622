//! User Model

use serde::{Deserialize, Serialize};

/// User entity
///
/// `hash` and `salt` are opaque credential fields: the server stores and
/// returns them as-is, it never derives or verifies them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub image_src: Option<String>,
    /// ISO date string (YYYY-MM-DD)
    pub birth_date: Option<String>,
    pub hash: String,
    pub salt: String,
    pub created_at: i64,
}

/// Create user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub image_src: Option<String>,
    pub birth_date: Option<String>,
    pub hash: Option<String>,
    pub salt: Option<String>,
}

/// Update user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub image_src: Option<String>,
    pub birth_date: Option<String>,
    pub hash: Option<String>,
    pub salt: Option<String>,
}
