//! Product Image Model

use serde::{Deserialize, Serialize};

/// Product image entity
///
/// `image_url` is the public path of the stored file
/// (e.g. `/uploads/photos/<name>.jpg`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ProductImage {
    pub id: i64,
    pub image_url: String,
    pub is_main: bool,
    pub product_id: i64,
}
