//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ProductImage, Variant};

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Default unit price source for new orders
    pub base_price: Decimal,
    pub is_active: bool,
    pub created_at: i64,
    /// Category reference
    pub category_id: i64,
}

/// Create product payload
///
/// Required fields are `Option` so missing input answers 400 with a
/// message instead of a deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub base_price: Option<Decimal>,
    pub category_id: Option<i64>,
    pub is_active: Option<bool>,
}

/// Update product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub base_price: Option<Decimal>,
    pub category_id: Option<i64>,
    pub is_active: Option<bool>,
}

/// Product with its images and variants (detail view)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    pub images: Vec<ProductImage>,
    pub variants: Vec<Variant>,
}
