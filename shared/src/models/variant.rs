//! Variant Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Variant entity: a (product, color, size) combination with its own
/// stock and price.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Variant {
    pub id: i64,
    pub product_id: i64,
    pub color_id: i64,
    pub size_id: i64,
    pub price: Decimal,
    pub stock: i32,
    pub is_active: bool,
}

/// Create variant payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantCreate {
    pub product_id: Option<i64>,
    pub color_id: Option<i64>,
    pub size_id: Option<i64>,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
    pub is_active: Option<bool>,
}

/// Update variant payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantUpdate {
    pub color_id: Option<i64>,
    pub size_id: Option<i64>,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
    pub is_active: Option<bool>,
}
