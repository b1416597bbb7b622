//! Offer Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Product;

/// Allowed discount types
pub const DISCOUNT_TYPES: [&str; 2] = ["PERCENTAGE", "FIXED"];

/// Offer entity: a time-bounded discount campaign associable with
/// multiple products (many-to-many through `offer_product`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Offer {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// PERCENTAGE | FIXED
    pub discount_type: String,
    pub discount_value: Decimal,
    pub starts_at: i64,
    pub ends_at: i64,
    pub is_active: bool,
}

/// Create offer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferCreate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub discount_type: Option<String>,
    pub discount_value: Option<Decimal>,
    pub starts_at: Option<i64>,
    pub ends_at: Option<i64>,
    pub is_active: Option<bool>,
}

/// Update offer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub discount_type: Option<String>,
    pub discount_value: Option<Decimal>,
    pub starts_at: Option<i64>,
    pub ends_at: Option<i64>,
    pub is_active: Option<bool>,
}

/// Offer with its associated products (detail view)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferDetail {
    #[serde(flatten)]
    pub offer: Offer,
    pub products: Vec<Product>,
}
