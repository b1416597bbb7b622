//! Cart Item Model

use serde::{Deserialize, Serialize};

/// Cart item entity
///
/// No price snapshot: prices are resolved at checkout time. Duplicate
/// (cart_id, product_id) rows are allowed as separate rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CartItem {
    pub id: i64,
    pub cart_id: i64,
    pub product_id: i64,
    pub quantity: i32,
}

/// Create cart item payload
///
/// `cart_id` and `product_id` are required; quantity defaults to 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItemCreate {
    pub cart_id: Option<i64>,
    pub product_id: Option<i64>,
    pub quantity: Option<i32>,
}

/// Update cart item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItemUpdate {
    pub quantity: Option<i32>,
}
