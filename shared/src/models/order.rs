//! Order Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Allowed order statuses
pub const ORDER_STATUSES: [&str; 4] = ["pending", "shipped", "delivered", "cancelled"];

/// Order header entity
///
/// Invariant: `total_cost` equals the sum of the order's line totals
/// (`unit_price * quantity`) at creation time. Created atomically with its
/// line items; `status` is mutated afterward by external fulfillment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub address: String,
    pub date_ordered: i64,
    /// pending | shipped | delivered | cancelled
    pub status: String,
    pub total_cost: Decimal,
}

/// Order line item entity
///
/// `unit_price` is snapshotted from the product's base price at order time
/// and never changes afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderProduct {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: Decimal,
}

/// One (product, quantity) pair of a place-order request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemRequest {
    pub product_id: i64,
    pub quantity: i32,
}

/// Place order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub user_id: Option<i64>,
    pub address: Option<String>,
    /// Defaults to "pending"
    pub status: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItemRequest>,
}

/// Order with its line items (detail view)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderProduct>,
}
