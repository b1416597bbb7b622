//! Data models
//!
//! Shared between store-server and frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are snowflake `i64` values generated in `crate::util`.

pub mod cart;
pub mod cart_item;
pub mod category;
pub mod color;
pub mod offer;
pub mod order;
pub mod product;
pub mod product_image;
pub mod size;
pub mod user;
pub mod variant;

// Re-exports
pub use cart::*;
pub use cart_item::*;
pub use category::*;
pub use color::*;
pub use offer::*;
pub use order::*;
pub use product::*;
pub use product_image::*;
pub use size::*;
pub use user::*;
pub use variant::*;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn product_serializes_money_as_number() {
        let product = Product {
            id: 1,
            name: "Shirt".into(),
            description: "Plain".into(),
            base_price: Decimal::new(4990, 2), // 49.90
            is_active: true,
            created_at: 1_700_000_000_000,
            category_id: 2,
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["base_price"], serde_json::json!(49.9));
    }

    #[test]
    fn order_detail_flattens_header_fields() {
        let detail = OrderDetail {
            order: Order {
                id: 10,
                user_id: 20,
                address: "1 Main St".into(),
                date_ordered: 1_700_000_000_000,
                status: "pending".into(),
                total_cost: Decimal::new(24970, 2),
            },
            items: vec![],
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["total_cost"], serde_json::json!(249.7));
        assert!(json["items"].as_array().unwrap().is_empty());
    }

    #[test]
    fn cart_item_create_tolerates_missing_fields() {
        let payload: CartItemCreate = serde_json::from_str("{}").unwrap();
        assert!(payload.cart_id.is_none());
        assert!(payload.product_id.is_none());
        assert!(payload.quantity.is_none());
    }

    #[test]
    fn order_create_defaults_items_to_empty() {
        let payload: OrderCreate =
            serde_json::from_str(r#"{"user_id": 1, "address": "x"}"#).unwrap();
        assert!(payload.items.is_empty());
        assert!(payload.status.is_none());
    }
}
