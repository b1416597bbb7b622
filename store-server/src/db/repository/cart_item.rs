//! Cart Item Repository

use super::{RepoError, RepoResult};
use crate::pricing;
use shared::models::{CartItem, CartItemCreate, CartItemUpdate};
use sqlx::PgPool;

pub async fn find_all(pool: &PgPool) -> RepoResult<Vec<CartItem>> {
    let rows = sqlx::query_as::<_, CartItem>(
        "SELECT id, cart_id, product_id, quantity FROM cart_item ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> RepoResult<Option<CartItem>> {
    let row = sqlx::query_as::<_, CartItem>(
        "SELECT id, cart_id, product_id, quantity FROM cart_item WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Adds a product to a cart. A repeated (cart, product) pair gets its own
/// row rather than bumping the quantity of the existing one.
pub async fn create(pool: &PgPool, data: CartItemCreate) -> RepoResult<CartItem> {
    let (cart_id, product_id) = match (data.cart_id, data.product_id) {
        (Some(cart_id), Some(product_id)) => (cart_id, product_id),
        _ => {
            return Err(RepoError::Validation(
                "cart_id and product_id are required".into(),
            ));
        }
    };
    let quantity = data.quantity.unwrap_or(1);
    pricing::validate_quantity(quantity).map_err(RepoError::Validation)?;

    let cart = sqlx::query_scalar::<_, i64>("SELECT id FROM cart WHERE id = $1")
        .bind(cart_id)
        .fetch_optional(pool)
        .await?;
    if cart.is_none() {
        return Err(RepoError::NotFound(format!("Cart {cart_id} not found")));
    }
    let product = sqlx::query_scalar::<_, i64>("SELECT id FROM product WHERE id = $1")
        .bind(product_id)
        .fetch_optional(pool)
        .await?;
    if product.is_none() {
        return Err(RepoError::NotFound(format!(
            "Product {product_id} not found"
        )));
    }

    let id = shared::util::snowflake_id();
    let row = sqlx::query_as::<_, CartItem>(
        r#"
        INSERT INTO cart_item (id, cart_id, product_id, quantity)
        VALUES ($1, $2, $3, $4)
        RETURNING id, cart_id, product_id, quantity
        "#,
    )
    .bind(id)
    .bind(cart_id)
    .bind(product_id)
    .bind(quantity)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update(pool: &PgPool, id: i64, data: CartItemUpdate) -> RepoResult<CartItem> {
    let existing = find_by_id(pool, id).await?;
    if existing.is_none() {
        return Err(RepoError::NotFound(format!("Cart item {id} not found")));
    }

    let quantity = data
        .quantity
        .ok_or_else(|| RepoError::Validation("quantity is required".into()))?;
    pricing::validate_quantity(quantity).map_err(RepoError::Validation)?;

    let row = sqlx::query_as::<_, CartItem>(
        r#"
        UPDATE cart_item SET quantity = $1 WHERE id = $2
        RETURNING id, cart_id, product_id, quantity
        "#,
    )
    .bind(quantity)
    .bind(id)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn delete(pool: &PgPool, id: i64) -> RepoResult<CartItem> {
    let row = sqlx::query_as::<_, CartItem>(
        r#"
        DELETE FROM cart_item WHERE id = $1
        RETURNING id, cart_id, product_id, quantity
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    row.ok_or_else(|| RepoError::NotFound(format!("Cart item {id} not found")))
}
