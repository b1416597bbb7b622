//! Order Repository
//!
//! Order placement is the one multi-table write in the system. The header
//! and its lines go through a single transaction, so a failure on any line
//! rolls back the whole order.

use super::{RepoError, RepoResult};
use crate::pricing;
use rust_decimal::Decimal;
use shared::models::{ORDER_STATUSES, Order, OrderCreate, OrderDetail, OrderProduct};
use sqlx::PgPool;

const ORDER_SELECT: &str =
    "SELECT id, user_id, address, date_ordered, status, total_cost FROM store_order";

pub async fn find_all(pool: &PgPool) -> RepoResult<Vec<Order>> {
    let sql = format!("{ORDER_SELECT} ORDER BY date_ordered DESC");
    let rows = sqlx::query_as::<_, Order>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> RepoResult<Option<Order>> {
    let sql = format!("{ORDER_SELECT} WHERE id = $1");
    let row = sqlx::query_as::<_, Order>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Order header together with its lines.
pub async fn find_detail(pool: &PgPool, id: i64) -> RepoResult<OrderDetail> {
    let order = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))?;
    let items = find_lines(pool, id).await?;
    Ok(OrderDetail { order, items })
}

pub async fn find_lines(pool: &PgPool, order_id: i64) -> RepoResult<Vec<OrderProduct>> {
    let rows = sqlx::query_as::<_, OrderProduct>(
        r#"
        SELECT id, order_id, product_id, quantity, unit_price
        FROM order_product
        WHERE order_id = $1
        ORDER BY id
        "#,
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Places an order. Every line is priced from the product's current
/// `base_price` and the grand total is the sum of the line totals; the
/// header and all lines are written inside one transaction.
pub async fn place_order(pool: &PgPool, data: OrderCreate) -> RepoResult<OrderDetail> {
    let user_id = data
        .user_id
        .ok_or_else(|| RepoError::Validation("user_id is required".into()))?;
    let address = data
        .address
        .filter(|a| !a.trim().is_empty())
        .ok_or_else(|| RepoError::Validation("address is required".into()))?;
    let status = data.status.unwrap_or_else(|| "pending".to_string());
    if !ORDER_STATUSES.contains(&status.as_str()) {
        return Err(RepoError::Validation(format!(
            "status must be one of {ORDER_STATUSES:?}"
        )));
    }
    if data.items.is_empty() {
        return Err(RepoError::Validation("items must not be empty".into()));
    }
    for item in &data.items {
        pricing::validate_quantity(item.quantity).map_err(RepoError::Validation)?;
    }

    let mut tx = pool.begin().await?;

    let user = sqlx::query_scalar::<_, i64>("SELECT id FROM app_user WHERE id = $1")
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;
    if user.is_none() {
        return Err(RepoError::NotFound(format!("User {user_id} not found")));
    }

    // (product_id, quantity, unit_price) per line, priced inside the tx
    let mut lines: Vec<(i64, i32, Decimal)> = Vec::with_capacity(data.items.len());
    for item in &data.items {
        let unit_price =
            sqlx::query_scalar::<_, Decimal>("SELECT base_price FROM product WHERE id = $1")
                .bind(item.product_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| {
                    RepoError::NotFound(format!("Product {} not found", item.product_id))
                })?;
        lines.push((item.product_id, item.quantity, unit_price));
    }
    let total_cost = pricing::order_total(
        lines
            .iter()
            .map(|&(_, quantity, unit_price)| (unit_price, quantity)),
    );

    let order_id = shared::util::snowflake_id();
    sqlx::query(
        r#"
        INSERT INTO store_order (id, user_id, address, date_ordered, status, total_cost)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(order_id)
    .bind(user_id)
    .bind(&address)
    .bind(shared::util::now_millis())
    .bind(&status)
    .bind(total_cost)
    .execute(&mut *tx)
    .await?;

    for (product_id, quantity, unit_price) in &lines {
        sqlx::query(
            r#"
            INSERT INTO order_product (order_id, product_id, quantity, unit_price)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(order_id)
        .bind(product_id)
        .bind(quantity)
        .bind(unit_price)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    find_detail(pool, order_id).await
}
