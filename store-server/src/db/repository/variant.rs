//! Variant Repository

use super::{RepoError, RepoResult};
use shared::models::{Variant, VariantCreate, VariantUpdate};
use sqlx::PgPool;

const VARIANT_SELECT: &str =
    "SELECT id, product_id, color_id, size_id, price, stock, is_active FROM variant";

pub async fn find_all(pool: &PgPool) -> RepoResult<Vec<Variant>> {
    let sql = format!("{VARIANT_SELECT} ORDER BY id");
    let rows = sqlx::query_as::<_, Variant>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> RepoResult<Option<Variant>> {
    let sql = format!("{VARIANT_SELECT} WHERE id = $1");
    let row = sqlx::query_as::<_, Variant>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_product(pool: &PgPool, product_id: i64) -> RepoResult<Vec<Variant>> {
    let sql = format!("{VARIANT_SELECT} WHERE product_id = $1 ORDER BY id");
    let rows = sqlx::query_as::<_, Variant>(&sql)
        .bind(product_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

async fn check_reference(pool: &PgPool, table: &str, id: i64) -> RepoResult<()> {
    // table names come from the callers below, never from user input
    let sql = format!("SELECT id FROM {table} WHERE id = $1");
    let found = sqlx::query_scalar::<_, i64>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    if found.is_none() {
        let label = match table {
            "product" => "Product",
            "color" => "Color",
            _ => "Size",
        };
        return Err(RepoError::NotFound(format!("{label} {id} not found")));
    }
    Ok(())
}

pub async fn create(pool: &PgPool, data: VariantCreate) -> RepoResult<Variant> {
    let (product_id, color_id, size_id, price) =
        match (data.product_id, data.color_id, data.size_id, data.price) {
            (Some(product_id), Some(color_id), Some(size_id), Some(price)) => {
                (product_id, color_id, size_id, price)
            }
            _ => return Err(RepoError::Validation("Required fields are missing".into())),
        };

    check_reference(pool, "product", product_id).await?;
    check_reference(pool, "color", color_id).await?;
    check_reference(pool, "size", size_id).await?;

    let stock = data.stock.unwrap_or(0);
    if stock < 0 {
        return Err(RepoError::Validation("stock must not be negative".into()));
    }

    let id = shared::util::snowflake_id();
    let row = sqlx::query_as::<_, Variant>(
        r#"
        INSERT INTO variant (id, product_id, color_id, size_id, price, stock, is_active)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, product_id, color_id, size_id, price, stock, is_active
        "#,
    )
    .bind(id)
    .bind(product_id)
    .bind(color_id)
    .bind(size_id)
    .bind(price)
    .bind(stock)
    .bind(data.is_active.unwrap_or(true))
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update(pool: &PgPool, id: i64, data: VariantUpdate) -> RepoResult<Variant> {
    if let Some(color_id) = data.color_id {
        check_reference(pool, "color", color_id).await?;
    }
    if let Some(size_id) = data.size_id {
        check_reference(pool, "size", size_id).await?;
    }
    if let Some(stock) = data.stock {
        if stock < 0 {
            return Err(RepoError::Validation("stock must not be negative".into()));
        }
    }

    let row = sqlx::query_as::<_, Variant>(
        r#"
        UPDATE variant SET
            color_id = COALESCE($1, color_id),
            size_id = COALESCE($2, size_id),
            price = COALESCE($3, price),
            stock = COALESCE($4, stock),
            is_active = COALESCE($5, is_active)
        WHERE id = $6
        RETURNING id, product_id, color_id, size_id, price, stock, is_active
        "#,
    )
    .bind(data.color_id)
    .bind(data.size_id)
    .bind(data.price)
    .bind(data.stock)
    .bind(data.is_active)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    row.ok_or_else(|| RepoError::NotFound(format!("Variant {id} not found")))
}

pub async fn delete(pool: &PgPool, id: i64) -> RepoResult<Variant> {
    let row = sqlx::query_as::<_, Variant>(
        r#"
        DELETE FROM variant WHERE id = $1
        RETURNING id, product_id, color_id, size_id, price, stock, is_active
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    row.ok_or_else(|| RepoError::NotFound(format!("Variant {id} not found")))
}
