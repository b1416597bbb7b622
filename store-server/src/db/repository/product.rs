//! Product Repository

use super::{RepoError, RepoResult, product_image, variant};
use shared::models::{Product, ProductCreate, ProductDetail, ProductUpdate};
use sqlx::PgPool;

const PRODUCT_SELECT: &str =
    "SELECT id, name, description, base_price, is_active, created_at, category_id FROM product";

pub async fn find_all(pool: &PgPool) -> RepoResult<Vec<Product>> {
    let sql = format!("{PRODUCT_SELECT} ORDER BY created_at DESC");
    let rows = sqlx::query_as::<_, Product>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> RepoResult<Option<Product>> {
    let sql = format!("{PRODUCT_SELECT} WHERE id = $1");
    let row = sqlx::query_as::<_, Product>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Product together with its images and variants.
pub async fn find_detail(pool: &PgPool, id: i64) -> RepoResult<ProductDetail> {
    let product = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Product {id} not found")))?;
    let images = product_image::find_by_product(pool, id).await?;
    let variants = variant::find_by_product(pool, id).await?;
    Ok(ProductDetail {
        product,
        images,
        variants,
    })
}

pub async fn create(pool: &PgPool, data: ProductCreate) -> RepoResult<ProductDetail> {
    let (name, description, base_price, category_id) = match (
        data.name,
        data.description,
        data.base_price,
        data.category_id,
    ) {
        (Some(name), Some(description), Some(base_price), Some(category_id)) => {
            (name, description, base_price, category_id)
        }
        _ => return Err(RepoError::Validation("Required fields are missing".into())),
    };

    let category = sqlx::query_scalar::<_, i64>("SELECT id FROM category WHERE id = $1")
        .bind(category_id)
        .fetch_optional(pool)
        .await?;
    if category.is_none() {
        return Err(RepoError::NotFound(format!(
            "Category {category_id} not found"
        )));
    }

    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        r#"
        INSERT INTO product (id, name, description, base_price, is_active, created_at, category_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(id)
    .bind(&name)
    .bind(&description)
    .bind(base_price)
    .bind(data.is_active.unwrap_or(true))
    .bind(now)
    .bind(category_id)
    .execute(pool)
    .await?;

    find_detail(pool, id).await
}

pub async fn update(pool: &PgPool, id: i64, data: ProductUpdate) -> RepoResult<ProductDetail> {
    if let Some(category_id) = data.category_id {
        let category = sqlx::query_scalar::<_, i64>("SELECT id FROM category WHERE id = $1")
            .bind(category_id)
            .fetch_optional(pool)
            .await?;
        if category.is_none() {
            return Err(RepoError::NotFound(format!(
                "Category {category_id} not found"
            )));
        }
    }

    let rows = sqlx::query(
        r#"
        UPDATE product SET
            name = COALESCE($1, name),
            description = COALESCE($2, description),
            base_price = COALESCE($3, base_price),
            is_active = COALESCE($4, is_active),
            category_id = COALESCE($5, category_id)
        WHERE id = $6
        "#,
    )
    .bind(data.name)
    .bind(data.description)
    .bind(data.base_price)
    .bind(data.is_active)
    .bind(data.category_id)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Product {id} not found")));
    }
    find_detail(pool, id).await
}

pub async fn delete(pool: &PgPool, id: i64) -> RepoResult<Product> {
    let row = sqlx::query_as::<_, Product>(
        r#"
        DELETE FROM product WHERE id = $1
        RETURNING id, name, description, base_price, is_active, created_at, category_id
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    row.ok_or_else(|| RepoError::NotFound(format!("Product {id} not found")))
}
