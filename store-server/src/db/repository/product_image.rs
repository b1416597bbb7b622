//! Product Image Repository

use super::RepoResult;
use shared::models::ProductImage;
use sqlx::PgPool;

pub async fn find_by_product(pool: &PgPool, product_id: i64) -> RepoResult<Vec<ProductImage>> {
    let rows = sqlx::query_as::<_, ProductImage>(
        "SELECT id, image_url, is_main, product_id FROM product_image WHERE product_id = $1 ORDER BY id",
    )
    .bind(product_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create(
    pool: &PgPool,
    product_id: i64,
    image_url: &str,
    is_main: bool,
) -> RepoResult<ProductImage> {
    let id = shared::util::snowflake_id();
    let row = sqlx::query_as::<_, ProductImage>(
        r#"
        INSERT INTO product_image (id, image_url, is_main, product_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, image_url, is_main, product_id
        "#,
    )
    .bind(id)
    .bind(image_url)
    .bind(is_main)
    .bind(product_id)
    .fetch_one(pool)
    .await?;
    Ok(row)
}
