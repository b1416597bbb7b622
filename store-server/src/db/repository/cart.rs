//! Cart Repository

use super::{RepoError, RepoResult};
use shared::models::{Cart, CartCreate};
use sqlx::PgPool;

pub async fn find_all(pool: &PgPool) -> RepoResult<Vec<Cart>> {
    let rows =
        sqlx::query_as::<_, Cart>("SELECT id, user_id, created_at FROM cart ORDER BY created_at")
            .fetch_all(pool)
            .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> RepoResult<Option<Cart>> {
    let row = sqlx::query_as::<_, Cart>("SELECT id, user_id, created_at FROM cart WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &PgPool, data: CartCreate) -> RepoResult<Cart> {
    let user_id = data
        .user_id
        .ok_or_else(|| RepoError::Validation("user_id is required".into()))?;

    let user = sqlx::query_scalar::<_, i64>("SELECT id FROM app_user WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    if user.is_none() {
        return Err(RepoError::NotFound(format!("User {user_id} not found")));
    }

    let id = shared::util::snowflake_id();
    let row = sqlx::query_as::<_, Cart>(
        r#"
        INSERT INTO cart (id, user_id, created_at)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(shared::util::now_millis())
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn delete(pool: &PgPool, id: i64) -> RepoResult<Cart> {
    let row = sqlx::query_as::<_, Cart>(
        "DELETE FROM cart WHERE id = $1 RETURNING id, user_id, created_at",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    row.ok_or_else(|| RepoError::NotFound(format!("Cart {id} not found")))
}
