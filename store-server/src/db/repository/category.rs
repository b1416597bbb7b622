//! Category Repository

use super::{RepoError, RepoResult};
use shared::models::{Category, CategoryCreate, CategoryUpdate};
use sqlx::PgPool;

pub async fn find_all(pool: &PgPool) -> RepoResult<Vec<Category>> {
    let rows = sqlx::query_as::<_, Category>("SELECT id, name FROM category ORDER BY name")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> RepoResult<Option<Category>> {
    let row = sqlx::query_as::<_, Category>("SELECT id, name FROM category WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &PgPool, data: CategoryCreate) -> RepoResult<Category> {
    let name = data
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| RepoError::Validation("name is required".into()))?;
    let id = shared::util::snowflake_id();
    sqlx::query("INSERT INTO category (id, name) VALUES ($1, $2)")
        .bind(id)
        .bind(&name)
        .execute(pool)
        .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create category".into()))
}

pub async fn update(pool: &PgPool, id: i64, data: CategoryUpdate) -> RepoResult<Category> {
    let name = data
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| RepoError::Validation("name is required".into()))?;
    let rows = sqlx::query("UPDATE category SET name = $1 WHERE id = $2")
        .bind(&name)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Category {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Category {id} not found")))
}

pub async fn delete(pool: &PgPool, id: i64) -> RepoResult<Category> {
    let row =
        sqlx::query_as::<_, Category>("DELETE FROM category WHERE id = $1 RETURNING id, name")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    row.ok_or_else(|| RepoError::NotFound(format!("Category {id} not found")))
}
