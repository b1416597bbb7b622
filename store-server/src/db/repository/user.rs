//! User Repository
//!
//! Credentials are stored as opaque hash/salt strings supplied by the
//! caller; no hashing happens on this side.

use super::{RepoError, RepoResult};
use shared::models::{User, UserCreate, UserUpdate};
use sqlx::PgPool;

const USER_SELECT: &str = "SELECT id, email, first_name, last_name, phone, gender, image_src, birth_date, hash, salt, created_at FROM app_user";

pub async fn find_all(pool: &PgPool) -> RepoResult<Vec<User>> {
    let sql = format!("{USER_SELECT} ORDER BY created_at DESC");
    let rows = sqlx::query_as::<_, User>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> RepoResult<Option<User>> {
    let sql = format!("{USER_SELECT} WHERE id = $1");
    let row = sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> RepoResult<Option<User>> {
    let sql = format!("{USER_SELECT} WHERE email = $1");
    let row = sqlx::query_as::<_, User>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &PgPool, data: UserCreate) -> RepoResult<User> {
    let (email, first_name, last_name, hash, salt) = match (
        data.email,
        data.first_name,
        data.last_name,
        data.hash,
        data.salt,
    ) {
        (Some(email), Some(first_name), Some(last_name), Some(hash), Some(salt)) => {
            (email, first_name, last_name, hash, salt)
        }
        _ => return Err(RepoError::Validation("Required fields are missing".into())),
    };

    if find_by_email(pool, &email).await?.is_some() {
        return Err(RepoError::Validation(format!(
            "Email {email} is already registered"
        )));
    }

    let id = shared::util::snowflake_id();
    sqlx::query(
        r#"
        INSERT INTO app_user (id, email, first_name, last_name, phone, gender, image_src, birth_date, hash, salt, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        "#,
    )
    .bind(id)
    .bind(&email)
    .bind(&first_name)
    .bind(&last_name)
    .bind(data.phone)
    .bind(data.gender)
    .bind(data.image_src)
    .bind(data.birth_date)
    .bind(&hash)
    .bind(&salt)
    .bind(shared::util::now_millis())
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".into()))
}

pub async fn update(pool: &PgPool, id: i64, data: UserUpdate) -> RepoResult<User> {
    let rows = sqlx::query(
        r#"
        UPDATE app_user SET
            email = COALESCE($1, email),
            first_name = COALESCE($2, first_name),
            last_name = COALESCE($3, last_name),
            phone = COALESCE($4, phone),
            gender = COALESCE($5, gender),
            image_src = COALESCE($6, image_src),
            birth_date = COALESCE($7, birth_date),
            hash = COALESCE($8, hash),
            salt = COALESCE($9, salt)
        WHERE id = $10
        "#,
    )
    .bind(data.email)
    .bind(data.first_name)
    .bind(data.last_name)
    .bind(data.phone)
    .bind(data.gender)
    .bind(data.image_src)
    .bind(data.birth_date)
    .bind(data.hash)
    .bind(data.salt)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("User {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("User {id} not found")))
}

pub async fn delete(pool: &PgPool, id: i64) -> RepoResult<User> {
    let row = sqlx::query_as::<_, User>(
        r#"
        DELETE FROM app_user WHERE id = $1
        RETURNING id, email, first_name, last_name, phone, gender, image_src, birth_date, hash, salt, created_at
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    row.ok_or_else(|| RepoError::NotFound(format!("User {id} not found")))
}
