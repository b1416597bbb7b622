//! Offer Repository

use super::{RepoError, RepoResult};
use rust_decimal::Decimal;
use shared::models::{DISCOUNT_TYPES, Offer, OfferCreate, OfferDetail, OfferUpdate, Product};
use sqlx::PgPool;

const OFFER_SELECT: &str = "SELECT id, name, description, discount_type, discount_value, starts_at, ends_at, is_active FROM offer";

pub async fn find_all(pool: &PgPool) -> RepoResult<Vec<Offer>> {
    let sql = format!("{OFFER_SELECT} ORDER BY starts_at DESC");
    let rows = sqlx::query_as::<_, Offer>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> RepoResult<Option<Offer>> {
    let sql = format!("{OFFER_SELECT} WHERE id = $1");
    let row = sqlx::query_as::<_, Offer>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Offer together with every product it currently applies to.
pub async fn find_detail(pool: &PgPool, id: i64) -> RepoResult<OfferDetail> {
    let offer = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Offer {id} not found")))?;
    let products = find_products(pool, id).await?;
    Ok(OfferDetail { offer, products })
}

pub async fn find_products(pool: &PgPool, offer_id: i64) -> RepoResult<Vec<Product>> {
    let rows = sqlx::query_as::<_, Product>(
        r#"
        SELECT p.id, p.name, p.description, p.base_price, p.is_active, p.created_at, p.category_id
        FROM product p
        JOIN offer_product op ON op.product_id = p.id
        WHERE op.offer_id = $1
        ORDER BY p.created_at DESC
        "#,
    )
    .bind(offer_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

fn validate_discount(discount_type: &str, discount_value: Decimal) -> RepoResult<()> {
    if !DISCOUNT_TYPES.contains(&discount_type) {
        return Err(RepoError::Validation(format!(
            "discount_type must be one of {DISCOUNT_TYPES:?}"
        )));
    }
    if discount_value < Decimal::ZERO {
        return Err(RepoError::Validation(
            "discount_value must not be negative".into(),
        ));
    }
    if discount_type == "PERCENTAGE" && discount_value > Decimal::from(100) {
        return Err(RepoError::Validation(
            "discount_value must not exceed 100 percent".into(),
        ));
    }
    Ok(())
}

pub async fn create(pool: &PgPool, data: OfferCreate) -> RepoResult<Offer> {
    let (name, discount_type, discount_value, starts_at, ends_at) = match (
        data.name,
        data.discount_type,
        data.discount_value,
        data.starts_at,
        data.ends_at,
    ) {
        (Some(name), Some(dt), Some(dv), Some(s), Some(e)) => (name, dt, dv, s, e),
        _ => return Err(RepoError::Validation("Required fields are missing".into())),
    };
    validate_discount(&discount_type, discount_value)?;
    if ends_at <= starts_at {
        return Err(RepoError::Validation(
            "ends_at must be after starts_at".into(),
        ));
    }

    let id = shared::util::snowflake_id();
    let row = sqlx::query_as::<_, Offer>(
        r#"
        INSERT INTO offer (id, name, description, discount_type, discount_value, starts_at, ends_at, is_active)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, name, description, discount_type, discount_value, starts_at, ends_at, is_active
        "#,
    )
    .bind(id)
    .bind(&name)
    .bind(data.description.unwrap_or_default())
    .bind(&discount_type)
    .bind(discount_value)
    .bind(starts_at)
    .bind(ends_at)
    .bind(data.is_active.unwrap_or(true))
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update(pool: &PgPool, id: i64, data: OfferUpdate) -> RepoResult<Offer> {
    let current = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Offer {id} not found")))?;

    let discount_type = data.discount_type.unwrap_or(current.discount_type);
    let discount_value = data.discount_value.unwrap_or(current.discount_value);
    validate_discount(&discount_type, discount_value)?;
    let starts_at = data.starts_at.unwrap_or(current.starts_at);
    let ends_at = data.ends_at.unwrap_or(current.ends_at);
    if ends_at <= starts_at {
        return Err(RepoError::Validation(
            "ends_at must be after starts_at".into(),
        ));
    }

    let row = sqlx::query_as::<_, Offer>(
        r#"
        UPDATE offer SET
            name = COALESCE($1, name),
            description = COALESCE($2, description),
            discount_type = $3,
            discount_value = $4,
            starts_at = $5,
            ends_at = $6,
            is_active = COALESCE($7, is_active)
        WHERE id = $8
        RETURNING id, name, description, discount_type, discount_value, starts_at, ends_at, is_active
        "#,
    )
    .bind(data.name)
    .bind(data.description)
    .bind(&discount_type)
    .bind(discount_value)
    .bind(starts_at)
    .bind(ends_at)
    .bind(data.is_active)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    row.ok_or_else(|| RepoError::NotFound(format!("Offer {id} not found")))
}

pub async fn delete(pool: &PgPool, id: i64) -> RepoResult<Offer> {
    let row = sqlx::query_as::<_, Offer>(
        r#"
        DELETE FROM offer WHERE id = $1
        RETURNING id, name, description, discount_type, discount_value, starts_at, ends_at, is_active
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    row.ok_or_else(|| RepoError::NotFound(format!("Offer {id} not found")))
}

/// Associates the given products with an offer. Products already on the
/// offer are left alone, so re-sending an id is harmless. An empty list
/// changes nothing and still returns the current detail.
pub async fn add_products(
    pool: &PgPool,
    offer_id: i64,
    product_ids: &[i64],
) -> RepoResult<OfferDetail> {
    let offer = sqlx::query_scalar::<_, i64>("SELECT id FROM offer WHERE id = $1")
        .bind(offer_id)
        .fetch_optional(pool)
        .await?;
    if offer.is_none() {
        return Err(RepoError::NotFound(format!("Offer {offer_id} not found")));
    }

    if !product_ids.is_empty() {
        let mut tx = pool.begin().await?;
        for product_id in product_ids {
            let found = sqlx::query_scalar::<_, i64>("SELECT id FROM product WHERE id = $1")
                .bind(product_id)
                .fetch_optional(&mut *tx)
                .await?;
            if found.is_none() {
                return Err(RepoError::NotFound(format!(
                    "Product {product_id} not found"
                )));
            }
            sqlx::query(
                r#"
                INSERT INTO offer_product (offer_id, product_id)
                VALUES ($1, $2)
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(offer_id)
            .bind(product_id)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
    }

    find_detail(pool, offer_id).await
}
