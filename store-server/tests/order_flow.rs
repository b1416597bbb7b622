//! Order placement and cart flow tests against a live PostgreSQL
//!
//! These tests need a scratch database and are ignored by default:
//!
//! ```text
//! DATABASE_URL=postgres://localhost/storefront_test cargo test -- --ignored
//! ```

use rust_decimal::Decimal;
use shared::models::{
    CartCreate, CartItemCreate, CartItemUpdate, Category, CategoryCreate, OfferCreate,
    OrderCreate, OrderItemRequest, Product, ProductCreate, User, UserCreate,
};
use shared::util::{now_millis, snowflake_id};
use sqlx::PgPool;
use store_server::db::repository::{
    RepoError, cart, cart_item, category, offer, order, product, user,
};

async fn connect() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for this test");
    let pool = PgPool::connect(&url).await.expect("database connection");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");
    pool
}

async fn seed_user(pool: &PgPool) -> User {
    user::create(
        pool,
        UserCreate {
            email: Some(format!("shopper{}@example.com", snowflake_id())),
            first_name: Some("Test".into()),
            last_name: Some("Shopper".into()),
            phone: None,
            gender: None,
            image_src: None,
            birth_date: None,
            hash: Some("x".repeat(64)),
            salt: Some("y".repeat(32)),
        },
    )
    .await
    .expect("seed user")
}

async fn seed_category(pool: &PgPool) -> Category {
    category::create(
        pool,
        CategoryCreate {
            name: Some(format!("category-{}", snowflake_id())),
        },
    )
    .await
    .expect("seed category")
}

async fn seed_product(pool: &PgPool, category_id: i64, price: Decimal) -> Product {
    product::create(
        pool,
        ProductCreate {
            name: Some(format!("product-{}", snowflake_id())),
            description: Some("test product".into()),
            base_price: Some(price),
            category_id: Some(category_id),
            is_active: None,
        },
    )
    .await
    .expect("seed product")
    .product
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_place_order_totals_two_lines() {
    let pool = connect().await;
    let user = seed_user(&pool).await;
    let cat = seed_category(&pool).await;
    let shirt = seed_product(&pool, cat.id, Decimal::new(4990, 2)).await; // 49.90
    let jacket = seed_product(&pool, cat.id, Decimal::new(14990, 2)).await; // 149.90

    let detail = order::place_order(
        &pool,
        OrderCreate {
            user_id: Some(user.id),
            address: Some("Calle Mayor 1".into()),
            status: None,
            items: vec![
                OrderItemRequest {
                    product_id: shirt.id,
                    quantity: 2,
                },
                OrderItemRequest {
                    product_id: jacket.id,
                    quantity: 1,
                },
            ],
        },
    )
    .await
    .expect("order placed");

    // 49.90 * 2 + 149.90 * 1 = 249.70
    assert_eq!(detail.order.total_cost, Decimal::new(24970, 2));
    assert_eq!(detail.order.status, "pending");
    assert_eq!(detail.items.len(), 2);

    let shirt_line = detail
        .items
        .iter()
        .find(|l| l.product_id == shirt.id)
        .expect("shirt line");
    assert_eq!(shirt_line.quantity, 2);
    assert_eq!(shirt_line.unit_price, Decimal::new(4990, 2));

    // Reload and make sure the persisted rows agree with the response
    let reloaded = order::find_detail(&pool, detail.order.id)
        .await
        .expect("reload");
    assert_eq!(reloaded.order.total_cost, detail.order.total_cost);
    assert_eq!(reloaded.items.len(), 2);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_place_order_rolls_back_on_unknown_product() {
    let pool = connect().await;
    let user = seed_user(&pool).await;
    let cat = seed_category(&pool).await;
    let real = seed_product(&pool, cat.id, Decimal::new(4990, 2)).await;

    let result = order::place_order(
        &pool,
        OrderCreate {
            user_id: Some(user.id),
            address: Some("Calle Mayor 1".into()),
            status: None,
            items: vec![
                OrderItemRequest {
                    product_id: real.id,
                    quantity: 1,
                },
                OrderItemRequest {
                    product_id: snowflake_id(), // no such product
                    quantity: 1,
                },
            ],
        },
    )
    .await;
    assert!(matches!(result, Err(RepoError::NotFound(_))));

    // Nothing persisted: neither the header nor the valid first line
    let orders = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM store_order WHERE user_id = $1",
    )
    .bind(user.id)
    .fetch_one(&pool)
    .await
    .expect("count orders");
    assert_eq!(orders, 0);

    let lines = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM order_product WHERE product_id = $1",
    )
    .bind(real.id)
    .fetch_one(&pool)
    .await
    .expect("count lines");
    assert_eq!(lines, 0);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_place_order_validation() {
    let pool = connect().await;
    let user = seed_user(&pool).await;
    let cat = seed_category(&pool).await;
    let p = seed_product(&pool, cat.id, Decimal::new(1000, 2)).await;

    // Empty item list
    let empty = order::place_order(
        &pool,
        OrderCreate {
            user_id: Some(user.id),
            address: Some("Somewhere 5".into()),
            status: None,
            items: vec![],
        },
    )
    .await;
    assert!(matches!(empty, Err(RepoError::Validation(_))));

    // Unknown status
    let bad_status = order::place_order(
        &pool,
        OrderCreate {
            user_id: Some(user.id),
            address: Some("Somewhere 5".into()),
            status: Some("teleported".into()),
            items: vec![OrderItemRequest {
                product_id: p.id,
                quantity: 1,
            }],
        },
    )
    .await;
    assert!(matches!(bad_status, Err(RepoError::Validation(_))));

    // Zero quantity
    let zero_qty = order::place_order(
        &pool,
        OrderCreate {
            user_id: Some(user.id),
            address: Some("Somewhere 5".into()),
            status: None,
            items: vec![OrderItemRequest {
                product_id: p.id,
                quantity: 0,
            }],
        },
    )
    .await;
    assert!(matches!(zero_qty, Err(RepoError::Validation(_))));

    // Missing user
    let no_user = order::place_order(
        &pool,
        OrderCreate {
            user_id: Some(snowflake_id()),
            address: Some("Somewhere 5".into()),
            status: None,
            items: vec![OrderItemRequest {
                product_id: p.id,
                quantity: 1,
            }],
        },
    )
    .await;
    assert!(matches!(no_user, Err(RepoError::NotFound(_))));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_cart_item_quantity_rules() {
    let pool = connect().await;
    let user = seed_user(&pool).await;
    let cat = seed_category(&pool).await;
    let p = seed_product(&pool, cat.id, Decimal::new(500, 2)).await;
    let cart = cart::create(
        &pool,
        CartCreate {
            user_id: Some(user.id),
        },
    )
    .await
    .expect("cart");

    // Default quantity is 1
    let item = cart_item::create(
        &pool,
        CartItemCreate {
            cart_id: Some(cart.id),
            product_id: Some(p.id),
            quantity: None,
        },
    )
    .await
    .expect("cart item");
    assert_eq!(item.quantity, 1);

    // Zero and negative are rejected
    for bad in [0, -1] {
        let result = cart_item::update(&pool, item.id, CartItemUpdate {
            quantity: Some(bad),
        })
        .await;
        assert!(matches!(result, Err(RepoError::Validation(_))), "quantity {bad}");
    }

    // Missing quantity is rejected
    let missing = cart_item::update(&pool, item.id, CartItemUpdate { quantity: None }).await;
    assert!(matches!(missing, Err(RepoError::Validation(_))));

    // 1 and 1000 are both fine
    let one = cart_item::update(&pool, item.id, CartItemUpdate { quantity: Some(1) })
        .await
        .expect("quantity 1");
    assert_eq!(one.quantity, 1);
    let lots = cart_item::update(&pool, item.id, CartItemUpdate {
        quantity: Some(1000),
    })
    .await
    .expect("quantity 1000");
    assert_eq!(lots.quantity, 1000);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_cart_item_duplicates_and_delete() {
    let pool = connect().await;
    let user = seed_user(&pool).await;
    let cat = seed_category(&pool).await;
    let p = seed_product(&pool, cat.id, Decimal::new(500, 2)).await;
    let cart = cart::create(
        &pool,
        CartCreate {
            user_id: Some(user.id),
        },
    )
    .await
    .expect("cart");

    // The same (cart, product) pair may appear in two rows
    let first = cart_item::create(
        &pool,
        CartItemCreate {
            cart_id: Some(cart.id),
            product_id: Some(p.id),
            quantity: Some(1),
        },
    )
    .await
    .expect("first row");
    let second = cart_item::create(
        &pool,
        CartItemCreate {
            cart_id: Some(cart.id),
            product_id: Some(p.id),
            quantity: Some(2),
        },
    )
    .await
    .expect("second row");
    assert_ne!(first.id, second.id);

    // Delete returns the removed row, deleting again is NotFound
    let removed = cart_item::delete(&pool, second.id).await.expect("delete");
    assert_eq!(removed.quantity, 2);
    let again = cart_item::delete(&pool, second.id).await;
    assert!(matches!(again, Err(RepoError::NotFound(_))));

    // Unknown cart or product on create
    let no_cart = cart_item::create(
        &pool,
        CartItemCreate {
            cart_id: Some(snowflake_id()),
            product_id: Some(p.id),
            quantity: None,
        },
    )
    .await;
    assert!(matches!(no_cart, Err(RepoError::NotFound(_))));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_offer_product_association() {
    let pool = connect().await;
    let cat = seed_category(&pool).await;
    let p = seed_product(&pool, cat.id, Decimal::new(2500, 2)).await;

    let now = now_millis();
    let created = offer::create(
        &pool,
        OfferCreate {
            name: Some(format!("summer-{}", snowflake_id())),
            description: None,
            discount_type: Some("PERCENTAGE".into()),
            discount_value: Some(Decimal::new(10, 0)),
            starts_at: Some(now),
            ends_at: Some(now + 86_400_000),
            is_active: None,
        },
    )
    .await
    .expect("offer");

    // Empty list is a no-op, not an error
    let detail = offer::add_products(&pool, created.id, &[])
        .await
        .expect("empty patch");
    assert!(detail.products.is_empty());

    // Adding the same product twice keeps a single association
    offer::add_products(&pool, created.id, &[p.id])
        .await
        .expect("first add");
    let detail = offer::add_products(&pool, created.id, &[p.id])
        .await
        .expect("second add");
    assert_eq!(detail.products.len(), 1);
    assert_eq!(detail.products[0].id, p.id);

    // Unknown product fails and leaves the association untouched
    let bad = offer::add_products(&pool, created.id, &[snowflake_id()]).await;
    assert!(matches!(bad, Err(RepoError::NotFound(_))));
    let detail = offer::find_detail(&pool, created.id).await.expect("detail");
    assert_eq!(detail.products.len(), 1);

    // Unknown offer is NotFound even with an empty list
    let no_offer = offer::add_products(&pool, snowflake_id(), &[]).await;
    assert!(matches!(no_offer, Err(RepoError::NotFound(_))));
}
