//! Parameterized queries against PostgreSQL. Every function takes the pool and
//! returns typed rows; callers decide what a missing row means.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::error::AppError;
use crate::models::{Product, User};

pub async fn create_product(
    pool: &PgPool,
    name: &str,
    price: i64,
    user_id: i64,
) -> Result<Product, AppError> {
    tracing::debug!(name, price, user_id, "insert product");
    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO products (name, price, user_id) VALUES ($1, $2, $3) \
         RETURNING id, name, price, user_id, created_at",
    )
    .bind(name)
    .bind(price)
    .bind(user_id)
    .fetch_one(pool)
    .await?;
    Ok(product)
}

pub async fn get_product(pool: &PgPool, id: i64) -> Result<Option<Product>, AppError> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT id, name, price, user_id, created_at FROM products WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(product)
}

pub async fn count_products(pool: &PgPool) -> Result<i64, AppError> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;
    Ok(total)
}

pub async fn list_products(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<Product>, AppError> {
    tracing::debug!(limit, offset, "list products");
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, price, user_id, created_at FROM products \
         ORDER BY id LIMIT $1 OFFSET $2",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    Ok(products)
}

pub async fn update_product(
    pool: &PgPool,
    id: i64,
    name: &str,
    price: i64,
) -> Result<Option<Product>, AppError> {
    tracing::debug!(id, name, price, "update product");
    let product = sqlx::query_as::<_, Product>(
        "UPDATE products SET name = $2, price = $3 WHERE id = $1 \
         RETURNING id, name, price, user_id, created_at",
    )
    .bind(id)
    .bind(name)
    .bind(price)
    .fetch_optional(pool)
    .await?;
    Ok(product)
}

pub async fn delete_product(pool: &PgPool, id: i64) -> Result<Option<i64>, AppError> {
    tracing::debug!(id, "delete product");
    let deleted: Option<i64> = sqlx::query_scalar("DELETE FROM products WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(deleted)
}

pub async fn create_user(pool: &PgPool, name: &str, email: &str) -> Result<User, AppError> {
    tracing::debug!(name, email, "insert user");
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (name, email) VALUES ($1, $2) \
         RETURNING id, name, email, created_at",
    )
    .bind(name)
    .bind(email)
    .fetch_one(pool)
    .await?;
    Ok(user)
}

pub async fn get_user(pool: &PgPool, id: i64) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, name, email, created_at FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

/// One row of a keyset page. `next_exists` is the same for every row of the
/// page and says whether any row lies beyond it.
#[derive(Debug, FromRow)]
pub struct ProductPageRow {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub next_exists: bool,
}

impl ProductPageRow {
    pub fn into_product(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            price: self.price,
            user_id: self.user_id,
            created_at: self.created_at,
        }
    }
}

/// Fetch `first` of a user's products created strictly after `after`, oldest
/// first, together with the exists flag that drives `has_next_page`.
pub async fn user_products_page(
    pool: &PgPool,
    user_id: i64,
    after: DateTime<Utc>,
    first: i64,
) -> Result<Vec<ProductPageRow>, AppError> {
    tracing::debug!(user_id, %after, first, "user products page");
    let rows = sqlx::query_as::<_, ProductPageRow>(
        r#"
        WITH page AS (
            SELECT id, name, price, user_id, created_at
            FROM products
            WHERE user_id = $1 AND created_at > $2
            ORDER BY created_at ASC
            LIMIT $3
        )
        SELECT page.*,
               EXISTS (
                   SELECT 1 FROM products p
                   WHERE p.user_id = $1
                     AND p.created_at > (SELECT MAX(created_at) FROM page)
               ) AS next_exists
        FROM page
        ORDER BY created_at ASC
        "#,
    )
    .bind(user_id)
    .bind(after)
    .bind(first)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
