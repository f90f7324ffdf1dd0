//! Database pool setup and startup DDL.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Environment;
use crate::error::AppError;

pub async fn connect(env: &Environment) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&env.database_url())
        .await?;
    Ok(pool)
}

/// Idempotent schema setup: both tables plus the index backing keyset
/// pagination over a user's products.
pub async fn migrate(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            price BIGINT NOT NULL,
            user_id BIGINT NOT NULL REFERENCES users (id),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS products_user_id_created_at_idx \
         ON products (user_id, created_at)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
