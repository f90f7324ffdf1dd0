//! PostgreSQL-backed implementation of the service seam.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::{DeletedProduct, Product, ProductConnection, ProductEdge, User};
use crate::pagination::{decode_cursor, encode_cursor, PageInfo, Pagination, DEFAULT_FIRST};
use crate::repository;
use crate::requests::{
    CreateProductRequest, CreateUserRequest, ListProductsQuery, UpdateProductRequest,
    UserProductsQuery,
};
use crate::service::Service;

const PRODUCTS_BASE_URL: &str = "/products";

#[derive(Clone)]
pub struct PostgresService {
    pool: PgPool,
}

impl PostgresService {
    pub fn new(pool: PgPool) -> Self {
        PostgresService { pool }
    }
}

#[async_trait]
impl Service for PostgresService {
    async fn create_product(&self, req: CreateProductRequest) -> Result<Product, AppError> {
        repository::create_product(&self.pool, &req.name, req.price, req.user_id).await
    }

    async fn get_product(&self, id: i64) -> Result<Product, AppError> {
        repository::get_product(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::product_not_found(id))
    }

    async fn list_products(
        &self,
        query: ListProductsQuery,
    ) -> Result<(Vec<Product>, Pagination), AppError> {
        let total = repository::count_products(&self.pool).await?;
        let pagination = Pagination::new(
            PRODUCTS_BASE_URL,
            total,
            query.page.unwrap_or(1),
            query.per_page.unwrap_or(10),
        );
        let (limit, offset) = pagination.limit_offset();
        let products = repository::list_products(&self.pool, limit, offset).await?;
        Ok((products, pagination))
    }

    async fn update_product(&self, req: UpdateProductRequest) -> Result<Product, AppError> {
        // Fetch first so a missing row reads as not-found, not as a no-op.
        let existing = repository::get_product(&self.pool, req.id)
            .await?
            .ok_or_else(|| AppError::product_not_found(req.id))?;
        repository::update_product(&self.pool, existing.id, &req.name, req.price)
            .await?
            .ok_or_else(|| AppError::product_not_found(req.id))
    }

    async fn delete_product(&self, id: i64) -> Result<DeletedProduct, AppError> {
        let existing = repository::get_product(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::product_not_found(id))?;
        let deleted_id = repository::delete_product(&self.pool, existing.id)
            .await?
            .ok_or_else(|| AppError::product_not_found(id))?;
        Ok(DeletedProduct {
            deleted: true,
            product_id: deleted_id,
        })
    }

    async fn create_user(&self, req: CreateUserRequest) -> Result<User, AppError> {
        repository::create_user(&self.pool, &req.name, &req.email).await
    }

    async fn get_user(&self, id: i64) -> Result<User, AppError> {
        repository::get_user(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::user_not_found(id))
    }

    async fn user_products(
        &self,
        user_id: i64,
        query: UserProductsQuery,
    ) -> Result<ProductConnection, AppError> {
        let user = repository::get_user(&self.pool, user_id)
            .await?
            .ok_or_else(|| AppError::user_not_found(user_id))?;

        // No cursor means the very first page. A cursor that does not decode
        // is the caller's error, never silently remapped.
        let after = match &query.after {
            Some(cursor) => decode_cursor(cursor)?,
            None => DateTime::<Utc>::UNIX_EPOCH,
        };
        let first = query.first.unwrap_or(DEFAULT_FIRST);

        let rows = repository::user_products_page(&self.pool, user.id, after, first).await?;
        if rows.is_empty() {
            return Ok(ProductConnection {
                edges: Vec::new(),
                page_info: PageInfo::empty(),
            });
        }

        let has_next_page = rows.last().map(|r| r.next_exists).unwrap_or(false);
        let edges: Vec<ProductEdge> = rows
            .into_iter()
            .map(|row| {
                let node = row.into_product();
                ProductEdge {
                    cursor: encode_cursor(node.created_at),
                    node,
                }
            })
            .collect();

        let page_info = PageInfo {
            start_cursor: edges[0].cursor.clone(),
            end_cursor: edges[edges.len() - 1].cursor.clone(),
            has_next_page,
        };

        Ok(ProductConnection { edges, page_info })
    }
}
