//! Shared test support: a canned, call-counting `Service` implementation so
//! REST and GraphQL surfaces can be driven without a database.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use storefront::error::AppError;
use storefront::models::{DeletedProduct, Product, ProductConnection, ProductEdge, User};
use storefront::pagination::{decode_cursor, encode_cursor, PageInfo, Pagination, DEFAULT_FIRST};
use storefront::requests::{
    CreateProductRequest, CreateUserRequest, ListProductsQuery, UpdateProductRequest,
    UserProductsQuery,
};
use storefront::service::Service;

/// Ids at or above this are treated as absent rows.
pub const MISSING_ID: i64 = 404;

pub const MOCK_TOTAL_PRODUCTS: i64 = 23;

#[derive(Default)]
pub struct Calls {
    pub create_product: AtomicUsize,
    pub get_product: AtomicUsize,
    pub list_products: AtomicUsize,
    pub update_product: AtomicUsize,
    pub delete_product: AtomicUsize,
    pub create_user: AtomicUsize,
    pub get_user: AtomicUsize,
    pub user_products: AtomicUsize,
}

impl Calls {
    pub fn total(&self) -> usize {
        self.create_product.load(Ordering::SeqCst)
            + self.get_product.load(Ordering::SeqCst)
            + self.list_products.load(Ordering::SeqCst)
            + self.update_product.load(Ordering::SeqCst)
            + self.delete_product.load(Ordering::SeqCst)
            + self.create_user.load(Ordering::SeqCst)
            + self.get_user.load(Ordering::SeqCst)
            + self.user_products.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
pub struct MockService {
    pub calls: Calls,
}

pub fn fixed_time(offset_secs: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 4, 5, 6, 0, 0).unwrap() + chrono::Duration::seconds(offset_secs)
}

pub fn test_product(id: i64) -> Product {
    Product {
        id,
        name: "Test Product".into(),
        price: 100,
        user_id: 1,
        created_at: fixed_time(0),
    }
}

pub fn test_user(id: i64) -> User {
    User {
        id,
        name: "Test User".into(),
        email: "test@example.com".into(),
        created_at: fixed_time(0),
    }
}

#[async_trait]
impl Service for MockService {
    async fn create_product(&self, req: CreateProductRequest) -> Result<Product, AppError> {
        self.calls.create_product.fetch_add(1, Ordering::SeqCst);
        Ok(Product {
            id: 1,
            name: req.name,
            price: req.price,
            user_id: req.user_id,
            created_at: fixed_time(0),
        })
    }

    async fn get_product(&self, id: i64) -> Result<Product, AppError> {
        self.calls.get_product.fetch_add(1, Ordering::SeqCst);
        if id >= MISSING_ID {
            return Err(AppError::product_not_found(id));
        }
        Ok(test_product(id))
    }

    async fn list_products(
        &self,
        query: ListProductsQuery,
    ) -> Result<(Vec<Product>, Pagination), AppError> {
        self.calls.list_products.fetch_add(1, Ordering::SeqCst);
        let pagination = Pagination::new(
            "/products",
            MOCK_TOTAL_PRODUCTS,
            query.page.unwrap_or(1),
            query.per_page.unwrap_or(10),
        );
        let count = if pagination.to == 0 {
            0
        } else {
            pagination.to - pagination.from + 1
        };
        let products = (0..count).map(|i| test_product(pagination.from + i)).collect();
        Ok((products, pagination))
    }

    async fn update_product(&self, req: UpdateProductRequest) -> Result<Product, AppError> {
        self.calls.update_product.fetch_add(1, Ordering::SeqCst);
        if req.id >= MISSING_ID {
            return Err(AppError::product_not_found(req.id));
        }
        Ok(Product {
            id: req.id,
            name: req.name,
            price: req.price,
            user_id: 1,
            created_at: fixed_time(0),
        })
    }

    async fn delete_product(&self, id: i64) -> Result<DeletedProduct, AppError> {
        self.calls.delete_product.fetch_add(1, Ordering::SeqCst);
        if id >= MISSING_ID {
            return Err(AppError::product_not_found(id));
        }
        Ok(DeletedProduct {
            deleted: true,
            product_id: id,
        })
    }

    async fn create_user(&self, req: CreateUserRequest) -> Result<User, AppError> {
        self.calls.create_user.fetch_add(1, Ordering::SeqCst);
        Ok(User {
            id: 1,
            name: req.name,
            email: req.email,
            created_at: fixed_time(0),
        })
    }

    async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.calls.get_user.fetch_add(1, Ordering::SeqCst);
        if id >= MISSING_ID {
            return Err(AppError::user_not_found(id));
        }
        Ok(test_user(id))
    }

    async fn user_products(
        &self,
        user_id: i64,
        query: UserProductsQuery,
    ) -> Result<ProductConnection, AppError> {
        self.calls.user_products.fetch_add(1, Ordering::SeqCst);
        if user_id >= MISSING_ID {
            return Err(AppError::user_not_found(user_id));
        }
        // Same contract as the real service: a bad cursor is the caller's
        // problem.
        if let Some(cursor) = &query.after {
            decode_cursor(cursor)?;
        }
        let first = query.first.unwrap_or(DEFAULT_FIRST).min(3);
        let edges: Vec<ProductEdge> = (0..first)
            .map(|i| {
                let mut node = test_product(i + 1);
                node.user_id = user_id;
                node.created_at = fixed_time(i);
                ProductEdge {
                    cursor: encode_cursor(node.created_at),
                    node,
                }
            })
            .collect();
        let page_info = if edges.is_empty() {
            PageInfo::empty()
        } else {
            PageInfo {
                start_cursor: edges[0].cursor.clone(),
                end_cursor: edges[edges.len() - 1].cursor.clone(),
                has_next_page: true,
            }
        };
        Ok(ProductConnection { edges, page_info })
    }
}
