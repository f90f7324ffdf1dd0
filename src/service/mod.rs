//! The service seam between transports (REST, GraphQL) and storage. Both
//! surfaces talk to `dyn Service`, which is what tests mock.

mod postgres;

pub use postgres::PostgresService;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{DeletedProduct, Product, ProductConnection, User};
use crate::pagination::Pagination;
use crate::requests::{
    CreateProductRequest, CreateUserRequest, ListProductsQuery, UpdateProductRequest,
    UserProductsQuery,
};

#[async_trait]
pub trait Service: Send + Sync {
    async fn create_product(&self, req: CreateProductRequest) -> Result<Product, AppError>;
    async fn get_product(&self, id: i64) -> Result<Product, AppError>;
    async fn list_products(
        &self,
        query: ListProductsQuery,
    ) -> Result<(Vec<Product>, Pagination), AppError>;
    async fn update_product(&self, req: UpdateProductRequest) -> Result<Product, AppError>;
    async fn delete_product(&self, id: i64) -> Result<DeletedProduct, AppError>;
    async fn create_user(&self, req: CreateUserRequest) -> Result<User, AppError>;
    async fn get_user(&self, id: i64) -> Result<User, AppError>;
    async fn user_products(
        &self,
        user_id: i64,
        query: UserProductsQuery,
    ) -> Result<ProductConnection, AppError>;
}
