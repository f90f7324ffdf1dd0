//! Domain entities and the shapes they take on the wire. The same structs back
//! sqlx rows, REST JSON, and GraphQL objects.

use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::pagination::PageInfo;

#[derive(Debug, Clone, Serialize, FromRow, SimpleObject)]
#[graphql(complex, rename_fields = "snake_case")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow, SimpleObject)]
#[graphql(complex, rename_fields = "snake_case")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct DeletedProduct {
    pub deleted: bool,
    pub product_id: i64,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct ProductEdge {
    pub cursor: String,
    #[graphql(complexity = "crate::graphql::complexity::edge_node(child_complexity)")]
    pub node: Product,
}

/// One page of a user's products, keyset-paginated.
#[derive(Debug, Clone, Serialize, SimpleObject)]
#[graphql(name = "Products", rename_fields = "snake_case")]
pub struct ProductConnection {
    pub edges: Vec<ProductEdge>,
    pub page_info: PageInfo,
}
