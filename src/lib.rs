//! Storefront: products and users CRUD backend with REST and GraphQL APIs.

pub mod config;
pub mod db;
pub mod error;
pub mod graphql;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod requests;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;

pub use config::Environment;
pub use error::AppError;
pub use graphql::{build_schema, AppSchema};
pub use routes::app_router;
pub use service::{PostgresService, Service};
pub use state::AppState;
