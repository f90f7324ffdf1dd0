//! HTTP handlers for the REST and GraphQL endpoints.

pub mod graph;
pub mod product;
pub mod user;
