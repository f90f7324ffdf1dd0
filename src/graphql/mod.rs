//! GraphQL schema: queries, mutations, and the static complexity policy that
//! rejects over-complex queries before execution.

pub mod complexity;
mod resolvers;

pub use resolvers::{MutationRoot, QueryRoot};

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};

use crate::service::Service;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(service: Arc<dyn Service>) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .limit_complexity(complexity::COMPLEXITY_LIMIT)
        .finish()
}
