//! Shared application state for all routes.

use std::sync::Arc;

use crate::graphql::AppSchema;
use crate::service::Service;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn Service>,
    pub schema: AppSchema,
}

impl AppState {
    pub fn new(service: Arc<dyn Service>) -> Self {
        let schema = crate::graphql::build_schema(service.clone());
        AppState { service, schema }
    }
}
