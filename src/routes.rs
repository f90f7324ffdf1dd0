//! Route table. All state flows through `AppState`.

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::{graph, product, user};
use crate::state::AppState;

const BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/products",
            post(product::create_product).get(product::list_products),
        )
        .route(
            "/products/{id}",
            get(product::get_product)
                .put(product::update_product)
                .delete(product::delete_product),
        )
        .route("/users", post(user::create_user))
        .route("/users/{id}", get(user::get_user))
        .route("/user/{id}/products", get(user::user_products))
        .route("/graph", post(graph::graph).get(graph::graphiql))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .with_state(state)
}
