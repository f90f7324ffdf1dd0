//! Server entry point: config, pool, schema migration, routes.

use std::sync::Arc;

use storefront::{app_router, db, AppState, Environment, PostgresService, Service};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("storefront=info".parse()?),
        )
        .init();

    let env = Environment::load()?;
    let pool = db::connect(&env).await?;
    db::migrate(&pool).await?;

    let service: Arc<dyn Service> = Arc::new(PostgresService::new(pool));
    let app = app_router(AppState::new(service));

    let listener = TcpListener::bind(env.server_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
