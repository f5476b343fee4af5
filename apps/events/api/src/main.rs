use axum::Router;
use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_events::{EventService, InMemoryEventRepository, handlers};
use tracing::info;

mod config;
mod openapi;

use config::Config;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by `create_router`.
fn routes() -> Router {
    let service = EventService::new(InMemoryEventRepository::new());

    Router::new().nest("/events", handlers::router(service))
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let router = create_router::<openapi::ApiDoc>(routes()).merge(health_router(config.app));

    info!(
        "Starting {} v{} on {}",
        config.app.name,
        config.app.version,
        config.server.address()
    );

    create_app(router, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("{} shutdown complete", config.app.name);
    Ok(())
}
