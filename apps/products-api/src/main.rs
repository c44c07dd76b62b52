//! Products API - REST server for the product catalog

use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod seed;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to PostgreSQL at {}", config.database.url());

    let db =
        database::postgres::connect_from_config_with_retry(config.database.clone(), None).await?;

    database::postgres::run_migrations::<migration::Migrator>(&db, "products_api").await?;

    // Initialize the application state
    let state = AppState {
        config: config.clone(),
        db,
    };

    // Bootstrap row, inserted before the server accepts traffic
    seed::run(&state).await?;

    // Build REST router
    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router
        .merge(axum_helpers::health_router(state.config.app))
        .merge(api::health::router(state.clone()));

    info!("Starting products API on port {}", state.config.server.port);

    // Run REST server with graceful shutdown
    let db_for_cleanup = state.db.clone();
    axum_helpers::create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing PostgreSQL connections");
            if let Err(e) = db_for_cleanup.close().await {
                tracing::warn!("Error closing database connection: {:?}", e);
            }
        },
    )
    .await?;

    info!("Products API shutdown complete");
    Ok(())
}
