use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Before any fallible operation so startup errors are reported in color
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!(
        database = config.mongodb.database(),
        collection = %config.collection,
        "Connecting to MongoDB"
    );

    let mongo = database::mongodb::connect_from_config_with_retry(&config.mongodb, None)
        .await
        .map_err(|e| eyre::eyre!("MongoDB connection failed: {}", e))?;

    let state = AppState::new(config, mongo);

    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes, &state.config.environment)?;

    // /health: liveness with app name/version
    // /ready: MongoDB ping
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    let shutdown_timeout = state.config.server.shutdown_timeout;
    info!(
        "Starting {} v{} (shutdown timeout {:?})",
        state.config.app.name, state.config.app.version, shutdown_timeout
    );

    let server = state.config.server.clone();
    create_production_app(app, &server, shutdown_timeout, async move {
        info!("Shutting down: closing MongoDB client");
        state.mongo.shutdown().await;
        info!("MongoDB client closed");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Protein API shutdown complete");
    Ok(())
}
