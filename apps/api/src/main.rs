use axum_helpers::server::{close_postgres, create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Error reporting goes in first so even config failures print readable traces.
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to PostgreSQL");
    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name)
        .await
        .map_err(|e| eyre::eyre!("Migration failed: {}", e))?;

    let state = AppState { config, db };

    // Domain routers capture their state here; the shared middleware stack
    // and the docs UI come from create_router.
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api::routes(&state)).await?;

    // /health answers from static app info; /ready round-trips the database.
    let app = router
        .merge(health_router(state.config.app.clone()))
        .merge(api::ready_router(state.clone()));

    info!(
        "Starting {} (shutdown timeout {:?})",
        state.config.app.name, SHUTDOWN_TIMEOUT
    );

    create_production_app(app, &state.config.server, SHUTDOWN_TIMEOUT, async move {
        close_postgres(state.db, state.config.app.name).await;
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Shutdown complete");
    Ok(())
}
