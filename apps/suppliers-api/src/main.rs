//! Suppliers API - REST server for supplier records

use axum_helpers::server::{close_postgres, create_production_app};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config_with_retry, run_migrations};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = match &config.database {
        Some(database) => {
            info!("Connecting to PostgreSQL");
            let db = connect_from_config_with_retry(database.clone(), None)
                .await
                .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

            if config.run_migrations {
                run_migrations::<migration::Migrator>(&db, config.app.name).await?;
            }
            Some(db)
        }
        None => {
            info!("Using in-memory supplier storage; data is lost on restart");
            None
        }
    };

    let state = AppState { config, db };
    let app = api::app(&state)?;

    info!(
        "Starting {} v{} on port {} (30s graceful shutdown)",
        state.config.app.name, state.config.app.version, state.config.server.port
    );

    let server = state.config.server.clone();
    create_production_app(app, &server, Duration::from_secs(30), async move {
        if let Some(db) = state.db {
            info!("Shutting down: closing database connections");
            close_postgres(db, "suppliers").await;
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Suppliers API shutdown complete");
    Ok(())
}
