//! # incidenthubd — incidenthub daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize tracing
//! - Initialize the `SQLite` connection pool and run migrations; a failed
//!   initial connection aborts startup with a non-zero exit
//! - Construct the repository implementation (adapter)
//! - Construct the application service, injecting the repository via the
//!   port trait
//! - Build the axum router, injecting the application service
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;

use incidenthub_adapter_http_axum::router;
use incidenthub_adapter_http_axum::state::AppState;
use incidenthub_adapter_storage_sqlite_sqlx::{Config as StorageConfig, SqliteIncidentRepository};
use incidenthub_app::services::incident_service::IncidentService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Database. Storage must be reachable before the server starts listening.
    let db = StorageConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await
    .context("failed to connect to the database")?;
    tracing::info!(url = %config.database_url(), "database connection established");

    // Repository & service
    let incident_repo = SqliteIncidentRepository::new(db.pool().clone());
    let incident_service = IncidentService::new(incident_repo);

    // HTTP
    let state = AppState::new(incident_service);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(%bind_addr, "incidenthubd listening");

    axum::serve(listener, app).await?;

    Ok(())
}
