//! # reportboardd — report landing page daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Prepare read-only access to the report store
//! - Construct the repository (adapter) and inject it into the report service
//! - Build the axum router and serve it
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer. No domain logic belongs here.

mod config;

use reportboard_adapter_http_axum::state::AppState;
use reportboard_adapter_storage_sqlite_sqlx::{Config as DbConfig, SqliteReportRepository};
use reportboard_app::services::report_service::ReportService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Report store, opened per request
    let db = DbConfig::read_only(config.database_url())
        .build()
        .inspect_err(|err| {
            tracing::error!(error = %err, url = config.database_url(), "invalid report store url");
        })?;
    if let Err(err) = db.ping().await {
        tracing::warn!(error = %err, url = config.database_url(), "report store not reachable yet");
    }

    // Services
    let report_service = ReportService::new(SqliteReportRepository::new(db));

    // HTTP
    let state = AppState::new(report_service);
    let app = reportboard_adapter_http_axum::router::build(state, config.site.static_dir.clone());

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "reportboardd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("reportboardd stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
