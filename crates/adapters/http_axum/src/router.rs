//! Axum router assembly.

use std::path::PathBuf;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use reportboard_app::ports::ReportRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the landing page at `/`. When `static_dir` is set, every other
/// path falls through to the static report site in that directory
/// (`reports/*_11d.html`, `glossary.html`, `dashboard/`, …).
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<RR>(state: AppState<RR>, static_dir: Option<PathBuf>) -> Router
where
    RR: ReportRepository + Send + Sync + 'static,
{
    let router = Router::new()
        .route("/health", get(health_check))
        .merge(crate::dashboard::routes())
        .with_state(state);

    let router = match static_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "serving static report site");
            router.fallback_service(ServeDir::new(dir))
        }
        None => router,
    };

    router.layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}
