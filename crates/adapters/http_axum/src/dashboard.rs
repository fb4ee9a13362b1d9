//! Server-side rendered HTML landing page (no JavaScript).

#[allow(clippy::missing_errors_doc)]
pub mod home;

use axum::Router;
use axum::routing::get;

use reportboard_app::ports::ReportRepository;

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<RR>() -> Router<AppState<RR>>
where
    RR: ReportRepository + Send + Sync + 'static,
{
    Router::new().route("/", get(home::index::<RR>))
}
