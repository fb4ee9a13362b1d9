//! Shared application state for axum handlers.

use std::sync::Arc;

use reportboard_app::ports::ReportRepository;
use reportboard_app::services::report_service::ReportService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need
/// to be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<RR> {
    /// Report read service.
    pub report_service: Arc<ReportService<RR>>,
}

impl<RR> Clone for AppState<RR> {
    fn clone(&self) -> Self {
        Self {
            report_service: Arc::clone(&self.report_service),
        }
    }
}

impl<RR> AppState<RR>
where
    RR: ReportRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(report_service: ReportService<RR>) -> Self {
        Self {
            report_service: Arc::new(report_service),
        }
    }
}
