//! Report service — the landing page's "latest reports" use-case.

use reportboard_domain::error::BoardError;
use reportboard_domain::report::ReportSummary;

use crate::ports::ReportRepository;

/// Number of reports listed on the landing page.
pub const RECENT_REPORTS_LIMIT: usize = 5;

/// Application service for reading report summaries.
pub struct ReportService<R> {
    repo: R,
    limit: usize,
}

impl<R: ReportRepository> ReportService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            limit: RECENT_REPORTS_LIMIT,
        }
    }

    /// The most recent reports, newest first, at most [`RECENT_REPORTS_LIMIT`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Storage`] when the repository cannot be read.
    pub async fn latest_reports(&self) -> Result<Vec<ReportSummary>, BoardError> {
        let mut reports = self
            .repo
            .fetch_recent_reports(self.limit)
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "unable to fetch recent reports"))?;
        reports.truncate(self.limit);
        tracing::debug!(count = reports.len(), "fetched recent reports");
        Ok(reports)
    }
}
