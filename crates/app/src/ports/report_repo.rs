//! Report repository port — read access to stored report summaries.

use std::future::Future;

use reportboard_domain::error::BoardError;
use reportboard_domain::report::ReportSummary;

/// Read-only access to [`ReportSummary`] rows.
pub trait ReportRepository {
    /// Get at most `limit` reports, ordered by report date newest-first.
    fn fetch_recent_reports(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<ReportSummary>, BoardError>> + Send;
}
