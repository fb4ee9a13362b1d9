//! `SQLite` implementation of [`ReportRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{Connection, FromRow, Row};

use reportboard_app::ports::ReportRepository;
use reportboard_domain::error::BoardError;
use reportboard_domain::report::ReportSummary;

use crate::connection::Database;
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`ReportSummary`].
struct Wrapper(ReportSummary);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let date: String = row.try_get("report_date")?;
        let overall_score: f64 = row.try_get("overall_score")?;
        let investment_signal: String = row.try_get("investment_signal")?;

        Ok(Self(ReportSummary {
            date,
            overall_score,
            investment_signal,
        }))
    }
}

// The table is written by the report job, so column affinities are not
// trusted: scores may be stored as integers and signals may be NULL.
// Rows without a date cannot be linked to a report file and are skipped.
const SELECT_RECENT: &str = r"
    SELECT CAST(report_date AS TEXT) AS report_date,
           COALESCE(CAST(overall_score AS REAL), 0.0) AS overall_score,
           COALESCE(CAST(investment_signal AS TEXT), '') AS investment_signal
      FROM daily_reports
     WHERE report_date IS NOT NULL
     ORDER BY daily_reports.report_date DESC
     LIMIT ?
";

/// `SQLite`-backed report repository.
///
/// Every call opens its own connection and closes it before returning.
pub struct SqliteReportRepository {
    db: Database,
}

impl SqliteReportRepository {
    /// Create a new repository reading from the given database.
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl ReportRepository for SqliteReportRepository {
    fn fetch_recent_reports(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<ReportSummary>, BoardError>> + Send {
        let db = self.db.clone();
        async move {
            let limit = i64::try_from(limit).unwrap_or(i64::MAX);
            let mut conn = db.connect().await?;

            let rows: Result<Vec<Wrapper>, sqlx::Error> = sqlx::query_as(SELECT_RECENT)
                .bind(limit)
                .fetch_all(&mut conn)
                .await;

            if let Err(err) = conn.close().await {
                tracing::warn!(error = %err, "failed to close report store connection");
            }

            let rows = rows.map_err(StorageError::from)?;
            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
