//! Report Summary — one row of daily market-report metadata.

/// Directory, relative to the landing page, that holds the generated reports.
pub const REPORTS_DIR: &str = "reports";

/// Suffix of every generated report file (11-dimension macro model).
pub const REPORT_FILE_SUFFIX: &str = "_11d.html";

/// Aggregated metadata of one daily report.
///
/// Rows are produced by an external report job; this type is read-only
/// from the page's point of view and enforces no invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    /// Literal `report_date` value from the store (e.g. `2026-01-10`).
    pub date: String,
    /// Composite rating, nominally 0–100.
    pub overall_score: f64,
    /// Short recommendation label (free-form text).
    pub investment_signal: String,
}

impl ReportSummary {
    #[must_use]
    pub fn new(
        date: impl Into<String>,
        overall_score: f64,
        investment_signal: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            overall_score,
            investment_signal: investment_signal.into(),
        }
    }

    /// Score with exactly one decimal place, e.g. `62.0`.
    ///
    /// Halves round away from zero (`62.25` gives `62.3`), unlike the
    /// round-half-to-even of `{:.1}` alone.
    #[must_use]
    pub fn formatted_score(&self) -> String {
        format!("{:.1}", (self.overall_score * 10.0).round() / 10.0)
    }

    /// File name of the full report for this date, inside [`REPORTS_DIR`].
    #[must_use]
    pub fn report_file_name(&self) -> String {
        format!("{}{REPORT_FILE_SUFFIX}", self.date)
    }
}
