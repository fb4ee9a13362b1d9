//! Dashboard home page — the latest reports and links to the static site.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use reportboard_app::ports::ReportRepository;
use reportboard_domain::report::{REPORTS_DIR, ReportSummary};
use reportboard_domain::time;

use crate::error::DashboardError;
use crate::state::AppState;

/// A fixed link to a page that lives next to the landing page.
#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    /// Section heading.
    pub section: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Relative link target.
    pub href: &'static str,
    /// Button text.
    pub label: &'static str,
}

/// Glossary, data dashboard and external analysis, in display order.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        section: "📚 专业术语解释",
        title: "市场报告术语指南",
        description: "SOFR、ERP、MOVE、TGA余额、日元套利交易等专业概念详解",
        href: "glossary.html",
        label: "查看术语解释",
    },
    NavLink {
        section: "📊 数据看板",
        title: "市场报告 & OpenViking记忆系统",
        description: "实时数据统计和趋势分析",
        href: "dashboard/",
        label: "查看数据看板",
    },
    NavLink {
        section: "🤖 OpenRouter AI分析",
        title: "AI模型采用趋势分析",
        description: "基于OpenRouter平台的AI Adoption深度洞察",
        href: "openrouter-analysis.html",
        label: "查看AI分析",
    },
];

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    reports: Vec<ReportSummary>,
    reports_dir: &'static str,
    links: &'static [NavLink],
    year: i32,
}

impl HomeTemplate {
    /// Build the page for `reports`, which must already be newest-first.
    #[must_use]
    pub fn new(reports: Vec<ReportSummary>, year: i32) -> Self {
        Self {
            reports,
            reports_dir: REPORTS_DIR,
            links: NAV_LINKS,
            year,
        }
    }
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /` — latest reports.
pub async fn index<RR>(
    State(state): State<AppState<RR>>,
) -> Result<HomeTemplate, DashboardError>
where
    RR: ReportRepository + Send + Sync + 'static,
{
    let reports = state.report_service.latest_reports().await?;

    Ok(HomeTemplate::new(reports, time::current_year()))
}
