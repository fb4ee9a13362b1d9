//! HTTP error response mapping.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use reportboard_domain::error::BoardError;

/// Error page shown instead of a partially rendered dashboard.
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    message: &'static str,
}

/// Maps [`BoardError`] to an HTML error page with the appropriate status code.
#[derive(Debug)]
pub struct DashboardError(BoardError);

impl From<BoardError> for DashboardError {
    fn from(err: BoardError) -> Self {
        Self(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            BoardError::Storage(err) => {
                tracing::error!(error = %err, "report store unavailable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "报告数据暂时无法读取，请稍后再试。",
                )
            }
        };

        let page = ErrorTemplate {
            status: status.as_u16(),
            message,
        };
        match page.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to render error page");
                status.into_response()
            }
        }
    }
}
