//! End-to-end smoke tests for the full reportboardd stack.
//!
//! Each test seeds a throwaway `SQLite` file, reopens it read-only the way
//! the daemon does, and exercises the real repository, service and axum
//! router via `tower::ServiceExt::oneshot`. No TCP port is bound.

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use sqlx::Connection;
use reportboard_adapter_http_axum::router;
use reportboard_adapter_http_axum::state::AppState;
use reportboard_adapter_storage_sqlite_sqlx::{Config, SqliteReportRepository};
use reportboard_app::services::report_service::ReportService;
use tower::ServiceExt;

const CREATE_TABLE: &str = r"
    CREATE TABLE daily_reports (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        report_date TEXT UNIQUE NOT NULL,
        overall_score REAL,
        investment_signal TEXT
    )
";

/// A database file removed when the test ends.
struct TestStore {
    path: PathBuf,
}

impl TestStore {
    /// Reserve a unique path without creating the file.
    fn absent(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "reportboard-{name}-{}.db",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        Self { path }
    }

    /// Create the file, optionally with the reports table, and insert `rows`.
    async fn create(name: &str, with_table: bool, rows: &[(&str, f64, &str)]) -> Self {
        let store = Self::absent(name);

        let mut conn = Config {
            database_url: store.url(),
            read_only: false,
        }
        .build()
        .expect("test database url should parse")
        .connect()
        .await
        .expect("writable test database should open");

        let schema = if with_table {
            CREATE_TABLE
        } else {
            "CREATE TABLE dimension_scores (report_date TEXT, dimension_name TEXT, score REAL)"
        };
        sqlx::query(schema)
            .execute(&mut conn)
            .await
            .expect("schema should be created");
        for (date, score, signal) in rows {
            sqlx::query(
                "INSERT INTO daily_reports (report_date, overall_score, investment_signal) VALUES (?, ?, ?)",
            )
            .bind(*date)
            .bind(*score)
            .bind(*signal)
            .execute(&mut conn)
            .await
            .expect("row should be inserted");
        }
        conn.close().await.expect("connection should close");

        store
    }

    fn url(&self) -> String {
        format!("sqlite:{}", self.path.display())
    }

    /// Build a fully-wired router reading this store read-only.
    fn app(&self) -> axum::Router {
        let db = Config::read_only(self.url())
            .build()
            .expect("database url should parse");

        let repo = SqliteReportRepository::new(db);
        let state = AppState::new(ReportService::new(repo));

        router::build(state, None)
    }
}

impl Drop for TestStore {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap();
    (status, body)
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let store = TestStore::create("health", true, &[]).await;

    let (status, _) = get(store.app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Landing page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_reports_newest_first() {
    let store = TestStore::create(
        "two-rows",
        true,
        &[("2026-01-09", 62.0, "Hold"), ("2026-01-10", 87.5, "Buy")],
    )
    .await;

    let (status, body) = get(store.app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("data-report-date=").count(), 2);

    let first = body.find(r#"data-report-date="2026-01-10""#).unwrap();
    let second = body.find(r#"data-report-date="2026-01-09""#).unwrap();
    assert!(first < second);

    let first_entry = &body[first..second];
    assert!(first_entry.contains("87.5/100"));
    assert!(first_entry.contains("Buy"));
    assert!(first_entry.contains(r#"href="reports/2026-01-10_11d.html""#));

    let second_entry = &body[second..];
    assert!(second_entry.contains("62.0/100"));
    assert!(second_entry.contains("Hold"));
    assert!(second_entry.contains(r#"href="reports/2026-01-09_11d.html""#));
}

#[tokio::test]
async fn should_list_only_five_most_recent_reports() {
    let rows = [
        ("2026-01-01", 10.0, "Sell"),
        ("2026-01-02", 20.0, "Sell"),
        ("2026-01-03", 30.0, "Hold"),
        ("2026-01-04", 40.0, "Hold"),
        ("2026-01-05", 50.0, "Hold"),
        ("2026-01-06", 60.0, "Buy"),
        ("2026-01-07", 70.0, "Buy"),
    ];
    let store = TestStore::create("seven-rows", true, &rows).await;

    let (status, body) = get(store.app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("data-report-date=").count(), 5);
    assert!(body.contains(r#"data-report-date="2026-01-07""#));
    assert!(body.contains(r#"data-report-date="2026-01-03""#));
    assert!(!body.contains(r#"data-report-date="2026-01-02""#));
    assert!(!body.contains(r#"data-report-date="2026-01-01""#));
}

#[tokio::test]
async fn should_render_empty_list_when_no_reports_exist() {
    let store = TestStore::create("empty", true, &[]).await;

    let (status, body) = get(store.app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("data-report-date="));
    assert!(body.contains(r#"href="glossary.html""#));
    assert!(body.contains(r#"href="dashboard/""#));
    assert!(body.contains(r#"href="openrouter-analysis.html""#));
}

#[tokio::test]
async fn should_return_error_page_when_reports_table_is_missing() {
    let store = TestStore::create("no-table", false, &[]).await;

    let (status, body) = get(store.app(), "/").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("错误 500"));
    assert!(!body.contains("data-report-date="));
}

#[tokio::test]
async fn should_return_error_page_when_store_file_is_missing() {
    let store = TestStore::absent("absent");

    let app = store.app();
    let (status, body) = get(app.clone(), "/").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("错误 500"));
    assert!(!body.contains("data-report-date="));
    assert!(!store.path.exists(), "read-only access must not create the store");

    let (status, _) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn should_return_error_page_when_store_is_removed_after_startup() {
    let store = TestStore::create("removed", true, &[("2026-01-10", 87.5, "Buy")]).await;
    let app = store.app();

    let (status, body) = get(app.clone(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"data-report-date="2026-01-10""#));

    std::fs::remove_file(&store.path).unwrap();

    let (status, body) = get(app, "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.contains("data-report-date="));
}

#[tokio::test]
async fn should_pick_up_store_created_after_startup() {
    let store = TestStore::absent("late");
    let app = store.app();

    let (status, _) = get(app.clone(), "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let _created = TestStore::create("late", true, &[("2026-01-11", 71.0, "Hold")]).await;

    let (status, body) = get(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("71.0/100"));
}
