//! # reportboard-adapter-storage-sqlite-sqlx
//!
//! `SQLite` read adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `ReportRepository` port defined in `reportboard-app::ports`
//! - Open one read-only `SQLite` connection per request and close it afterwards
//! - Map `daily_reports` rows into domain [`ReportSummary`] values
//!
//! The `daily_reports` table is owned by the external report job; this
//! adapter never creates or migrates it.
//!
//! ## Dependency rule
//! Depends on `reportboard-app` (for port traits) and `reportboard-domain`
//! (for domain types). The `app` and `domain` crates must never reference
//! this adapter.
//!
//! [`ReportSummary`]: reportboard_domain::report::ReportSummary

pub mod connection;
pub mod error;
pub mod report_repo;

pub use connection::{Config, Database};
pub use report_repo::SqliteReportRepository;
