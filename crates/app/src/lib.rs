//! # reportboard-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **driven/outbound port** adapters must implement:
//!   - `ReportRepository` — read the most recent report summaries
//! - Define the **driving/inbound** use-case:
//!   - `ReportService` — the landing page's "latest reports" query
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `reportboard-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
