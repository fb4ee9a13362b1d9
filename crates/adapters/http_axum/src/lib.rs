//! # reportboard-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **server-side-rendered landing page** (`GET /`) listing the
//!   most recent reports, rendered from an askama template
//! - Serve the surrounding **static report site** (`reports/*_11d.html`,
//!   `glossary.html`, …) from a configured directory
//! - Map application errors into an explicit HTML error page
//!
//! ## Dependency rule
//! Depends on `reportboard-app` (for port traits and services) and
//! `reportboard-domain` (for domain types used in rendering). Never leaks
//! axum types into the domain.

pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
