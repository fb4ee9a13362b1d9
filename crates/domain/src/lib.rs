//! # reportboard-domain
//!
//! Pure domain model for the market report landing page.
//!
//! ## Responsibilities
//! - Define the **Report Summary** (one row of daily report metadata:
//!   date, overall score, investment signal)
//! - Own the display rules the page relies on (one-decimal score,
//!   per-date report file name)
//! - Foundational types: error conventions, timestamps
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod report;
