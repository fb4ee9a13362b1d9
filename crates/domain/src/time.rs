//! Time and timestamp helpers.

use chrono::{DateTime, Datelike, Utc};

/// UTC timestamp.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Calendar year shown in the page footer.
#[must_use]
pub fn current_year() -> i32 {
    now().year()
}
