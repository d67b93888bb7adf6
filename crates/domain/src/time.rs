//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for an incident's creation time.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
///
/// Captured once per record at creation, never at type-definition time, so
/// two records created at different moments get different timestamps.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}
