//! Timestamp conventions — all wall-clock times are UTC.

/// UTC timestamp used across the domain.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    chrono::Utc::now()
}
