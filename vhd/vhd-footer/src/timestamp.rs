//! Conversion of the footer's `time_stamp` field.
//!
//! The field counts seconds from the VHD epoch. Converting adds a fixed
//! offset and reads the sum as seconds since the Unix epoch.

use chrono::{DateTime, Utc};

/// Seconds between the Unix epoch and the VHD epoch.
pub const VHD_EPOCH_OFFSET: i64 = 946_080_000;

/// Unix seconds for a stored footer timestamp.
#[must_use]
pub fn to_unix_seconds(stored: u32) -> i64 {
    i64::from(stored) + VHD_EPOCH_OFFSET
}

/// Calendar time for a stored footer timestamp.
#[must_use]
pub fn to_datetime(stored: u32) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(to_unix_seconds(stored), 0)
}

/// Stored footer timestamp for a calendar time, truncated to whole seconds.
///
/// `None` if the time lies before the VHD epoch or past the range of the field.
#[must_use]
pub fn from_datetime(time: DateTime<Utc>) -> Option<u32> {
    u32::try_from(time.timestamp() - VHD_EPOCH_OFFSET).ok()
}
