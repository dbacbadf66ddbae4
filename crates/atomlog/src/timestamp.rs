//! crates/atomlog/src/timestamp.rs
//! Wall-clock capture and `YYYY-MM-DD HH:MM:SS.mmm` rendering.

use std::fmt;

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Timestamp format shared by every record.
pub(crate) const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]");

/// Rendered when the formatter rejects a date, which only happens for years
/// outside the four-digit range.
const FALLBACK_TIMESTAMP: &str = "1970-01-01 00:00:00.000";

/// Wall-clock instant captured when a record is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    /// Captures the current time in the local UTC offset.
    ///
    /// When the platform cannot report the local offset (for example
    /// multi-threaded processes on some Unix targets), UTC is used instead.
    #[must_use]
    pub fn now() -> Self {
        Self(OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc()))
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(datetime: OffsetDateTime) -> Self {
        Self(datetime)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.format(TIMESTAMP_FORMAT) {
            Ok(text) => f.write_str(&text),
            Err(_) => f.write_str(FALLBACK_TIMESTAMP),
        }
    }
}
