//! crates/atomlog/src/record.rs
//! Per-call log record and its single-line rendering.

use std::fmt::{self, Write as _};

use crate::levels::LogLevel;
use crate::timestamp::Timestamp;

/// Call site attached to a record.
///
/// A location only exists when a file name is known and the line number is
/// positive; anything else means "no location".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceLocation<'a> {
    file: &'a str,
    line: u32,
}

impl<'a> SourceLocation<'a> {
    /// Builds a location, returning `None` when `file` is absent or `line` is zero.
    #[must_use]
    pub const fn new(file: Option<&'a str>, line: u32) -> Option<Self> {
        match file {
            Some(file) if line > 0 => Some(Self { file, line }),
            _ => None,
        }
    }

    /// Captures the location of the caller of a `#[track_caller]` function.
    #[must_use]
    pub fn from_caller(caller: &'a std::panic::Location<'a>) -> Option<Self> {
        Self::new(Some(caller.file()), caller.line())
    }

    /// Source file name.
    #[must_use]
    pub const fn file(&self) -> &'a str {
        self.file
    }

    /// Source line, always positive.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for SourceLocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A message on its way to a stream.
///
/// Records are built by the logger for a single call and dropped once the
/// line has been written.
#[derive(Clone, Copy, Debug)]
pub struct LogRecord<'a> {
    level: LogLevel,
    message: &'a str,
    location: Option<SourceLocation<'a>>,
    timestamp: Timestamp,
}

impl<'a> LogRecord<'a> {
    /// Builds a record stamped with the current wall-clock time.
    #[must_use]
    pub fn capture(
        level: LogLevel,
        message: &'a str,
        location: Option<SourceLocation<'a>>,
    ) -> Self {
        Self::with_timestamp(level, message, location, Timestamp::now())
    }

    /// Builds a record with an explicit timestamp.
    #[must_use]
    pub const fn with_timestamp(
        level: LogLevel,
        message: &'a str,
        location: Option<SourceLocation<'a>>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            level,
            message,
            location,
            timestamp,
        }
    }

    /// Severity of the record.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Message text, as supplied by the caller.
    #[must_use]
    pub const fn message(&self) -> &'a str {
        self.message
    }

    /// Call site supplied by the caller, if any.
    #[must_use]
    pub const fn location(&self) -> Option<SourceLocation<'a>> {
        self.location
    }

    /// Time the record was captured.
    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Location that is actually rendered: only `WARN` and above show one.
    #[must_use]
    pub const fn rendered_location(&self) -> Option<SourceLocation<'a>> {
        if self.level.is_error_stream() {
            self.location
        } else {
            None
        }
    }

    /// Appends `<timestamp> [<label>] <message>[ [at <file>:<line>]]` to `out`.
    pub(crate) fn render_into(&self, label: &str, out: &mut String) {
        // Writing into a `String` cannot fail.
        let _ = write!(out, "{} [{label}] {}", self.timestamp, self.message);
        if let Some(location) = self.rendered_location() {
            let _ = write!(out, " [at {location}]");
        }
    }
}
