//! crates/atomlog/src/levels.rs
//! Severity levels and their ordinal encoding.

use std::fmt;

/// Severity of a log message.
///
/// Variants are ordered by severity, so `a < b` means `a` is less severe. The
/// discriminant is the ordinal stored in the logger's atomic threshold.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum LogLevel {
    /// Diagnostic detail, hidden by default.
    Debug = 0,
    /// Normal operational messages.
    #[default]
    Info = 1,
    /// Something unexpected that does not stop the program.
    Warn = 2,
    /// A failure the program has to report.
    Error = 3,
}

impl LogLevel {
    /// Every level, least severe first.
    pub const ALL: [Self; 4] = [Self::Debug, Self::Info, Self::Warn, Self::Error];

    /// Returns the ordinal of the level.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Converts an ordinal back into a level, or `None` when it is out of range.
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Debug),
            1 => Some(Self::Info),
            2 => Some(Self::Warn),
            3 => Some(Self::Error),
            _ => None,
        }
    }

    /// Returns the upper-case display name used in the `[LEVEL]` label.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Returns `true` for levels routed to standard error with color and location.
    #[must_use]
    pub const fn is_error_stream(self) -> bool {
        self.as_u8() >= Self::Warn.as_u8()
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.as_u8()
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = u8;

    /// Fails with the rejected ordinal.
    fn try_from(ordinal: u8) -> Result<Self, u8> {
        Self::from_ordinal(ordinal).ok_or(ordinal)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
