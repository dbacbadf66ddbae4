//! crates/atomlog/src/config.rs
//! Threshold selection from level names and verbosity counters.

use std::str::FromStr;

use thiserror::Error;

use crate::levels::LogLevel;
use crate::logger::Logger;

/// Error returned when a level token cannot be parsed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseLevelError {
    /// The token was empty or whitespace.
    #[error("empty log level")]
    Empty,
    /// The token names no level.
    #[error("unknown log level: {0} (expected debug, info, warn or error)")]
    Unknown(String),
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    /// Accepts level names in any case (`warning` is an alias of `warn`) and
    /// the ordinals `0` through `3`.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ParseLevelError::Empty);
        }

        if let Ok(ordinal) = token.parse::<u8>() {
            return Self::from_ordinal(ordinal)
                .ok_or_else(|| ParseLevelError::Unknown(token.to_owned()));
        }

        match token.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ParseLevelError::Unknown(token.to_owned())),
        }
    }
}

/// Threshold derived from command-line style inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThresholdConfig {
    /// Minimum level to emit.
    pub level: LogLevel,
}

impl ThresholdConfig {
    /// Builds a configuration for an explicit level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Maps `-v`/`-q` counters onto a level.
    ///
    /// Starts at `INFO`; each `verbose` step lowers the threshold and each
    /// `quiet` step raises it, saturating at `DEBUG` and `ERROR`.
    #[must_use]
    pub fn from_verbosity(verbose: u8, quiet: u8) -> Self {
        let base = i16::from(LogLevel::Info.as_u8());
        let max = i16::from(LogLevel::Error.as_u8());
        let ordinal = (base + i16::from(quiet) - i16::from(verbose)).clamp(0, max);
        let level = u8::try_from(ordinal)
            .ok()
            .and_then(LogLevel::from_ordinal)
            .unwrap_or_default();
        Self { level }
    }

    /// Applies the threshold to `logger`.
    pub fn apply(&self, logger: &Logger) {
        logger.set_level(self.level);
    }
}

impl From<LogLevel> for ThresholdConfig {
    fn from(level: LogLevel) -> Self {
        Self::new(level)
    }
}
