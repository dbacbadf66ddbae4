//! crates/atomlog/src/palette.rs
//! Fixed display names and ANSI colors, indexed by level ordinal.

use crate::levels::LogLevel;
use atomlog_sink::RESET;

/// Label rendered for an ordinal with no entry in the name table.
pub const UNKNOWN_LABEL: &str = "UNKNOWN";

/// Color used for an ordinal with no entry in the color table.
pub const DEFAULT_COLOR: &str = RESET;

/// Marker prepended to the message of a critical error.
///
/// The marker carries its own bold red prefix and reset, so it stands out
/// from the rest of the red `ERROR` line.
pub const CRITICAL_MARKER: &str = "\x1b[1;31mCRITICAL:\x1b[0m ";

const LEVEL_COUNT: usize = LogLevel::ALL.len();

/// Level name table, indexed by ordinal.
pub(crate) const LEVEL_NAMES: [&str; LEVEL_COUNT] = [
    LogLevel::Debug.name(),
    LogLevel::Info.name(),
    LogLevel::Warn.name(),
    LogLevel::Error.name(),
];

/// Level color table, indexed by ordinal.
pub(crate) const LEVEL_COLORS: [&str; LEVEL_COUNT] = [
    "\x1b[36m", // cyan
    "\x1b[0m",
    "\x1b[33m", // yellow
    "\x1b[31m", // red
];

/// Immutable name and color lookups owned by a [`Logger`](crate::Logger).
#[derive(Debug)]
pub(crate) struct Palette {
    names: [&'static str; LEVEL_COUNT],
    colors: [&'static str; LEVEL_COUNT],
}

impl Palette {
    pub(crate) const fn standard() -> Self {
        Self {
            names: LEVEL_NAMES,
            colors: LEVEL_COLORS,
        }
    }

    pub(crate) fn name(&self, ordinal: u8) -> &'static str {
        self.names
            .get(usize::from(ordinal))
            .copied()
            .unwrap_or(UNKNOWN_LABEL)
    }

    pub(crate) fn color(&self, ordinal: u8) -> &'static str {
        self.colors
            .get(usize::from(ordinal))
            .copied()
            .unwrap_or(DEFAULT_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_level_order() {
        let palette = Palette::standard();
        assert_eq!(palette.name(0), "DEBUG");
        assert_eq!(palette.name(1), "INFO");
        assert_eq!(palette.name(2), "WARN");
        assert_eq!(palette.name(3), "ERROR");
    }

    #[test]
    fn colors_follow_level_order() {
        let palette = Palette::standard();
        assert_eq!(palette.color(LogLevel::Debug.as_u8()), "\x1b[36m");
        assert_eq!(palette.color(LogLevel::Info.as_u8()), "\x1b[0m");
        assert_eq!(palette.color(LogLevel::Warn.as_u8()), "\x1b[33m");
        assert_eq!(palette.color(LogLevel::Error.as_u8()), "\x1b[31m");
    }

    #[test]
    fn unmapped_ordinals_fall_back() {
        let palette = Palette::standard();
        assert_eq!(palette.name(4), UNKNOWN_LABEL);
        assert_eq!(palette.name(u8::MAX), UNKNOWN_LABEL);
        assert_eq!(palette.color(4), DEFAULT_COLOR);
        assert_eq!(palette.color(u8::MAX), RESET);
    }

    #[test]
    fn critical_marker_resets_before_message() {
        assert!(CRITICAL_MARKER.starts_with("\x1b[1;31m"));
        assert!(CRITICAL_MARKER.ends_with("\x1b[0m "));
        assert!(CRITICAL_MARKER.contains("CRITICAL:"));
    }
}
