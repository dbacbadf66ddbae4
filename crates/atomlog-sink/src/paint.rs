//! crates/atomlog-sink/src/paint.rs
//! ANSI color framing for a single line.

/// Escape sequence that restores the terminal's default attributes.
pub const RESET: &str = "\x1b[0m";

/// Color framing applied to a line by [`MessageSink`](crate::MessageSink).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Paint<'a> {
    /// Write the line as-is.
    #[default]
    Plain,
    /// Prefix the line with the given escape sequence and close it with [`RESET`].
    Ansi(&'a str),
}

impl Paint<'_> {
    /// Returns `true` when the line carries escape sequences.
    #[must_use]
    pub const fn is_colored(&self) -> bool {
        matches!(self, Self::Ansi(_))
    }

    pub(crate) fn open(&self, buf: &mut Vec<u8>) {
        if let Self::Ansi(prefix) = self {
            buf.extend_from_slice(prefix.as_bytes());
        }
    }

    pub(crate) fn close(&self, buf: &mut Vec<u8>) {
        if self.is_colored() {
            buf.extend_from_slice(RESET.as_bytes());
        }
    }
}
