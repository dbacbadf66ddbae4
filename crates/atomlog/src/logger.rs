//! crates/atomlog/src/logger.rs
//! The process-wide logger: threshold, lookups, formatting and routing.

use std::fmt;
use std::io::{self, Write};
use std::mem;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU8, Ordering};

use atomlog_sink::{MessageSink, Paint};

use crate::levels::LogLevel;
use crate::palette::Palette;
use crate::record::{LogRecord, SourceLocation};
use crate::route::{Stream, Streams};
use crate::thread_local::{restore_scratch, take_scratch};

static INSTANCE: OnceLock<Logger> = OnceLock::new();

/// Level-gated formatter that routes lines to standard output or standard error.
///
/// The process-wide instance is reached through [`Logger::instance`]; it is
/// built on first access and lives until the process exits. The threshold is
/// the only mutable state and is stored as an atomic ordinal, so
/// [`set_level`](Self::set_level) and [`log`](Self::log) may race freely
/// without locks. The name and color tables are fixed at construction.
///
/// # Examples
///
/// ```
/// use atomlog::{LogLevel, Logger, Streams};
///
/// let logger = Logger::new();
/// let mut streams = Streams::new(Vec::new(), Vec::new());
///
/// logger.log_to(LogLevel::Debug, "hidden", None, &mut streams)?;
/// logger.log_to(LogLevel::Info, "shown", None, &mut streams)?;
///
/// let (stdout, stderr) = streams.into_inner();
/// let stdout = String::from_utf8(stdout).unwrap();
/// assert!(stdout.ends_with(" [INFO] shown\n"));
/// assert!(stderr.is_empty());
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct Logger {
    threshold: AtomicU8,
    palette: Palette,
}

impl Logger {
    /// Builds a free-standing logger with the default `INFO` threshold.
    ///
    /// Most programs use [`Logger::instance`] instead; separate instances are
    /// useful for embedding and for tests that capture output.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            threshold: AtomicU8::new(LogLevel::Info.as_u8()),
            palette: Palette::standard(),
        }
    }

    /// Returns the process-wide logger, creating it on first use.
    pub fn instance() -> &'static Self {
        INSTANCE.get_or_init(Self::new)
    }

    /// Sets the minimum level that will be emitted.
    pub fn set_level(&self, level: LogLevel) {
        self.threshold.store(level.as_u8(), Ordering::Relaxed);
    }

    /// Returns the minimum level that will be emitted.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        // Only `set_level` stores into the threshold, so the ordinal is always valid.
        LogLevel::from_ordinal(self.threshold.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Returns `true` when a record at `level` would be emitted.
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level.as_u8() >= self.threshold.load(Ordering::Relaxed)
    }

    /// Display name for a level ordinal, `UNKNOWN` when unmapped.
    #[must_use]
    pub fn level_name(&self, ordinal: u8) -> &'static str {
        self.palette.name(ordinal)
    }

    /// Color escape for a level ordinal, the reset escape when unmapped.
    #[must_use]
    pub fn level_color(&self, ordinal: u8) -> &'static str {
        self.palette.color(ordinal)
    }

    /// Logs `message` to the process's standard streams.
    ///
    /// `file` and `line` are only rendered for `WARN` and above, and only when
    /// a file is given and `line` is positive. Write failures on the standard
    /// streams are not reported.
    pub fn log(&self, level: LogLevel, message: &str, file: Option<&str>, line: u32) {
        let _ = self.log_to(
            level,
            message,
            SourceLocation::new(file, line),
            &mut Streams::process(),
        );
    }

    /// Logs `message` into the supplied `streams`, reporting write failures.
    pub fn log_to<O, E>(
        &self,
        level: LogLevel,
        message: &str,
        location: Option<SourceLocation<'_>>,
        streams: &mut Streams<O, E>,
    ) -> io::Result<()>
    where
        O: Write,
        E: Write,
    {
        if !self.enabled(level) {
            return Ok(());
        }
        let record = LogRecord::capture(level, message, location);
        self.write_record(&record, streams)
    }

    /// Renders `record` without color or terminator.
    #[must_use]
    pub fn render(&self, record: &LogRecord<'_>) -> String {
        let mut line = String::new();
        record.render_into(self.level_name(record.level().as_u8()), &mut line);
        line
    }

    /// Writes an already captured record, bypassing the threshold.
    pub fn write_record<O, E>(
        &self,
        record: &LogRecord<'_>,
        streams: &mut Streams<O, E>,
    ) -> io::Result<()>
    where
        O: Write,
        E: Write,
    {
        let level = record.level();
        let stream = Stream::for_level(level);
        let paint = match stream {
            Stream::Standard => Paint::Plain,
            Stream::Error => Paint::Ansi(self.level_color(level.as_u8())),
        };

        let mut scratch = take_scratch();
        scratch.line.clear();
        record.render_into(self.level_name(level.as_u8()), &mut scratch.line);

        let frame = mem::take(&mut scratch.frame);
        let mut sink = MessageSink::with_parts(streams.writer(stream), frame);
        let result = sink.write_line(&scratch.line, paint);
        let (_, frame) = sink.into_parts();

        scratch.frame = frame;
        restore_scratch(scratch);
        result
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .finish_non_exhaustive()
    }
}
