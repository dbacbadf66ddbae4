#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `atomlog` is a process-local logger. Messages carry one of four ordered
//! levels, are stamped with the local wall-clock time to the millisecond, and
//! are written as one line each:
//!
//! ```text
//! YYYY-MM-DD HH:MM:SS.mmm [LEVEL] message[ [at file:line]]
//! ```
//!
//! `DEBUG` and `INFO` go to standard output as plain text. `WARN` and `ERROR`
//! go to standard error wrapped in the level's ANSI color and a reset, and
//! carry the call site when one is known.
//!
//! # Design
//!
//! [`Logger`] is a process-wide singleton reached through
//! [`Logger::instance`]. Its threshold is an atomic ordinal, readable and
//! writable from any thread without locks; its name and color tables are
//! fixed at construction. Every call runs to completion on the calling thread:
//! the line is rendered into a per-thread scratch buffer and handed to the
//! stream through [`atomlog_sink::MessageSink`] in a single write.
//!
//! Call sites use either the free functions ([`info`], [`warn`], ...) or the
//! `format!`-style macros ([`log_info!`], [`log_warn!`], ...). `warn`, `error`
//! and `critical` capture the caller's file and line automatically.
//!
//! # Errors
//!
//! Logging never fails from the caller's point of view: unknown level ordinals
//! render as `UNKNOWN`, missing locations are omitted, and write failures on
//! the standard streams are ignored. [`Logger::log_to`] reports write failures
//! for callers that supply their own writers. Parsing a level from text is
//! the only fallible operation and returns [`ParseLevelError`].
//!
//! # Examples
//!
//! ```
//! use atomlog::{LogLevel, Logger, Streams};
//!
//! let logger = Logger::new();
//! logger.set_level(LogLevel::Warn);
//!
//! let mut streams = Streams::new(Vec::new(), Vec::new());
//! logger.log_to(LogLevel::Info, "filtered", None, &mut streams)?;
//! logger.log_to(
//!     LogLevel::Error,
//!     "Failed to open config file",
//!     atomlog::SourceLocation::new(Some("main.rs"), 12),
//!     &mut streams,
//! )?;
//!
//! let (stdout, stderr) = streams.into_inner();
//! assert!(stdout.is_empty());
//! let stderr = String::from_utf8(stderr).unwrap();
//! assert!(stderr.starts_with("\x1b[31m"));
//! assert!(stderr.ends_with("[ERROR] Failed to open config file [at main.rs:12]\x1b[0m\n"));
//! # Ok::<(), std::io::Error>(())
//! ```

mod api;
mod config;
mod levels;
mod logger;
mod macros;
mod palette;
mod record;
mod route;
mod thread_local;
mod timestamp;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use api::{
    conditional, critical, critical_message, custom, debug, error, info, level, log, set_level,
    warn,
};
pub use config::{ParseLevelError, ThresholdConfig};
pub use levels::LogLevel;
pub use logger::Logger;
pub use palette::{CRITICAL_MARKER, DEFAULT_COLOR, UNKNOWN_LABEL};
pub use record::{LogRecord, SourceLocation};
pub use route::{Stream, Streams};
pub use timestamp::Timestamp;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{AtomLogLayer, init_tracing};
