//! crates/atomlog/src/tracing_bridge.rs
//! Bridge from the `tracing` crate into an atomlog [`Logger`].
//!
//! [`AtomLogLayer`] is a `tracing-subscriber` layer that turns each `tracing`
//! event into one logger call. Programs and libraries can keep using the
//! standard `tracing` macros while their output follows atomlog's format,
//! threshold and routing.
//!
//! # Usage
//!
//! ```rust,ignore
//! atomlog::init_tracing().expect("no other global subscriber");
//!
//! tracing::warn!("disk space low");
//! ```

use std::io::{self, Write};

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::levels::LogLevel;
use crate::logger::Logger;
use crate::record::SourceLocation;
use crate::route::Streams;

type ProcessStreams = fn() -> Streams<io::Stdout, io::Stderr>;

/// A tracing layer that forwards events to a [`Logger`].
///
/// The stream factory `M` is called once per emitted event; the default
/// writes to the process's standard streams.
pub struct AtomLogLayer<M = ProcessStreams> {
    logger: &'static Logger,
    make_streams: M,
}

impl AtomLogLayer {
    /// Creates a layer writing to the process's standard streams.
    #[must_use]
    pub fn new(logger: &'static Logger) -> Self {
        Self {
            logger,
            make_streams: Streams::process,
        }
    }
}

impl<M> AtomLogLayer<M> {
    /// Replaces the stream factory, for example to capture output.
    #[must_use]
    pub fn with_streams<M2>(self, make_streams: M2) -> AtomLogLayer<M2> {
        AtomLogLayer {
            logger: self.logger,
            make_streams,
        }
    }

    /// Maps a tracing level onto an atomlog level; `TRACE` folds into `DEBUG`.
    #[must_use]
    pub const fn map_level(level: &Level) -> LogLevel {
        match *level {
            Level::ERROR => LogLevel::Error,
            Level::WARN => LogLevel::Warn,
            Level::INFO => LogLevel::Info,
            Level::DEBUG | Level::TRACE => LogLevel::Debug,
        }
    }
}

impl<S, M, O, E> Layer<S> for AtomLogLayer<M>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    M: Fn() -> Streams<O, E> + 'static,
    O: Write,
    E: Write,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Self::map_level(metadata.level());
        if !self.logger.enabled(level) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let Some(message) = visitor.message else {
            return;
        };

        let location = SourceLocation::new(metadata.file(), metadata.line().unwrap_or(0));
        let mut streams = (self.make_streams)();
        let _ = self.logger.log_to(level, &message, location, &mut streams);
    }
}

/// Visitor to extract the `message` field from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs an [`AtomLogLayer`] over the process-wide logger as the global
/// tracing subscriber.
///
/// Fails when another global subscriber has already been set.
pub fn init_tracing() -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(AtomLogLayer::new(Logger::instance()))
        .try_init()
}
