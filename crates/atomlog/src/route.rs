//! crates/atomlog/src/route.rs
//! Level-based stream selection.

use std::io::{self, Write};

use crate::levels::LogLevel;

/// Destination stream of a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    /// Standard output: `DEBUG` and `INFO`, uncolored.
    Standard,
    /// Standard error: `WARN` and above, colored.
    Error,
}

impl Stream {
    /// Selects the stream for `level`.
    #[must_use]
    pub const fn for_level(level: LogLevel) -> Self {
        if level.is_error_stream() {
            Self::Error
        } else {
            Self::Standard
        }
    }
}

/// The pair of writers a logger routes into.
///
/// [`Streams::process`] wraps the process's own standard output and error.
/// Any other pair of writers, such as in-memory buffers, can be supplied
/// through [`Streams::new`].
#[derive(Debug, Default)]
pub struct Streams<O, E> {
    stdout: O,
    stderr: E,
}

impl Streams<io::Stdout, io::Stderr> {
    /// Standard output and standard error of the current process.
    ///
    /// Each line is written with a single `write_all`, which holds the
    /// stream's own lock for the duration of the write.
    #[must_use]
    pub fn process() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O, E> Streams<O, E> {
    /// Pairs a standard-output writer with a standard-error writer.
    #[must_use]
    pub const fn new(stdout: O, stderr: E) -> Self {
        Self { stdout, stderr }
    }

    /// Borrows the standard-output writer.
    #[must_use]
    pub const fn stdout(&self) -> &O {
        &self.stdout
    }

    /// Borrows the standard-error writer.
    #[must_use]
    pub const fn stderr(&self) -> &E {
        &self.stderr
    }

    /// Returns both writers.
    #[must_use]
    pub fn into_inner(self) -> (O, E) {
        (self.stdout, self.stderr)
    }
}

impl<O, E> Streams<O, E>
where
    O: Write,
    E: Write,
{
    pub(crate) fn writer(&mut self, stream: Stream) -> &mut dyn Write {
        match stream {
            Stream::Standard => &mut self.stdout,
            Stream::Error => &mut self.stderr,
        }
    }
}
