#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/atomlog-sink/src/lib.rs
//!
//! # Overview
//!
//! `atomlog-sink` owns the last step of the atomlog pipeline: taking a fully
//! formatted log line and getting it onto a writer. The logger decides *what*
//! a line says and *where* it goes; this crate decides how the bytes are
//! framed.
//!
//! # Design
//!
//! [`MessageSink`] wraps an [`std::io::Write`] implementor together with a
//! scratch buffer. Each call to [`MessageSink::write_line`] assembles the
//! optional color prefix, the line text, the reset escape and the newline in
//! the scratch buffer and then issues exactly one
//! [`write_all`](std::io::Write::write_all). Callers select the color framing
//! with [`Paint`].
//!
//! # Invariants
//!
//! - A line is never split across several writes by the sink itself.
//! - [`Paint::Ansi`] always closes with [`RESET`], even when the prefix is
//!   empty, so a colored line never leaks its color into the next one.
//! - The sink appends one `\n` after every line.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values from the underlying
//! writer unchanged.
//!
//! # Examples
//!
//! ```
//! use atomlog_sink::{MessageSink, Paint};
//!
//! let mut sink = MessageSink::with_parts(Vec::new(), Vec::new());
//! sink.write_line("plain", Paint::Plain).unwrap();
//! sink.write_line("warned", Paint::Ansi("\x1b[33m")).unwrap();
//!
//! let (output, _scratch) = sink.into_parts();
//! assert_eq!(output, b"plain\n\x1b[33mwarned\x1b[0m\n".to_vec());
//! ```

mod paint;
mod sink;

pub use paint::{Paint, RESET};
pub use sink::MessageSink;
