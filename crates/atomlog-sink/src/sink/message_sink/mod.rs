use std::fmt;

/// Line-oriented sink that frames text and streams it into an
/// [`std::io::Write`] target.
///
/// The sink owns the underlying writer together with a reusable scratch
/// buffer. Each call to [`write_line`](Self::write_line) renders the color
/// prefix, text, reset escape and newline into the scratch buffer and hands
/// the result to the writer in one `write_all`, so concurrent writers sharing a
/// locked stream never see a half-written line from this sink.
///
/// # Examples
///
/// Hand the scratch buffer over to another sink:
///
/// ```
/// use atomlog_sink::{MessageSink, Paint};
///
/// let mut sink = MessageSink::with_parts(Vec::new(), Vec::new());
/// sink.write_line("phase one", Paint::Plain)?;
/// let (first, scratch) = sink.into_parts();
/// assert_eq!(first, b"phase one\n".to_vec());
///
/// let mut sink = MessageSink::with_parts(Vec::new(), scratch);
/// sink.write_line("phase two", Paint::Plain)?;
/// assert_eq!(sink.into_parts().0, b"phase two\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct MessageSink<W> {
    writer: W,
    scratch: Vec<u8>,
}

mod constructors;
mod writing;

impl<W> fmt::Debug for MessageSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSink")
            .field("writer", &self.writer)
            .finish_non_exhaustive()
    }
}
