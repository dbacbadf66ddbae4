use super::MessageSink;

impl<W> MessageSink<W> {
    /// Creates a sink from a writer and a scratch buffer.
    ///
    /// The scratch buffer is cleared before every line, so its previous
    /// contents never reach the writer; only its capacity is reused.
    #[must_use]
    pub fn with_parts(writer: W, scratch: Vec<u8>) -> Self {
        Self { writer, scratch }
    }

    /// Consumes the sink and returns the writer and the scratch buffer.
    #[must_use]
    pub fn into_parts(self) -> (W, Vec<u8>) {
        (self.writer, self.scratch)
    }
}
