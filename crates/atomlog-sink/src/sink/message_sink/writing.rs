use std::io::{self, Write};

use super::MessageSink;
use crate::paint::Paint;

impl<W> MessageSink<W>
where
    W: Write,
{
    /// Writes `text` framed by `paint` and terminated by a newline.
    pub fn write_line(&mut self, text: &str, paint: Paint<'_>) -> io::Result<()> {
        self.scratch.clear();
        paint.open(&mut self.scratch);
        self.scratch.extend_from_slice(text.as_bytes());
        paint.close(&mut self.scratch);
        self.scratch.push(b'\n');
        self.writer.write_all(&self.scratch)
    }
}
