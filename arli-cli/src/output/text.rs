//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Text formatter - writes the transformed text followed by a newline
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn write_result(&mut self, _input: &str, output: &str) -> Result<()> {
        writeln!(self.writer, "{output}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
