//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs one object per transformation
pub struct JsonFormatter<W: Write> {
    writer: W,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct TransformData {
    /// The text as received
    pub input: String,
    /// The transformed text
    pub output: String,
    /// Version of the transformation library
    pub version: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn write_result(&mut self, input: &str, output: &str) -> Result<()> {
        let data = TransformData {
            input: input.to_string(),
            output: output.to_string(),
            version: arli_core::VERSION.to_string(),
        };
        serde_json::to_writer_pretty(&mut self.writer, &data)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
