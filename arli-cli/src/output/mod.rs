//! Output formatting module

use anyhow::Result;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one transformation
    fn write_result(&mut self, input: &str, output: &str) -> Result<()>;

    /// Finalize output (e.g., flush buffered writers)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
