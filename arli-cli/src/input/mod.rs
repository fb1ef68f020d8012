//! Input handling

mod file_reader;

pub use file_reader::FileReader;

use anyhow::{Context, Result};
use std::io::{self, Read};

/// Read all of stdin as one string
pub fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut text)
        .context("Failed to read from stdin")?;
    Ok(text)
}
