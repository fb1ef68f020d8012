//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::error::CliError;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("input.txt");

        let content = "السعر 1,250.5 ريال?\n";
        fs::write(&file_path, content).unwrap();

        let result = FileReader::read_text(&file_path).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let result = FileReader::read_text(Path::new("/nonexistent/file.txt"));
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("File not found"));
    }

    #[test]
    fn test_read_text_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("binary.bin");
        fs::write(&file_path, [0xFF, 0xFE, 0xFD]).unwrap();

        let err_msg = FileReader::read_text(&file_path).unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_read_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");
        fs::write(&file_path, "").unwrap();

        assert_eq!(FileReader::read_text(&file_path).unwrap(), "");
    }
}
