//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Configuration file could not be used
    ConfigError(String),
    /// No text was supplied through any input channel
    NoInput,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::NoInput => write!(f, "No input: pass TEXT, --input FILE, or pipe stdin"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<arli_core::Error> for CliError {
    fn from(err: arli_core::Error) -> Self {
        match err {
            arli_core::Error::Config(msg) => CliError::ConfigError(msg),
            other => CliError::ConfigError(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("test.txt".to_string());
        assert_eq!(error.to_string(), "File not found: test.txt");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_no_input_display() {
        assert!(CliError::NoInput.to_string().starts_with("No input"));
    }

    #[test]
    fn test_from_core_error() {
        let core = arli_core::Error::InvalidOption {
            option: "removeTatweel",
            value: "some".to_string(),
        };
        let error = CliError::from(core);
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid value for option `removeTatweel`: some"
        );
    }

    #[test]
    fn test_error_with_arabic_path() {
        let error = CliError::FileNotFound("نص/ملف.txt".to_string());
        assert_eq!(error.to_string(), "File not found: نص/ملف.txt");
    }

    #[test]
    fn test_cli_result_type_alias() {
        let failure: CliResult<String> = Err(anyhow::anyhow!("test error"));
        assert!(failure.unwrap_err().to_string().contains("test error"));
    }
}
