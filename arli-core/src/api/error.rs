//! Error types for the API

use thiserror::Error;

/// Error type for option parsing and configuration loading
///
/// The transformation itself cannot fail; only building options from
/// external text can.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An option was given a value outside its allowed set
    #[error("Invalid value for option `{option}`: {value}")]
    InvalidOption {
        /// External option name, e.g. `dateFrom`
        option: &'static str,
        /// The rejected value
        value: String,
    },

    /// Configuration text could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
