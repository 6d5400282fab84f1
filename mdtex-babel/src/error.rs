//! Error types for format operations
//!
//! Parsing and rendering never fail; these errors only come from selecting a format or
//! handing it options it does not understand.

use thiserror::Error;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// An option the format does not know about
    #[error("Unknown option '{0}'")]
    UnknownOption(String),
    /// A known option with a value that cannot be used
    #[error("Invalid value '{value}' for option '{key}'")]
    InvalidOption { key: String, value: String },
    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}
