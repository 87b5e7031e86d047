//! Shell Error Types
//!
//! Error handling for configuration and window operations.

use thiserror::Error;

/// Shell-specific errors
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Window error: {0}")]
    Window(String),

    #[error("Configuration directory could not be resolved")]
    NoConfigDir,
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ShellError {
    fn from(err: serde_json::Error) -> Self {
        ShellError::Serialization(err.to_string())
    }
}

impl From<url::ParseError> for ShellError {
    fn from(err: url::ParseError) -> Self {
        ShellError::InvalidUrl(err.to_string())
    }
}

impl From<tauri::Error> for ShellError {
    fn from(err: tauri::Error) -> Self {
        ShellError::Window(err.to_string())
    }
}

/// Result type alias for shell operations
pub type ShellResult<T> = Result<T, ShellError>;
