//! Centralized error handling for ferrofetch

use std::fmt;
use std::io;

/// Custom error type for ferrofetch operations
#[derive(Debug)]
pub enum FerrofetchError {
    /// I/O errors (file reading, command execution)
    Io(io::Error),
    /// Configuration errors (unreadable or invalid config file)
    Config(String),
    /// System detection errors (a mandatory system source is unreadable)
    Detection(String),
}

impl fmt::Display for FerrofetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FerrofetchError::Io(err) => write!(f, "I/O error: {}", err),
            FerrofetchError::Config(msg) => write!(f, "Config error: {}", msg),
            FerrofetchError::Detection(msg) => write!(f, "Detection error: {}", msg),
        }
    }
}

impl std::error::Error for FerrofetchError {}

impl From<io::Error> for FerrofetchError {
    fn from(error: io::Error) -> Self {
        FerrofetchError::Io(error)
    }
}

/// Type alias for Results in ferrofetch
pub type Result<T> = std::result::Result<T, FerrofetchError>;
