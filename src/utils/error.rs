//! Error handling for Kaeng
//!
//! Layout conversion itself never fails. This error type covers the
//! collaborators around it: clipboard, storage, telemetry and argument
//! parsing.

use std::fmt;

/// Kaeng error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KaengError {
    /// Invalid input (unknown direction, platform, theme name, ...)
    InvalidInput { message: String },
    /// Clipboard could not be read or written
    ClipboardError { message: String },
    /// Preference storage could not be read or written
    StorageError { message: String },
    /// Visitor counter request or response failed
    TelemetryError { message: String },
    /// Operation not available in this build or environment
    NotSupported { feature: String },
    /// IO error (for file operations)
    IoError { message: String },
}

impl fmt::Display for KaengError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KaengError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            KaengError::ClipboardError { message } => write!(f, "Clipboard error: {}", message),
            KaengError::StorageError { message } => write!(f, "Storage error: {}", message),
            KaengError::TelemetryError { message } => write!(f, "Telemetry error: {}", message),
            KaengError::NotSupported { feature } => write!(f, "Not supported: {}", feature),
            KaengError::IoError { message } => write!(f, "IO error: {}", message),
        }
    }
}

impl std::error::Error for KaengError {}

impl From<std::io::Error> for KaengError {
    fn from(err: std::io::Error) -> Self {
        KaengError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for collaborator operations
pub type KaengResult<T> = Result<T, KaengError>;

// Convenience constructors for errors
impl KaengError {
    pub fn invalid(message: impl Into<String>) -> Self {
        KaengError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn clipboard(message: impl Into<String>) -> Self {
        KaengError::ClipboardError {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        KaengError::StorageError {
            message: message.into(),
        }
    }

    pub fn telemetry(message: impl Into<String>) -> Self {
        KaengError::TelemetryError {
            message: message.into(),
        }
    }

    pub fn not_supported(feature: impl Into<String>) -> Self {
        KaengError::NotSupported {
            feature: feature.into(),
        }
    }
}
