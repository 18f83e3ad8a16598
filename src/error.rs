//! # Error Types
//!
//! This module defines error types used throughout the danfce library.

use thiserror::Error;

/// Main error type for danfce operations
#[derive(Debug, Error)]
pub enum DanfceError {
    /// The source document could not be read, or was empty
    #[error("Document load error: {0}")]
    DocumentLoad(String),

    /// The source document is not well-formed NFC-e XML
    #[error("Document parse error: {0}")]
    DocumentParse(String),

    /// Render configuration out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Logo loading or conversion error
    #[error("Image error: {0}")]
    Image(String),

    /// Printer backend rejected a directive
    #[error("Backend error: {0}")]
    Backend(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for danfce operations
pub type Result<T> = std::result::Result<T, DanfceError>;
