//! Error handling types for vfsync
//!
//! This module provides the error type shared by the store, the URI layer
//! and the serve loop.

use thiserror::Error;

/// Comprehensive error type for virtual file system operations
#[derive(Debug, Error)]
pub enum VfsError {
    /// Document not found in store
    #[error("Document not found: {uri}")]
    DocumentNotFound { uri: String },

    /// A Windows path decomposed into no segments at all
    #[error("Path has no usable segments: {path}")]
    EmptyPathSegments { path: String },

    /// The input could not be parsed as a URI
    #[error("Invalid URI: {uri}")]
    InvalidUri { uri: String },

    /// Configuration error
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// Malformed or unsupported inbound message
    #[error("Protocol error: {message}")]
    Protocol { message: String },

    /// The store actor is no longer running
    #[error("VFS actor channel closed")]
    ChannelClosed,

    /// JSON (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for VFS operations
pub type VfsResult<T> = Result<T, VfsError>;

/// Helper functions for common error patterns
impl VfsError {
    /// Create a document not found error
    pub fn document_not_found(uri: impl Into<String>) -> Self {
        VfsError::DocumentNotFound { uri: uri.into() }
    }

    /// Create an empty path segments error
    pub fn empty_path_segments(path: impl Into<String>) -> Self {
        VfsError::EmptyPathSegments { path: path.into() }
    }

    /// Create an invalid URI error
    pub fn invalid_uri(uri: impl Into<String>) -> Self {
        VfsError::InvalidUri { uri: uri.into() }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        VfsError::Config {
            message: message.into(),
        }
    }

    /// Create a protocol error
    pub fn protocol(message: impl Into<String>) -> Self {
        VfsError::Protocol {
            message: message.into(),
        }
    }
}

impl<T> From<tokio::sync::mpsc::error::SendError<T>> for VfsError {
    fn from(_: tokio::sync::mpsc::error::SendError<T>) -> Self {
        VfsError::ChannelClosed
    }
}

impl From<tokio::sync::oneshot::error::RecvError> for VfsError {
    fn from(_: tokio::sync::oneshot::error::RecvError) -> Self {
        VfsError::ChannelClosed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_not_found_message_includes_uri() {
        let err = VfsError::document_not_found("file:///a.hs");
        assert_eq!(err.to_string(), "Document not found: file:///a.hs");
    }

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn fails() -> VfsResult<()> {
            Err(std::io::Error::other("disk full"))?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert!(matches!(err, VfsError::Io(_)));
        assert!(err.to_string().contains("disk full"));
    }
}
