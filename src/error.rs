//! Error types for the file server
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Serve Error Enum ==
/// Failures while turning a request path into file content.
///
/// None of these reach the client as-is: the handler answers every one of
/// them with the 404 page.
#[derive(Error, Debug)]
pub enum ServeError {
    /// No file (or directory index) exists for the path
    #[error("Not found: {0}")]
    NotFound(String),

    /// Path tries to leave the document root
    #[error("Path escapes document root: {0}")]
    Forbidden(String),

    /// File exists but could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ServeError {
    /// True for outcomes that are routine for a file server (missing files,
    /// rejected paths), as opposed to real I/O trouble worth a warning.
    pub fn is_expected(&self) -> bool {
        !matches!(self, ServeError::Io { .. })
    }
}

// == Result Type Alias ==
/// Convenience Result type for the file server.
pub type Result<T> = std::result::Result<T, ServeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let err = ServeError::NotFound("/nope".to_string());
        assert_eq!(err.to_string(), "Not found: /nope");

        let err = ServeError::Io {
            path: "./serverroot/x".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to read ./serverroot/x: denied");
    }

    #[test]
    fn test_is_expected() {
        assert!(ServeError::NotFound("/a".to_string()).is_expected());
        assert!(ServeError::Forbidden("/../a".to_string()).is_expected());
        assert!(!ServeError::Io {
            path: "a".to_string(),
            source: io::Error::new(io::ErrorKind::Other, "boom"),
        }
        .is_expected());
    }
}
