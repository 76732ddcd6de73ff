//! Error types for the redaction service.
//!
//! This module provides a comprehensive error handling strategy with proper
//! error categorization and context preservation. Variants map onto the
//! failure taxonomy the HTTP layer exposes: validation errors, not-found
//! errors, engine errors, and storage errors.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type alias for redaction operations.
pub type RedactResult<T> = Result<T, RedactError>;

/// Comprehensive error type for all redaction operations.
///
/// This enum categorizes errors by their source and provides rich context
/// for debugging and error recovery.
#[derive(Debug)]
pub enum RedactError {
    /// Error occurred while reading or writing files
    Io { path: PathBuf, source: io::Error },

    /// Invalid configuration or parameters
    InvalidInput { parameter: String, reason: String },

    /// Redaction-item payload could not be parsed or validated
    MalformedItems { reason: String },

    /// Error occurred during PDF processing
    PdfProcessing {
        message: String,
        page: Option<usize>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Structured text extraction failed
    TextExtraction {
        reason: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Backend-specific error (MuPDF, tokio, etc.)
    BackendError {
        backend: String,
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Remote object does not exist in the given bucket
    ObjectNotFound { bucket: String, path: String },

    /// Object storage request failed
    Storage {
        operation: String,
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl RedactError {
    /// Returns true for errors caused by a malformed or invalid request,
    /// as opposed to engine or storage failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::MalformedItems { .. }
        )
    }
}

impl fmt::Display for RedactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "IO error for path '{}': {}", path.display(), source)
            }
            Self::InvalidInput { parameter, reason } => {
                write!(f, "Invalid input for '{}': {}", parameter, reason)
            }
            Self::MalformedItems { reason } => {
                write!(f, "Malformed redaction items: {}", reason)
            }
            Self::PdfProcessing { message, page, .. } => {
                if let Some(p) = page {
                    write!(f, "PDF processing error on page {}: {}", p, message)
                } else {
                    write!(f, "PDF processing error: {}", message)
                }
            }
            Self::TextExtraction { reason, .. } => {
                write!(f, "Text extraction failed: {}", reason)
            }
            Self::BackendError {
                backend, message, ..
            } => {
                write!(f, "{} backend error: {}", backend, message)
            }
            Self::ObjectNotFound { bucket, path } => {
                write!(f, "Object '{}' not found in bucket '{}'", path, bucket)
            }
            Self::Storage {
                operation, message, ..
            } => {
                write!(f, "Storage {} failed: {}", operation, message)
            }
        }
    }
}

impl std::error::Error for RedactError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::PdfProcessing { source, .. }
            | Self::TextExtraction { source, .. }
            | Self::BackendError { source, .. }
            | Self::Storage { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn std::error::Error + 'static)),
            _ => None,
        }
    }
}

// Conversion implementations for common error types
impl From<io::Error> for RedactError {
    fn from(err: io::Error) -> Self {
        Self::BackendError {
            backend: "std::io".to_string(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_json::Error> for RedactError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedItems {
            reason: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for RedactError {
    fn from(err: reqwest::Error) -> Self {
        Self::Storage {
            operation: "request".to_string(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RedactError::ObjectNotFound {
            bucket: "documents".to_string(),
            path: "report.pdf".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Object 'report.pdf' not found in bucket 'documents'"
        );

        let err = RedactError::PdfProcessing {
            message: "bad xref".to_string(),
            page: Some(3),
            source: None,
        };
        assert_eq!(err.to_string(), "PDF processing error on page 3: bad xref");
    }

    #[test]
    fn test_validation_classification() {
        let err = RedactError::MalformedItems {
            reason: "not an array".to_string(),
        };
        assert!(err.is_validation());

        let err = RedactError::BackendError {
            backend: "MuPDF".to_string(),
            message: "boom".to_string(),
            source: None,
        };
        assert!(!err.is_validation());
    }

    #[test]
    fn test_json_error_maps_to_malformed_items() {
        let json_err = serde_json::from_str::<Vec<i32>>("{not json").unwrap_err();
        let err = RedactError::from(json_err);
        assert!(matches!(err, RedactError::MalformedItems { .. }));
    }
}
