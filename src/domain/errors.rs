//! Domain error types
//!
//! Errors are layered the same way the data is: a [`RecordError`] describes what is
//! wrong with one record value or one encoded line, a [`StoreError`] places that
//! failure inside a resource (file path and line number), and [`AhmsError`] is the
//! application-wide error used by configuration, logging and the console layer.

use std::path::PathBuf;
use thiserror::Error;

/// Main AHMS error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum AhmsError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Resource-level failures (loading or saving a record file)
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A single record failed to build or decode
    #[error("Invalid record: {0}")]
    Record(#[from] RecordError),

    /// Interactive input could not be read
    #[error("Input error: {0}")]
    Input(String),

    /// The input stream ended while a value was still expected
    #[error("Input closed")]
    InputClosed,

    /// I/O errors outside of record resources
    #[error("I/O error: {0}")]
    Io(String),
}

/// Errors raised while constructing or decoding a single record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A data line does not split into the exact number of fields for its kind
    #[error("expected {expected} fields, found {found}")]
    ArityMismatch { expected: usize, found: usize },

    /// A field could not be coerced to its declared type
    #[error("field '{field}' has invalid value '{value}'")]
    InvalidField { field: &'static str, value: String },

    /// A field value breaks one of the record's invariants
    #[error("field '{field}' {reason}")]
    ConstraintViolation { field: &'static str, reason: String },
}

impl RecordError {
    pub(crate) fn constraint(field: &'static str, reason: impl Into<String>) -> Self {
        RecordError::ConstraintViolation {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors raised while reading or writing a record resource
#[derive(Debug, Error)]
pub enum StoreError {
    /// The first line of the resource is not the header expected for its kind
    #[error("{kind} resource {} has header '{found}', expected '{expected}'", resource.display())]
    HeaderMismatch {
        kind: &'static str,
        resource: PathBuf,
        expected: &'static str,
        found: String,
    },

    /// A data line could not be decoded
    #[error("{kind} resource {} line {line}: {source}", resource.display())]
    Record {
        kind: &'static str,
        resource: PathBuf,
        line: usize,
        #[source]
        source: RecordError,
    },

    /// The resource is missing, unreadable or unwritable
    #[error("{kind} resource {} is unavailable: {source}", resource.display())]
    ResourceUnavailable {
        kind: &'static str,
        resource: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Path of the resource the error refers to
    pub fn resource(&self) -> &std::path::Path {
        match self {
            StoreError::HeaderMismatch { resource, .. }
            | StoreError::Record { resource, .. }
            | StoreError::ResourceUnavailable { resource, .. } => resource,
        }
    }

    /// Returns the underlying record error for line-level failures
    pub fn record_error(&self) -> Option<&RecordError> {
        match self {
            StoreError::Record { source, .. } => Some(source),
            _ => None,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for AhmsError {
    fn from(err: std::io::Error) -> Self {
        AhmsError::Io(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for AhmsError {
    fn from(err: toml::de::Error) -> Self {
        AhmsError::Configuration(format!("TOML parse error: {err}"))
    }
}
