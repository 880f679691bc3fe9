//! Record kind descriptor and line codec
//!
//! Every record kind is a flat list of text fields joined by [`DELIMITER`]. The
//! [`RecordKind`] trait carries what differs between kinds (header text, column labels,
//! field order and coercion) so the store, lookup and table code is written once.

use crate::domain::errors::RecordError;
use crate::domain::fields::DELIMITER;
use std::fmt;

/// How the first line of a resource is treated when reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderPolicy {
    /// The first line must equal [`RecordKind::HEADER`] exactly
    Exact,
    /// The first line is read and ignored
    Discard,
}

/// Describes one record kind and its text encoding
pub trait RecordKind: Sized + Clone + PartialEq + fmt::Debug {
    /// Short lowercase name used in diagnostics and logs
    const KIND: &'static str;

    /// Header line written at the top of the resource (without line terminator)
    const HEADER: &'static str;

    /// Whether the header is checked on read
    const HEADER_POLICY: HeaderPolicy = HeaderPolicy::Exact;

    /// Display labels, one per field, in encoding order
    const COLUMNS: &'static [&'static str];

    /// Field values as text, in encoding order
    fn fields(&self) -> Vec<String>;

    /// Builds a record from already-split fields
    ///
    /// Implementations call [`check_arity`] before indexing, since the method is
    /// public and may be handed a slice of any length.
    fn from_fields(fields: &[&str]) -> Result<Self, RecordError>;

    /// Encodes the record as a single line without terminator
    fn encode(&self) -> String {
        self.fields().join(&DELIMITER.to_string())
    }

    /// Decodes a single line (without terminator)
    fn decode(line: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.split(DELIMITER).collect();
        check_arity(Self::COLUMNS.len(), fields.len())?;
        Self::from_fields(&fields)
    }
}

/// Fails with [`RecordError::ArityMismatch`] unless `found == expected`.
pub fn check_arity(expected: usize, found: usize) -> Result<(), RecordError> {
    if expected != found {
        return Err(RecordError::ArityMismatch { expected, found });
    }
    Ok(())
}
