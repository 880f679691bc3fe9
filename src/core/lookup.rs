//! Linear lookup and edit-by-key over record sequences
//!
//! Keys are expected to be unique but nothing enforces it; every search scans from
//! the front and the first match wins.

use super::codec::RecordKind;
use crate::domain::errors::RecordError;
use std::fmt;

/// A record kind with a lookup key
pub trait Keyed: RecordKind {
    /// Key type (numeric id, or the name for label-like kinds)
    type Key: PartialEq + fmt::Display;

    /// Returns the record's key
    fn key(&self) -> Self::Key;
}

/// A record kind with a human name
pub trait Named {
    /// Returns the record's name field
    fn name(&self) -> &str;
}

/// A keyed record kind whose non-key fields can be replaced
pub trait Revisable: Keyed {
    /// New values for every non-key field
    type Changes;

    /// Builds a replacement record that keeps this record's key
    fn revise(&self, changes: Self::Changes) -> Result<Self, RecordError>;
}

/// A replacement record together with the position it belongs at
#[derive(Debug, Clone, PartialEq)]
pub struct Edit<K> {
    /// Index of the record being replaced
    pub position: usize,
    /// The replacement value
    pub record: K,
}

/// Returns the first record whose key equals `key`.
pub fn find_by_key<'a, K: Keyed>(records: &'a [K], key: &K::Key) -> Option<&'a K> {
    position_of(records, key).map(|position| &records[position])
}

/// Returns the first record whose name equals `name`, ignoring case.
pub fn find_by_name<'a, K: Named>(records: &'a [K], name: &str) -> Option<&'a K> {
    let wanted = name.to_lowercase();
    records
        .iter()
        .find(|record| record.name().to_lowercase() == wanted)
}

/// Builds a replacement for the first record whose key equals `key`.
///
/// Returns `Ok(None)` when no record matches; the sequence is never touched here and
/// the caller decides whether to apply the returned [`Edit`].
///
/// # Errors
///
/// Returns an error if the new values break the record's invariants.
pub fn edit_by_key<K: Revisable>(
    records: &[K],
    key: &K::Key,
    changes: K::Changes,
) -> Result<Option<Edit<K>>, RecordError> {
    let Some(position) = position_of(records, key) else {
        return Ok(None);
    };
    let record = records[position].revise(changes)?;
    Ok(Some(Edit { position, record }))
}

fn position_of<K: Keyed>(records: &[K], key: &K::Key) -> Option<usize> {
    records.iter().position(|record| record.key() == *key)
}
