//! Text resource persistence and the in-memory record store
//!
//! A resource is a text file holding one record kind: a header line, then one
//! encoded record per line. There are two independent write paths:
//!
//! - [`write_all`] truncates the resource and rewrites header plus every record
//! - [`append_one`] adds a single record to the end of the resource without
//!   touching what is already there
//!
//! Nothing coordinates the two. A `write_all` from one session overwrites records
//! appended by another.

use super::codec::{HeaderPolicy, RecordKind};
use super::lookup::{self, Edit, Keyed, Named, Revisable};
use crate::domain::errors::{RecordError, StoreError};
use crate::{log_records_loaded, log_records_saved};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Reads every record of kind `K` from `resource`.
///
/// # Errors
///
/// Fails as a whole on the first problem: a missing or unreadable file, a header that
/// does not match, or any line that cannot be decoded.
pub fn read_all<K: RecordKind>(resource: &Path) -> Result<Vec<K>, StoreError> {
    let file = File::open(resource).map_err(|source| unavailable::<K>(resource, source))?;
    read_records(BufReader::new(file), resource)
}

/// Reads records of kind `K` from any buffered reader.
///
/// `resource` is only used to label errors.
pub fn read_records<K: RecordKind, R: BufRead>(
    reader: R,
    resource: &Path,
) -> Result<Vec<K>, StoreError> {
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line.map_err(|source| unavailable::<K>(resource, source))?,
        None => String::new(),
    };
    let header = header.trim_end_matches('\r');
    if K::HEADER_POLICY == HeaderPolicy::Exact && header != K::HEADER {
        return Err(StoreError::HeaderMismatch {
            kind: K::KIND,
            resource: resource.to_path_buf(),
            expected: K::HEADER,
            found: header.to_string(),
        });
    }

    let mut records = Vec::new();
    for (index, line) in lines.enumerate() {
        let line = line.map_err(|source| unavailable::<K>(resource, source))?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let record = K::decode(line).map_err(|source| malformed::<K>(resource, index + 2, source))?;
        records.push(record);
    }

    Ok(records)
}

/// Replaces the contents of `resource` with the header and `records`.
///
/// # Errors
///
/// Returns [`StoreError::ResourceUnavailable`] if the file cannot be created or written.
pub fn write_all<K: RecordKind>(resource: &Path, records: &[K]) -> Result<(), StoreError> {
    let file = File::create(resource).map_err(|source| unavailable::<K>(resource, source))?;
    let mut writer = BufWriter::new(file);
    write_records(&mut writer, records)
        .and_then(|_| writer.flush())
        .map_err(|source| unavailable::<K>(resource, source))
}

/// Writes the header and `records` to any writer, one line each.
pub fn write_records<K: RecordKind, W: Write>(writer: &mut W, records: &[K]) -> io::Result<()> {
    writeln!(writer, "{}", K::HEADER)?;
    for record in records {
        writeln!(writer, "{}", record.encode())?;
    }
    Ok(())
}

/// Appends one record to the end of an existing `resource`.
///
/// A line break is written before the record, so the resource never needs to end
/// with one. The resource must already exist; it is not created here because a
/// file without its header could not be read back.
///
/// # Errors
///
/// Returns [`StoreError::ResourceUnavailable`] if the file cannot be opened or written.
pub fn append_one<K: RecordKind>(resource: &Path, record: &K) -> Result<(), StoreError> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(resource)
        .map_err(|source| unavailable::<K>(resource, source))?;
    write!(file, "\n{}", record.encode()).map_err(|source| unavailable::<K>(resource, source))
}

fn unavailable<K: RecordKind>(resource: &Path, source: io::Error) -> StoreError {
    StoreError::ResourceUnavailable {
        kind: K::KIND,
        resource: resource.to_path_buf(),
        source,
    }
}

fn malformed<K: RecordKind>(resource: &Path, line: usize, source: RecordError) -> StoreError {
    StoreError::Record {
        kind: K::KIND,
        resource: resource.to_path_buf(),
        line,
        source,
    }
}

/// Ordered in-memory records of one kind, tied to the resource they persist to
#[derive(Debug, Clone)]
pub struct RecordStore<K> {
    resource: PathBuf,
    records: Vec<K>,
}

impl<K: RecordKind> RecordStore<K> {
    /// Creates an empty store for `resource` without reading it
    pub fn new(resource: impl Into<PathBuf>) -> Self {
        Self {
            resource: resource.into(),
            records: Vec::new(),
        }
    }

    /// Loads every record from `resource`
    ///
    /// # Errors
    ///
    /// See [`read_all`].
    pub fn load(resource: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let resource = resource.into();
        let records = read_all(&resource)?;
        log_records_loaded!(K::KIND, resource.display(), records.len());
        Ok(Self { resource, records })
    }

    pub fn resource(&self) -> &Path {
        &self.resource
    }

    pub fn records(&self) -> &[K] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Adds a record to the end of the in-memory sequence only
    pub fn push(&mut self, record: K) {
        self.records.push(record);
    }

    /// Appends a record to the resource, then to the in-memory sequence
    ///
    /// # Errors
    ///
    /// See [`append_one`]. The in-memory sequence is unchanged on failure.
    pub fn append(&mut self, record: K) -> Result<(), StoreError> {
        append_one(&self.resource, &record)?;
        tracing::info!(
            kind = K::KIND,
            resource = %self.resource.display(),
            "Record appended"
        );
        self.records.push(record);
        Ok(())
    }

    /// Overwrites the resource with the full in-memory sequence
    ///
    /// # Errors
    ///
    /// See [`write_all`].
    pub fn save(&self) -> Result<(), StoreError> {
        write_all(&self.resource, &self.records)?;
        log_records_saved!(K::KIND, self.resource.display(), self.records.len());
        Ok(())
    }

    /// Swaps an edited record into its position
    ///
    /// Returns `false` if the position no longer exists.
    pub fn apply(&mut self, edit: Edit<K>) -> bool {
        match self.records.get_mut(edit.position) {
            Some(slot) => {
                *slot = edit.record;
                true
            }
            None => false,
        }
    }
}

impl<K: Keyed> RecordStore<K> {
    /// First record with the given key
    pub fn find_by_key(&self, key: &K::Key) -> Option<&K> {
        lookup::find_by_key(&self.records, key)
    }
}

impl<K: RecordKind + Named> RecordStore<K> {
    /// First record whose name matches, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<&K> {
        lookup::find_by_name(&self.records, name)
    }
}

impl<K: Revisable> RecordStore<K> {
    /// Builds a replacement for the record with the given key
    ///
    /// The store is not modified; pass the result to [`RecordStore::apply`].
    ///
    /// # Errors
    ///
    /// Returns an error if `changes` break the record's invariants.
    pub fn edit(&self, key: &K::Key, changes: K::Changes) -> Result<Option<Edit<K>>, RecordError> {
        lookup::edit_by_key(&self.records, key, changes)
    }
}
