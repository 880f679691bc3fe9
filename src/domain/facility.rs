//! Hospital facility records

use super::errors::RecordError;
use super::fields;
use crate::core::codec::{check_arity, HeaderPolicy, RecordKind};
use crate::core::lookup::{Keyed, Named};
use serde::Serialize;

/// A hospital facility, identified only by its name
///
/// A facility occupies a whole line on its own, so unlike the other kinds its name
/// may contain the field delimiter. Because blank lines are skipped on read and each
/// line is trimmed, a name must be non-blank and free of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facility {
    name: String,
}

impl Facility {
    /// Creates a new facility
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::ConstraintViolation`] if the name is blank, has leading
    /// or trailing whitespace, or contains a line break.
    pub fn new(name: impl Into<String>) -> Result<Self, RecordError> {
        let name = fields::single_line("name", name)?;
        if name.trim().is_empty() {
            return Err(RecordError::constraint("name", "must not be empty"));
        }
        if name.trim() != name {
            return Err(RecordError::constraint(
                "name",
                "must not start or end with whitespace",
            ));
        }
        Ok(Self { name })
    }
}

impl RecordKind for Facility {
    const KIND: &'static str = "facility";
    const HEADER: &'static str = "Hospital Facilities are:";
    const HEADER_POLICY: HeaderPolicy = HeaderPolicy::Discard;
    const COLUMNS: &'static [&'static str] = &["Facility"];

    fn fields(&self) -> Vec<String> {
        vec![self.name.clone()]
    }

    fn from_fields(f: &[&str]) -> Result<Self, RecordError> {
        check_arity(Self::COLUMNS.len(), f.len())?;
        Self::new(f[0])
    }

    fn encode(&self) -> String {
        self.name.clone()
    }

    fn decode(line: &str) -> Result<Self, RecordError> {
        Self::new(line.trim())
    }
}

impl Keyed for Facility {
    type Key = String;

    fn key(&self) -> String {
        self.name.clone()
    }
}

impl Named for Facility {
    fn name(&self) -> &str {
        &self.name
    }
}
