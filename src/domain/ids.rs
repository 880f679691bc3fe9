//! Record identifier types with validation
//!
//! Doctor and patient ids are both plain integers in the resource files but obey
//! different rules, so each gets its own newtype and they cannot be mixed up.

use super::errors::RecordError;
use super::fields;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Doctor identifier
///
/// Always strictly positive.
///
/// # Examples
///
/// ```
/// use ahms::domain::ids::DoctorId;
///
/// let id = DoctorId::new(101).unwrap();
/// assert_eq!(id.get(), 101);
/// assert!(DoctorId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DoctorId(u32);

impl DoctorId {
    /// Creates a new DoctorId, rejecting zero and negative values
    pub fn new(id: i64) -> Result<Self, RecordError> {
        fields::positive("id", id).map(Self)
    }

    /// Returns the numeric value
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DoctorId {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(fields::integer("id", s)?)
    }
}

/// Patient identifier
///
/// Zero is a valid patient id; negative values are not.
///
/// # Examples
///
/// ```
/// use ahms::domain::ids::PatientId;
/// use std::str::FromStr;
///
/// let id = PatientId::from_str("0").unwrap();
/// assert_eq!(id.get(), 0);
/// assert!(PatientId::new(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PatientId(u32);

impl PatientId {
    /// Creates a new PatientId, rejecting negative values
    pub fn new(id: i64) -> Result<Self, RecordError> {
        fields::non_negative("id", id).map(Self)
    }

    /// Returns the numeric value
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PatientId {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(fields::integer("id", s)?)
    }
}
