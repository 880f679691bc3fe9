//! Patient records

use super::errors::RecordError;
use super::fields;
use super::ids::PatientId;
use crate::core::codec::{check_arity, RecordKind};
use crate::core::lookup::{Keyed, Named, Revisable};
use serde::Serialize;

/// A patient registered at the hospital
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patient {
    id: PatientId,
    name: String,
    disease: String,
    gender: String,
    age: u32,
}

/// Replacement values for every field of a [`Patient`] except its id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientChanges {
    pub name: String,
    pub disease: String,
    pub gender: String,
    pub age: i64,
}

impl Patient {
    /// Creates a new patient record
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::ConstraintViolation`] if `age` is negative or a text
    /// field contains the delimiter or a line break.
    pub fn new(
        id: PatientId,
        name: impl Into<String>,
        disease: impl Into<String>,
        gender: impl Into<String>,
        age: i64,
    ) -> Result<Self, RecordError> {
        Ok(Self {
            id,
            name: fields::text("name", name)?,
            disease: fields::text("disease", disease)?,
            gender: fields::text("gender", gender)?,
            age: fields::non_negative("age", age)?,
        })
    }

    pub fn id(&self) -> PatientId {
        self.id
    }

    pub fn disease(&self) -> &str {
        &self.disease
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

impl RecordKind for Patient {
    const KIND: &'static str = "patient";
    const HEADER: &'static str = "id_Name_Disease_Gender_Age";
    const COLUMNS: &'static [&'static str] = &["ID", "Name", "Disease", "Gender", "Age"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.disease.clone(),
            self.gender.clone(),
            self.age.to_string(),
        ]
    }

    fn from_fields(f: &[&str]) -> Result<Self, RecordError> {
        check_arity(Self::COLUMNS.len(), f.len())?;
        Self::new(f[0].parse()?, f[1], f[2], f[3], fields::integer("age", f[4])?)
    }
}

impl Keyed for Patient {
    type Key = PatientId;

    fn key(&self) -> PatientId {
        self.id
    }
}

impl Named for Patient {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Revisable for Patient {
    type Changes = PatientChanges;

    fn revise(&self, changes: PatientChanges) -> Result<Self, RecordError> {
        Self::new(
            self.id,
            changes.name,
            changes.disease,
            changes.gender,
            changes.age,
        )
    }
}
