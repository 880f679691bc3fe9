//! Doctor records

use super::errors::RecordError;
use super::fields;
use super::ids::DoctorId;
use crate::core::codec::{check_arity, RecordKind};
use crate::core::lookup::{Keyed, Named, Revisable};
use serde::Serialize;

/// A doctor working at the hospital
///
/// Values are immutable once built; use [`Revisable::revise`] to derive an edited copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Doctor {
    id: DoctorId,
    name: String,
    specialty: String,
    working_hours: String,
    qualification: String,
    room_number: u32,
}

/// Replacement values for every field of a [`Doctor`] except its id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorChanges {
    pub name: String,
    pub specialty: String,
    pub working_hours: String,
    pub qualification: String,
    pub room_number: i64,
}

impl Doctor {
    /// Creates a new doctor record
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::ConstraintViolation`] if `room_number` is not positive
    /// or a text field contains the delimiter or a line break.
    ///
    /// # Examples
    ///
    /// ```
    /// use ahms::core::codec::RecordKind;
    /// use ahms::domain::{Doctor, DoctorId};
    ///
    /// let doctor = Doctor::new(
    ///     DoctorId::new(101).unwrap(),
    ///     "A. Smith",
    ///     "Cardiology",
    ///     "7am-10pm",
    ///     "MD",
    ///     12,
    /// )
    /// .unwrap();
    /// assert_eq!(doctor.encode(), "101_A. Smith_Cardiology_7am-10pm_MD_12");
    /// ```
    pub fn new(
        id: DoctorId,
        name: impl Into<String>,
        specialty: impl Into<String>,
        working_hours: impl Into<String>,
        qualification: impl Into<String>,
        room_number: i64,
    ) -> Result<Self, RecordError> {
        Ok(Self {
            id,
            name: fields::text("name", name)?,
            specialty: fields::text("specialty", specialty)?,
            working_hours: fields::text("working_hours", working_hours)?,
            qualification: fields::text("qualification", qualification)?,
            room_number: fields::positive("room_number", room_number)?,
        })
    }

    pub fn id(&self) -> DoctorId {
        self.id
    }

    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    pub fn working_hours(&self) -> &str {
        &self.working_hours
    }

    pub fn qualification(&self) -> &str {
        &self.qualification
    }

    pub fn room_number(&self) -> u32 {
        self.room_number
    }
}

impl RecordKind for Doctor {
    const KIND: &'static str = "doctor";
    const HEADER: &'static str = "id_name_specilist_timing_qualification_roomNb";
    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "Name",
        "Specialization",
        "Timing",
        "Qualification",
        "Room No.",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.specialty.clone(),
            self.working_hours.clone(),
            self.qualification.clone(),
            self.room_number.to_string(),
        ]
    }

    fn from_fields(f: &[&str]) -> Result<Self, RecordError> {
        check_arity(Self::COLUMNS.len(), f.len())?;
        Self::new(
            f[0].parse()?,
            f[1],
            f[2],
            f[3],
            f[4],
            fields::integer("room_number", f[5])?,
        )
    }
}

impl Keyed for Doctor {
    type Key = DoctorId;

    fn key(&self) -> DoctorId {
        self.id
    }
}

impl Named for Doctor {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Revisable for Doctor {
    type Changes = DoctorChanges;

    fn revise(&self, changes: DoctorChanges) -> Result<Self, RecordError> {
        Self::new(
            self.id,
            changes.name,
            changes.specialty,
            changes.working_hours,
            changes.qualification,
            changes.room_number,
        )
    }
}
