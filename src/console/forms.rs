//! Interactive entry forms for each record kind

use super::input::{Console, LineReader};
use crate::domain::{
    Cost, Doctor, DoctorChanges, DoctorId, Facility, Laboratory, Patient, PatientChanges,
    PatientId, Result,
};
use std::io::Write;

pub fn enter_doctor<R: LineReader, W: Write>(console: &mut Console<R, W>) -> Result<Doctor> {
    let id = console.integer("Enter the doctor's ID: ")?;
    let name = console.text("Enter the doctor's name: ")?;
    let specialty = console.text("Enter the doctor's speciality: ")?;
    let working_hours = console.text("Enter the doctor's timing (e.g., 7am-10pm): ")?;
    let qualification = console.text("Enter the doctor's qualification: ")?;
    let room_number = console.integer("Enter the doctor's room number: ")?;
    Ok(Doctor::new(
        DoctorId::new(id)?,
        name,
        specialty,
        working_hours,
        qualification,
        room_number,
    )?)
}

pub fn enter_doctor_changes<R: LineReader, W: Write>(
    console: &mut Console<R, W>,
) -> Result<DoctorChanges> {
    Ok(DoctorChanges {
        name: console.text("Enter new name: ")?,
        specialty: console.text("Enter new speciality: ")?,
        working_hours: console.text("Enter new timing (e.g., 7am-10pm): ")?,
        qualification: console.text("Enter new qualification: ")?,
        room_number: console.integer("Enter new room number: ")?,
    })
}

pub fn enter_facility<R: LineReader, W: Write>(console: &mut Console<R, W>) -> Result<Facility> {
    let name = console.text("Enter facility name: ")?;
    Ok(Facility::new(name)?)
}

pub fn enter_laboratory<R: LineReader, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Laboratory> {
    let name = console.text("Enter Laboratory facility: ")?;
    let cost = Cost::new(console.decimal("Enter Laboratory cost: ")?)?;
    Ok(Laboratory::new(name, cost)?)
}

pub fn enter_patient<R: LineReader, W: Write>(console: &mut Console<R, W>) -> Result<Patient> {
    let id = console.integer("Enter Patient id: ")?;
    let name = console.text("Enter Patient name: ")?;
    let disease = console.text("Enter Patient disease: ")?;
    let gender = console.text("Enter Patient gender: ")?;
    let age = console.integer("Enter Patient age: ")?;
    Ok(Patient::new(PatientId::new(id)?, name, disease, gender, age)?)
}

pub fn enter_patient_changes<R: LineReader, W: Write>(
    console: &mut Console<R, W>,
) -> Result<PatientChanges> {
    Ok(PatientChanges {
        name: console.text("Enter new name: ")?,
        disease: console.text("Enter new disease: ")?,
        gender: console.text("Enter new gender: ")?,
        age: console.integer("Enter new age: ")?,
    })
}
