//! Interactive menu session over the four record stores
//!
//! "Add" actions append the new record to its resource directly. "Edit" actions swap
//! the replacement into the in-memory list and rewrite the whole resource.

use super::forms;
use super::input::{Console, LineReader};
use crate::config::ResourcesConfig;
use crate::core::codec::RecordKind;
use crate::core::lookup::Keyed;
use crate::core::store::RecordStore;
use crate::core::table::to_table;
use crate::domain::{AhmsError, Doctor, DoctorId, Facility, Laboratory, Patient, PatientId, Result};
use crate::log_error_with_context;
use std::io::Write;

const MAIN_MENU: &str = "
Welcome to Alberta Hospital (AH) Management system
Select from the following options, or select 5 to stop:
1 - Doctors
2 - Facilities
3 - Laboratories
4 - Patients
5 - Exit Program";

const DOCTORS_MENU: &str = "
Doctors Menu:
1 - Display Doctors list
2 - Search for doctor by ID
3 - Search for doctor by name
4 - Add doctor
5 - Edit doctor info
6 - Back to the Main Menu";

const FACILITIES_MENU: &str = "
Facilities Menu:
1 - Display Facilities list
2 - Add Facility
3 - Back to the Main Menu";

const LABORATORIES_MENU: &str = "
Laboratories Menu:
1 - Display laboratories list
2 - Add laboratory
3 - Back to the Main Menu";

const PATIENTS_MENU: &str = "
Patients Menu:
1 - Display patients list
2 - Search for patient by ID
3 - Add patient
4 - Edit patient info
5 - Back to the Main Menu";

const OPTION_PROMPT: &str = ">>> ";

/// The four record stores plus the console they are driven from
pub struct Session<R, W> {
    console: Console<R, W>,
    doctors: RecordStore<Doctor>,
    facilities: RecordStore<Facility>,
    laboratories: RecordStore<Laboratory>,
    patients: RecordStore<Patient>,
}

impl<R: LineReader, W: Write> Session<R, W> {
    /// Loads every resource named in `resources`
    ///
    /// # Errors
    ///
    /// Fails on the first resource that cannot be loaded.
    pub fn open(resources: &ResourcesConfig, console: Console<R, W>) -> Result<Self> {
        Ok(Self {
            console,
            doctors: RecordStore::load(resources.doctors_path())?,
            facilities: RecordStore::load(resources.facilities_path())?,
            laboratories: RecordStore::load(resources.laboratories_path())?,
            patients: RecordStore::load(resources.patients_path())?,
        })
    }

    pub fn doctors(&self) -> &RecordStore<Doctor> {
        &self.doctors
    }

    pub fn facilities(&self) -> &RecordStore<Facility> {
        &self.facilities
    }

    pub fn laboratories(&self) -> &RecordStore<Laboratory> {
        &self.laboratories
    }

    pub fn patients(&self) -> &RecordStore<Patient> {
        &self.patients
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Runs the main menu until the user exits or input ends
    ///
    /// # Errors
    ///
    /// Returns resource and I/O failures; invalid entries are reported and the menu
    /// continues.
    pub fn run(&mut self) -> Result<()> {
        tracing::debug!("Menu session started");
        loop {
            self.console.say(MAIN_MENU)?;
            let outcome = match self.console.integer(OPTION_PROMPT) {
                Ok(1) => self.doctors_menu(),
                Ok(2) => self.facilities_menu(),
                Ok(3) => self.laboratories_menu(),
                Ok(4) => self.patients_menu(),
                Ok(5) => {
                    self.console.say("Thanks for using the program. Bye!")?;
                    return Ok(());
                }
                Ok(other) => self.console.say(format!("Invalid option {other}")),
                Err(e) => Err(e),
            };
            match outcome {
                Ok(()) => {}
                Err(AhmsError::InputClosed) => {
                    tracing::debug!("Input closed, ending menu session");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn doctors_menu(&mut self) -> Result<()> {
        loop {
            self.console.say(DOCTORS_MENU)?;
            let outcome = match self.console.integer(OPTION_PROMPT)? {
                1 => show_table(&mut self.console, self.doctors.records()),
                2 => self.search_doctor_by_id(),
                3 => self.search_doctor_by_name(),
                4 => self.add_doctor(),
                5 => self.edit_doctor(),
                6 => return Ok(()),
                other => self.console.say(format!("Invalid option {other}")),
            };
            self.recover(outcome)?;
        }
    }

    fn facilities_menu(&mut self) -> Result<()> {
        loop {
            self.console.say(FACILITIES_MENU)?;
            let outcome = match self.console.integer(OPTION_PROMPT)? {
                1 => self.show_facilities(),
                2 => self.add_facility(),
                3 => return Ok(()),
                other => self.console.say(format!("Invalid option {other}")),
            };
            self.recover(outcome)?;
        }
    }

    fn laboratories_menu(&mut self) -> Result<()> {
        loop {
            self.console.say(LABORATORIES_MENU)?;
            let outcome = match self.console.integer(OPTION_PROMPT)? {
                1 => show_table(&mut self.console, self.laboratories.records()),
                2 => self.add_laboratory(),
                3 => return Ok(()),
                other => self.console.say(format!("Invalid option {other}")),
            };
            self.recover(outcome)?;
        }
    }

    fn patients_menu(&mut self) -> Result<()> {
        loop {
            self.console.say(PATIENTS_MENU)?;
            let outcome = match self.console.integer(OPTION_PROMPT)? {
                1 => show_table(&mut self.console, self.patients.records()),
                2 => self.search_patient_by_id(),
                3 => self.add_patient(),
                4 => self.edit_patient(),
                5 => return Ok(()),
                other => self.console.say(format!("Invalid option {other}")),
            };
            self.recover(outcome)?;
        }
    }

    /// Reports an invalid record entry and carries on; everything else propagates.
    fn recover(&mut self, outcome: Result<()>) -> Result<()> {
        match outcome {
            Err(AhmsError::Record(e)) => {
                tracing::warn!(error = %e, "Rejected record entry");
                self.console.say(format!("Invalid entry: {e}"))
            }
            Err(AhmsError::Store(e)) => {
                log_error_with_context!(&e, "Resource write failed during menu session");
                Err(AhmsError::Store(e))
            }
            other => other,
        }
    }

    fn search_doctor_by_id(&mut self) -> Result<()> {
        let id = self.console.integer("Enter the doctor Id: ")?;
        let found = DoctorId::new(id)
            .ok()
            .and_then(|id| self.doctors.find_by_key(&id));
        match found {
            Some(doctor) => show_table(&mut self.console, std::slice::from_ref(doctor)),
            None => self
                .console
                .say("Can't find the doctor with the same ID on the system"),
        }
    }

    fn search_doctor_by_name(&mut self) -> Result<()> {
        let name = self.console.text("Enter the doctor name: ")?;
        match self.doctors.find_by_name(&name) {
            Some(doctor) => show_table(&mut self.console, std::slice::from_ref(doctor)),
            None => self
                .console
                .say("Can't find the doctor with the same name on the system"),
        }
    }

    fn add_doctor(&mut self) -> Result<()> {
        let doctor = forms::enter_doctor(&mut self.console)?;
        let id = doctor.id();
        if self.doctors.find_by_key(&id).is_some() {
            tracing::warn!(id = %id, "Adding doctor with an id that is already in use");
        }
        self.doctors.append(doctor)?;
        self.console
            .say(format!("Doctor whose ID is {id} has been added"))
    }

    fn edit_doctor(&mut self) -> Result<()> {
        let raw = self
            .console
            .integer("Please enter the id of the doctor that you want to edit their information: ")?;
        let Some(id) = DoctorId::new(raw).ok().filter(|id| self.doctors.find_by_key(id).is_some())
        else {
            return self
                .console
                .say("Can't find the doctor with the given ID in the system");
        };

        let changes = forms::enter_doctor_changes(&mut self.console)?;
        match self.doctors.edit(&id, changes)? {
            Some(edit) => {
                self.doctors.apply(edit);
                self.doctors.save()?;
                self.console
                    .say(format!("Doctor whose ID is {id} has been edited"))
            }
            None => self
                .console
                .say("Can't find the doctor with the given ID in the system"),
        }
    }

    fn show_facilities(&mut self) -> Result<()> {
        self.console.say("The Hospital Facilities are:\n")?;
        for facility in self.facilities.records() {
            self.console.say(facility.key())?;
        }
        Ok(())
    }

    fn add_facility(&mut self) -> Result<()> {
        let facility = forms::enter_facility(&mut self.console)?;
        let name = facility.key();
        self.facilities.append(facility)?;
        self.console.say(format!("Facility '{name}' has been added"))
    }

    fn add_laboratory(&mut self) -> Result<()> {
        let laboratory = forms::enter_laboratory(&mut self.console)?;
        let name = laboratory.key();
        self.laboratories.append(laboratory)?;
        self.console
            .say(format!("Laboratory '{name}' has been added"))
    }

    fn search_patient_by_id(&mut self) -> Result<()> {
        let id = self.console.integer("Enter the Patient Id: ")?;
        let found = PatientId::new(id)
            .ok()
            .and_then(|id| self.patients.find_by_key(&id));
        match found {
            Some(patient) => show_table(&mut self.console, std::slice::from_ref(patient)),
            None => self
                .console
                .say("Can't find the Patient with the same ID on the system"),
        }
    }

    fn add_patient(&mut self) -> Result<()> {
        let patient = forms::enter_patient(&mut self.console)?;
        let id = patient.id();
        if self.patients.find_by_key(&id).is_some() {
            tracing::warn!(id = %id, "Adding patient with an id that is already in use");
        }
        self.patients.append(patient)?;
        self.console
            .say(format!("Patient whose ID is {id} has been added"))
    }

    fn edit_patient(&mut self) -> Result<()> {
        let raw = self
            .console
            .integer("Please enter the id of the Patient that you want to edit their information: ")?;
        let Some(id) = PatientId::new(raw)
            .ok()
            .filter(|id| self.patients.find_by_key(id).is_some())
        else {
            return self
                .console
                .say("Can't find the Patient with given ID in the system");
        };

        let changes = forms::enter_patient_changes(&mut self.console)?;
        match self.patients.edit(&id, changes)? {
            Some(edit) => {
                self.patients.apply(edit);
                self.patients.save()?;
                self.console
                    .say(format!("Patient whose ID is {id} has been edited"))
            }
            None => self
                .console
                .say("Can't find the Patient with given ID in the system"),
        }
    }
}

fn show_table<K: RecordKind, R: LineReader, W: Write>(
    console: &mut Console<R, W>,
    records: &[K],
) -> Result<()> {
    console.say(to_table(records))
}
