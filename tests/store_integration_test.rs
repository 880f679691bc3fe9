//! Integration tests for reading and writing record resources

use ahms::core::store::{append_one, read_all, write_all};
use ahms::core::{Named, RecordKind, RecordStore};
use ahms::domain::{
    Cost, Doctor, DoctorChanges, DoctorId, Facility, Laboratory, Patient, PatientId, RecordError,
    StoreError,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use test_case::test_case;

fn resource(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn doctor(id: i64, name: &str) -> Doctor {
    Doctor::new(DoctorId::new(id).unwrap(), name, "Cardiology", "7am-10pm", "MD", 12).unwrap()
}

#[test]
fn test_read_doctor_file_without_trailing_newline() {
    let dir = TempDir::new().unwrap();
    let path = resource(
        &dir,
        "doctors.txt",
        "id_name_specilist_timing_qualification_roomNb\n\
         21_Dr. Ada Lovelace_Cardiology_9am-5pm_MBBS_12\n\
         32_Dr. Alan Turing_Neurology_5pm-11pm_PhD_7",
    );

    let doctors: Vec<Doctor> = read_all(&path).unwrap();
    assert_eq!(doctors.len(), 2);
    assert_eq!(doctors[0].id(), DoctorId::new(21).unwrap());
    assert_eq!(doctors[1].name(), "Dr. Alan Turing");
    assert_eq!(doctors[1].room_number(), 7);
}

#[test]
fn test_write_all_then_read_all_preserves_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("patients.txt");
    let patients = vec![
        Patient::new(PatientId::new(3).unwrap(), "Cy", "Cold", "M", 40).unwrap(),
        Patient::new(PatientId::new(0).unwrap(), "Ann", "Flu", "F", 30).unwrap(),
        Patient::new(PatientId::new(3).unwrap(), "Cy Jr", "Cough", "M", 4).unwrap(),
    ];

    write_all(&path, &patients).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("id_Name_Disease_Gender_Age\n"));

    let read: Vec<Patient> = read_all(&path).unwrap();
    assert_eq!(read, patients);
}

#[test]
fn test_doctor_write_all_then_read_all() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doctors.txt");
    let doctors = vec![
        doctor(9, "Dr. Zed"),
        Doctor::new(DoctorId::new(1).unwrap(), "Dr. Ada", "", "9am-5pm", "MBBS", 1).unwrap(),
        doctor(9, "Dr. Zed Twin"),
    ];

    write_all(&path, &doctors).unwrap();
    let read: Vec<Doctor> = read_all(&path).unwrap();
    assert_eq!(read, doctors);
}

#[test]
fn test_laboratory_write_all_then_read_all_keeps_exact_cost() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("labs.txt");
    let labs = vec![
        Laboratory::new("Free Clinic", Cost::from_cents(0)).unwrap(),
        Laboratory::new("Blood Test", Cost::from_cents(1250)).unwrap(),
        Laboratory::new("Past f64 precision", Cost::from_cents(9_007_199_254_740_993)).unwrap(),
        Laboratory::new("Most expensive", Cost::from_cents(u64::MAX)).unwrap(),
    ];

    write_all(&path, &labs).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("Most expensive_184467440737095516.15\n"));

    let read: Vec<Laboratory> = read_all(&path).unwrap();
    assert_eq!(read, labs);
}

#[test]
fn test_laboratory_cost_past_range_fails_read() {
    let dir = TempDir::new().unwrap();
    let path = resource(&dir, "labs.txt", "Facility_Cost\nMRI_184467440737095516.16");
    let err = read_all::<Laboratory>(&path).unwrap_err();
    assert!(matches!(
        err.record_error(),
        Some(RecordError::ConstraintViolation { field: "cost", .. })
    ));
}

#[test]
fn test_facility_write_all_then_read_all_keeps_edge_names() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("facilities.txt");
    let facilities: Vec<Facility> = ["Ambulance", "Burn_Unit", "_", "X_Ray_", "A  B"]
        .into_iter()
        .map(|name| Facility::new(name).unwrap())
        .collect();

    write_all(&path, &facilities).unwrap();
    let read: Vec<Facility> = read_all(&path).unwrap();
    assert_eq!(read, facilities);

    append_one(&path, &Facility::new("Pharmacy").unwrap()).unwrap();
    let read: Vec<Facility> = read_all(&path).unwrap();
    assert_eq!(read.len(), facilities.len() + 1);
    assert_eq!(read[5].name(), "Pharmacy");
}

#[test_case("" ; "empty")]
#[test_case("   " ; "whitespace only")]
#[test_case(" ICU" ; "leading whitespace")]
fn test_facility_names_that_cannot_survive_a_read_are_rejected(name: &str) {
    assert!(matches!(
        Facility::new(name),
        Err(RecordError::ConstraintViolation { field: "name", .. })
    ));
}

#[test]
fn test_append_one_adds_line_without_rewriting() {
    let dir = TempDir::new().unwrap();
    let path = resource(&dir, "labs.txt", "Facility_Cost\nBlood Work_25.5");

    let lab = Laboratory::new("X-Ray", Cost::new(120.0).unwrap()).unwrap();
    append_one(&path, &lab).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Facility_Cost\nBlood Work_25.5\nX-Ray_120.00"
    );
    let labs: Vec<Laboratory> = read_all(&path).unwrap();
    assert_eq!(labs.len(), 2);
    assert_eq!(labs[0].cost().cents(), 2550);
}

#[test]
fn test_append_after_write_all_leaves_no_blank_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doctors.txt");
    write_all(&path, &[doctor(1, "A")]).unwrap();
    append_one(&path, &doctor(2, "B")).unwrap();

    let doctors: Vec<Doctor> = read_all(&path).unwrap();
    assert_eq!(doctors, vec![doctor(1, "A"), doctor(2, "B")]);
}

#[test]
fn test_append_one_requires_existing_resource() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.txt");
    let err = append_one(&path, &doctor(1, "A")).unwrap_err();
    assert!(matches!(err, StoreError::ResourceUnavailable { .. }));
    assert!(!path.exists());
}

#[test]
fn test_missing_resource_is_unavailable() {
    let dir = TempDir::new().unwrap();
    let err = read_all::<Patient>(&dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, StoreError::ResourceUnavailable { kind: "patient", .. }));
}

#[test_case("" ; "empty resource")]
#[test_case("ID_NAME_DISEASE_GENDER_AGE\n1_A_B_C_2" ; "wrong case")]
#[test_case("Facility_Cost\n" ; "another kind's header")]
fn test_header_mismatch(contents: &str) {
    let dir = TempDir::new().unwrap();
    let path = resource(&dir, "patients.txt", contents);
    let err = read_all::<Patient>(&path).unwrap_err();
    assert!(matches!(err, StoreError::HeaderMismatch { .. }));
}

#[test]
fn test_bad_line_reports_line_number() {
    let dir = TempDir::new().unwrap();
    let path = resource(
        &dir,
        "patients.txt",
        "id_Name_Disease_Gender_Age\n1_Ann_Flu_F_30\n2_Bob_Cold_M\n",
    );

    match read_all::<Patient>(&path).unwrap_err() {
        StoreError::Record { line, source, .. } => {
            assert_eq!(line, 3);
            assert_eq!(source, RecordError::ArityMismatch { expected: 5, found: 4 });
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_non_numeric_field_fails_whole_read() {
    let dir = TempDir::new().unwrap();
    let path = resource(
        &dir,
        "doctors.txt",
        "id_name_specilist_timing_qualification_roomNb\n1_A_B_C_D_2\n2_A_B_C_D_twelve\n",
    );
    let err = read_all::<Doctor>(&path).unwrap_err();
    assert!(matches!(
        err.record_error(),
        Some(RecordError::InvalidField { .. })
    ));
}

#[test]
fn test_facility_header_is_not_checked() {
    let dir = TempDir::new().unwrap();
    let path = resource(&dir, "facilities.txt", "anything at all\nICU\nBurn_Unit\n");
    let facilities: Vec<Facility> = read_all(&path).unwrap();
    assert_eq!(facilities.len(), 2);
    assert_eq!(facilities[1].name(), "Burn_Unit");

    write_all(&path, &facilities).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("{}\nICU\nBurn_Unit\n", Facility::HEADER)
    );
}

#[test]
fn test_windows_line_endings_are_accepted() {
    let dir = TempDir::new().unwrap();
    let path = resource(&dir, "labs.txt", "Facility_Cost\r\nMRI_300\r\n");
    let labs: Vec<Laboratory> = read_all(&path).unwrap();
    assert_eq!(labs[0].name(), "MRI");
}

#[test]
fn test_record_store_edit_and_save() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doctors.txt");
    write_all(&path, &[doctor(1, "A"), doctor(2, "B")]).unwrap();

    let mut store: RecordStore<Doctor> = RecordStore::load(&path).unwrap();
    let changes = DoctorChanges {
        name: "Beth".to_string(),
        specialty: "Oncology".to_string(),
        working_hours: "8am-4pm".to_string(),
        qualification: "PhD".to_string(),
        room_number: 30,
    };
    let edit = store
        .edit(&DoctorId::new(2).unwrap(), changes)
        .unwrap()
        .unwrap();
    assert_eq!(edit.position, 1);
    assert!(store.apply(edit));
    store.save().unwrap();

    let reloaded: Vec<Doctor> = read_all(&path).unwrap();
    assert_eq!(reloaded[0], doctor(1, "A"));
    assert_eq!(reloaded[1].id(), DoctorId::new(2).unwrap());
    assert_eq!(reloaded[1].name(), "Beth");
    assert_eq!(reloaded[1].room_number(), 30);
}

#[test]
fn test_record_store_append_persists_and_updates_memory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("facilities.txt");
    write_all::<Facility>(&path, &[]).unwrap();

    let mut store: RecordStore<Facility> = RecordStore::load(&path).unwrap();
    store.append(Facility::new("Pharmacy").unwrap()).unwrap();
    assert_eq!(store.len(), 1);

    let reloaded: Vec<Facility> = read_all(&path).unwrap();
    assert_eq!(reloaded, store.records());
}
