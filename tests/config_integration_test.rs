//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold `ENV_MUTEX` so they do not interfere
//! with each other.

use ahms::config::load_config;
use ahms::domain::AhmsError;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("AHMS_APPLICATION_LOG_LEVEL");
    std::env::remove_var("AHMS_RESOURCES_DATA_DIR");
    std::env::remove_var("AHMS_RESOURCES_PATIENTS");
    std::env::remove_var("AHMS_LOGGING_LOCAL_ENABLED");
    std::env::remove_var("TEST_AHMS_DATA_ROOT");
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = config_file(
        r#"
[application]
log_level = "debug"

[resources]
data_dir = "/srv/ahms"
doctors = "drs.txt"
facilities = "fac.txt"
laboratories = "labs.txt"
patients = "pts.txt"

[logging]
local_enabled = true
local_path = "/tmp/ahms-logs"
local_rotation = "hourly"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.resources.doctors_path(), PathBuf::from("/srv/ahms/drs.txt"));
    assert_eq!(config.resources.facilities_path(), PathBuf::from("/srv/ahms/fac.txt"));
    assert_eq!(config.resources.laboratories_path(), PathBuf::from("/srv/ahms/labs.txt"));
    assert_eq!(config.resources.patients_path(), PathBuf::from("/srv/ahms/pts.txt"));
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_path, "/tmp/ahms-logs");
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_empty_config_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = config_file("");
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.resources.doctors_path(), PathBuf::from("files/doctors.txt"));
    assert_eq!(config.resources.patients_path(), PathBuf::from("files/patients.txt"));
    assert!(!config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "daily");
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_AHMS_DATA_ROOT", "/data/hospital");

    let temp_file = config_file(
        r#"
[resources]
data_dir = "${TEST_AHMS_DATA_ROOT}/records"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");
    assert_eq!(
        config.resources.doctors_path(),
        PathBuf::from("/data/hospital/records/doctors.txt")
    );

    cleanup_env_vars();
}

#[test]
fn test_missing_substitution_variable() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = config_file("[resources]\ndata_dir = \"${TEST_AHMS_DATA_ROOT}\"\n");
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(matches!(err, AhmsError::Configuration(_)));
    assert!(err.to_string().contains("TEST_AHMS_DATA_ROOT"));
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("AHMS_APPLICATION_LOG_LEVEL", "error");
    std::env::set_var("AHMS_RESOURCES_DATA_DIR", "/override");
    std::env::set_var("AHMS_RESOURCES_PATIENTS", "people.txt");
    std::env::set_var("AHMS_LOGGING_LOCAL_ENABLED", "true");

    let temp_file = config_file(
        r#"
[application]
log_level = "debug"

[resources]
data_dir = "files"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");
    assert_eq!(config.application.log_level, "error");
    assert_eq!(config.resources.patients_path(), PathBuf::from("/override/people.txt"));
    assert!(config.logging.local_enabled);

    cleanup_env_vars();
}

#[test]
fn test_invalid_log_level_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = config_file("[application]\nlog_level = \"loud\"\n");
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("validation failed"));
}

#[test]
fn test_shared_resource_file_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = config_file(
        r#"
[resources]
doctors = "records.txt"
patients = "records.txt"
"#,
    );
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("own resource file"));
}

#[test]
fn test_malformed_toml_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = config_file("[resources\ndata_dir = 1");
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse TOML"));
}
