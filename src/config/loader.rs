//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::AhmsConfig;
use crate::domain::errors::AhmsError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into AhmsConfig
/// 4. Applies environment variable overrides (AHMS_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use ahms::config::loader::load_config;
///
/// let config = load_config("ahms.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<AhmsConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(AhmsError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        AhmsError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: AhmsConfig = toml::from_str(&contents)
        .map_err(|e| AhmsError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        AhmsError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    tracing::debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied unchanged.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| AhmsError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(AhmsError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using AHMS_* prefix
///
/// Environment variables follow the pattern: AHMS_<SECTION>_<KEY>
/// For example: AHMS_RESOURCES_DATA_DIR, AHMS_LOGGING_LOCAL_ENABLED
fn apply_env_overrides(config: &mut AhmsConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("AHMS_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Resource overrides
    if let Ok(val) = std::env::var("AHMS_RESOURCES_DATA_DIR") {
        config.resources.data_dir = PathBuf::from(val);
    }
    if let Ok(val) = std::env::var("AHMS_RESOURCES_DOCTORS") {
        config.resources.doctors = PathBuf::from(val);
    }
    if let Ok(val) = std::env::var("AHMS_RESOURCES_FACILITIES") {
        config.resources.facilities = PathBuf::from(val);
    }
    if let Ok(val) = std::env::var("AHMS_RESOURCES_LABORATORIES") {
        config.resources.laboratories = PathBuf::from(val);
    }
    if let Ok(val) = std::env::var("AHMS_RESOURCES_PATIENTS") {
        config.resources.patients = PathBuf::from(val);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("AHMS_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("AHMS_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("AHMS_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("AHMS_LOADER_TEST_DIR", "/data/ahms");
        let input = "data_dir = \"${AHMS_LOADER_TEST_DIR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "data_dir = \"/data/ahms\"\n");
        std::env::remove_var("AHMS_LOADER_TEST_DIR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("AHMS_LOADER_MISSING_VAR");
        let input = "data_dir = \"${AHMS_LOADER_MISSING_VAR}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("AHMS_LOADER_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("AHMS_LOADER_COMMENTED");
        let input = "# data_dir = \"${AHMS_LOADER_COMMENTED}\"";
        assert!(substitute_env_vars(input).is_ok());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(matches!(result, Err(AhmsError::Configuration(_))));
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[resources]
data_dir = "records"
doctors = "drs.txt"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(
            config.resources.doctors_path(),
            PathBuf::from("records/drs.txt")
        );
        assert_eq!(
            config.resources.facilities_path(),
            PathBuf::from("records/facilities.txt")
        );
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[resources\n").unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }
}
