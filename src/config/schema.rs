//! Configuration schema types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main AHMS configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AhmsConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Where each record kind is persisted
    #[serde(default)]
    pub resources: ResourcesConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AhmsConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.resources.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Record resource locations
///
/// Relative file names are resolved against `data_dir`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesConfig {
    /// Directory holding the resource files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Doctor resource file
    #[serde(default = "default_doctors")]
    pub doctors: PathBuf,

    /// Facility resource file
    #[serde(default = "default_facilities")]
    pub facilities: PathBuf,

    /// Laboratory resource file
    #[serde(default = "default_laboratories")]
    pub laboratories: PathBuf,

    /// Patient resource file
    #[serde(default = "default_patients")]
    pub patients: PathBuf,
}

impl ResourcesConfig {
    pub fn doctors_path(&self) -> PathBuf {
        self.data_dir.join(&self.doctors)
    }

    pub fn facilities_path(&self) -> PathBuf {
        self.data_dir.join(&self.facilities)
    }

    pub fn laboratories_path(&self) -> PathBuf {
        self.data_dir.join(&self.laboratories)
    }

    pub fn patients_path(&self) -> PathBuf {
        self.data_dir.join(&self.patients)
    }

    fn validate(&self) -> Result<(), String> {
        let named = [
            ("doctors", &self.doctors),
            ("facilities", &self.facilities),
            ("laboratories", &self.laboratories),
            ("patients", &self.patients),
        ];
        for (key, path) in named {
            if path.as_os_str().is_empty() {
                return Err(format!("resources.{key} cannot be empty"));
            }
        }

        let mut paths = vec![
            self.doctors_path(),
            self.facilities_path(),
            self.laboratories_path(),
            self.patients_path(),
        ];
        paths.sort();
        paths.dedup();
        if paths.len() != named.len() {
            return Err("each record kind needs its own resource file".to_string());
        }
        Ok(())
    }
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            doctors: default_doctors(),
            facilities: default_facilities(),
            laboratories: default_laboratories(),
            patients: default_patients(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable JSON log files
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled = true".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("files")
}

fn default_doctors() -> PathBuf {
    PathBuf::from("doctors.txt")
}

fn default_facilities() -> PathBuf {
    PathBuf::from("facilities.txt")
}

fn default_laboratories() -> PathBuf {
    PathBuf::from("laboratories.txt")
}

fn default_patients() -> PathBuf {
    PathBuf::from("patients.txt")
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
