//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod find;
pub mod init;
pub mod list;
pub mod menu;
pub mod validate;

use super::{KindArg, EXIT_RESOURCE};
use crate::config::{load_config, AhmsConfig, ResourcesConfig};
use crate::domain::StoreError;
use crate::log_error_with_context;
use std::path::PathBuf;

impl KindArg {
    /// Resource file configured for this kind
    pub fn resource_path(self, resources: &ResourcesConfig) -> PathBuf {
        match self {
            KindArg::Doctor => resources.doctors_path(),
            KindArg::Facility => resources.facilities_path(),
            KindArg::Laboratory => resources.laboratories_path(),
            KindArg::Patient => resources.patients_path(),
        }
    }
}

/// Loads the configuration, printing a diagnostic on failure
fn load_config_or_report(config_path: &str) -> Option<AhmsConfig> {
    match load_config(config_path) {
        Ok(config) => Some(config),
        Err(e) => {
            log_error_with_context!(&e, "Failed to load configuration");
            eprintln!("❌ Failed to load configuration file: {config_path}");
            eprintln!("   Error: {e}");
            eprintln!("   Run 'ahms init' to create one.");
            None
        }
    }
}

/// Prints a resource diagnostic and returns the matching exit code
fn report_store_error(err: &StoreError) -> i32 {
    log_error_with_context!(err, "Resource unusable");
    eprintln!("❌ Failed to load {}", err.resource().display());
    eprintln!("   Error: {err}");
    EXIT_RESOURCE
}
