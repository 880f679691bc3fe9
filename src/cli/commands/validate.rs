//! Validate config command implementation
//!
//! This module implements the `validate-config` command. It loads the configuration
//! and then reads every resource it names, reporting each one.

use crate::cli::{EXIT_CONFIG, EXIT_OK, EXIT_RESOURCE};
use crate::config::load_config;
use crate::core::codec::RecordKind;
use crate::core::store::read_all;
use crate::domain::{Doctor, Facility, Laboratory, Patient};
use clap::Args;
use std::path::Path;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Only check the configuration file, not the resources
    #[arg(long)]
    pub skip_resources: bool,
}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates before returning
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let resources = &config.resources;
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Data Directory: {}", resources.data_dir.display());
        println!("  Doctors: {}", resources.doctors_path().display());
        println!("  Facilities: {}", resources.facilities_path().display());
        println!("  Laboratories: {}", resources.laboratories_path().display());
        println!("  Patients: {}", resources.patients_path().display());
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                format!("{} ({})", config.logging.local_path, config.logging.local_rotation)
            } else {
                "disabled".to_string()
            }
        );
        println!();

        if self.skip_resources {
            return Ok(EXIT_OK);
        }

        println!("Resources:");
        let failures = [
            check::<Doctor>(&resources.doctors_path()),
            check::<Facility>(&resources.facilities_path()),
            check::<Laboratory>(&resources.laboratories_path()),
            check::<Patient>(&resources.patients_path()),
        ]
        .into_iter()
        .filter(|ok| !ok)
        .count();
        println!();

        if failures > 0 {
            println!("❌ {failures} resource(s) failed validation");
            return Ok(EXIT_RESOURCE);
        }
        println!("✅ All resources are readable");
        Ok(EXIT_OK)
    }
}

/// Reads one resource fully and prints the outcome; returns whether it succeeded
fn check<K: RecordKind>(resource: &Path) -> bool {
    match read_all::<K>(resource) {
        Ok(records) => {
            println!(
                "  ✅ {} {}: {} record(s)",
                K::KIND,
                resource.display(),
                records.len()
            );
            true
        }
        Err(e) => {
            tracing::warn!(kind = K::KIND, error = %e, "Resource failed validation");
            println!("  ❌ {} {}", K::KIND, resource.display());
            println!("     Error: {e}");
            false
        }
    }
}
