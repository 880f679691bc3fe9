//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file and, optionally, empty resource files.

use crate::cli::{EXIT_CONFIG, EXIT_FATAL, EXIT_OK, EXIT_RESOURCE};
use crate::config::ResourcesConfig;
use crate::core::codec::RecordKind;
use crate::core::store::write_all;
use crate::domain::{Doctor, Facility, Laboratory, Patient, StoreError};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "ahms.toml")]
    pub output: String,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,

    /// Also create the data directory and header-only resource files
    #[arg(long)]
    pub with_resources: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing AHMS configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG);
        }

        if let Err(e) = fs::write(&self.output, Self::generate_config()) {
            println!("❌ Failed to write configuration file");
            println!("   Error: {e}");
            return Ok(EXIT_FATAL);
        }
        println!("✅ Configuration file created: {}", self.output);

        if self.with_resources {
            let resources = ResourcesConfig::default();
            if let Err(e) = self.seed_resources(&resources) {
                println!("❌ Failed to create resource files");
                println!("   Error: {e}");
                return Ok(EXIT_RESOURCE);
            }
        }

        println!();
        println!("Next steps:");
        println!("  1. Edit {} with your settings", self.output);
        println!("  2. Validate configuration: ahms validate-config");
        println!("  3. Start the menu: ahms menu");
        println!();
        Ok(EXIT_OK)
    }

    /// Creates the data directory and one header-only file per record kind
    fn seed_resources(&self, resources: &ResourcesConfig) -> Result<(), StoreError> {
        fs::create_dir_all(&resources.data_dir).map_err(|source| {
            StoreError::ResourceUnavailable {
                kind: "data directory",
                resource: resources.data_dir.clone(),
                source,
            }
        })?;

        self.seed::<Doctor>(&resources.doctors_path())?;
        self.seed::<Facility>(&resources.facilities_path())?;
        self.seed::<Laboratory>(&resources.laboratories_path())?;
        self.seed::<Patient>(&resources.patients_path())?;
        Ok(())
    }

    fn seed<K: RecordKind>(&self, resource: &Path) -> Result<(), StoreError> {
        if resource.exists() && !self.force {
            println!("⚠️  Keeping existing {}", resource.display());
            return Ok(());
        }
        write_all::<K>(resource, &[])?;
        println!("✅ Created {} resource: {}", K::KIND, resource.display());
        Ok(())
    }

    /// Generate the sample configuration
    fn generate_config() -> String {
        r#"# AHMS Configuration File
# Alberta Hospital Management System
#
# Every value below is the built-in default. Values may reference environment
# variables with ${VAR}, and AHMS_<SECTION>_<KEY> variables override the file.

[application]
# Log level (trace, debug, info, warn, error)
log_level = "warn"

[resources]
# Directory holding the record files; the file names below are relative to it
data_dir = "files"
doctors = "doctors.txt"
facilities = "facilities.txt"
laboratories = "laboratories.txt"
patients = "patients.txt"

[logging]
# Write JSON logs to local_path in addition to the console
local_enabled = false
local_path = "logs"
# daily | hourly | never
local_rotation = "daily"
"#
        .to_string()
    }
}
