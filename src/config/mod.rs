//! Configuration management for AHMS.
//!
//! # Overview
//!
//! AHMS uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `AHMS_<SECTION>_<KEY>` overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`ResourcesConfig`] - Where each record kind is stored
//! - [`LoggingConfig`] - Log file settings
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "warn"
//!
//! [resources]
//! data_dir = "files"
//! doctors = "doctors.txt"
//! facilities = "facilities.txt"
//! laboratories = "laboratories.txt"
//! patients = "patients.txt"
//!
//! [logging]
//! local_enabled = false
//! local_path = "logs"
//! local_rotation = "daily"
//! ```
//!
//! # Validation
//!
//! ```rust,no_run
//! use ahms::config::load_config;
//!
//! # fn example() {
//! match load_config("ahms.toml") {
//!     Ok(config) => println!("Doctors: {}", config.resources.doctors_path().display()),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{AhmsConfig, ApplicationConfig, LoggingConfig, ResourcesConfig};
