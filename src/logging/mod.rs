//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Human-readable console logs on stderr
//! - Configurable log levels
//! - JSON log files with rotation
//!
//! # Example
//!
//! ```no_run
//! use ahms::logging::init_logging;
//! use ahms::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log a completed resource load
///
/// # Example
///
/// ```no_run
/// use ahms::log_records_loaded;
///
/// log_records_loaded!("doctor", "files/doctors.txt", 12);
/// ```
#[macro_export]
macro_rules! log_records_loaded {
    ($kind:expr, $resource:expr, $count:expr) => {
        tracing::info!(
            kind = $kind,
            resource = %$resource,
            count = $count,
            "Records loaded"
        );
    };
}

/// Log a completed full rewrite of a resource
///
/// # Example
///
/// ```no_run
/// use ahms::log_records_saved;
///
/// log_records_saved!("patient", "files/patients.txt", 4);
/// ```
#[macro_export]
macro_rules! log_records_saved {
    ($kind:expr, $resource:expr, $count:expr) => {
        tracing::info!(
            kind = $kind,
            resource = %$resource,
            count = $count,
            "Records saved"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use ahms::log_error_with_context;
/// use ahms::domain::AhmsError;
///
/// let error = AhmsError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
