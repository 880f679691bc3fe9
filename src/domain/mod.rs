//! Domain models and types for AHMS.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Record kinds** ([`Doctor`], [`Facility`], [`Laboratory`], [`Patient`])
//! - **Strongly-typed identifiers** ([`DoctorId`], [`PatientId`]) and [`Cost`]
//! - **Error types** ([`AhmsError`], [`StoreError`], [`RecordError`])
//! - **Result type alias** ([`Result`])
//!
//! Records are immutable values. Every constructor validates its invariants, so a
//! record that exists can always be encoded and decoded again:
//!
//! ```rust
//! use ahms::core::codec::RecordKind;
//! use ahms::domain::{Cost, Laboratory};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let lab = Laboratory::new("XRay", Cost::new(45.0)?)?;
//! assert_eq!(lab.encode(), "XRay_45.00");
//! assert_eq!(Laboratory::decode("XRay_45.00")?, lab);
//! # Ok(())
//! # }
//! ```

pub mod doctor;
pub mod errors;
pub mod facility;
pub mod fields;
pub mod ids;
pub mod laboratory;
pub mod patient;
pub mod result;

// Re-export commonly used types for convenience
pub use doctor::{Doctor, DoctorChanges};
pub use errors::{AhmsError, RecordError, StoreError};
pub use facility::Facility;
pub use ids::{DoctorId, PatientId};
pub use laboratory::{Cost, Laboratory};
pub use patient::{Patient, PatientChanges};
pub use result::Result;
