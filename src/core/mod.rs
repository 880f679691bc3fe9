//! Core record logic for AHMS.
//!
//! # Modules
//!
//! - [`codec`] - Record kind descriptor and the delimiter-joined line encoding
//! - [`store`] - Resource reading and writing, and the in-memory [`RecordStore`]
//! - [`lookup`] - Linear search by key or name, and edit-by-key
//! - [`table`] - Column-labelled table rendering
//!
//! # Example
//!
//! ```rust,no_run
//! use ahms::core::store::RecordStore;
//! use ahms::domain::{Doctor, DoctorChanges, DoctorId};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut doctors: RecordStore<Doctor> = RecordStore::load("files/doctors.txt")?;
//!
//! let id = DoctorId::new(101)?;
//! let changes = DoctorChanges {
//!     name: "A. Smith".to_string(),
//!     specialty: "Cardiology".to_string(),
//!     working_hours: "8am-4pm".to_string(),
//!     qualification: "MD".to_string(),
//!     room_number: 12,
//! };
//! if let Some(edit) = doctors.edit(&id, changes)? {
//!     doctors.apply(edit);
//!     doctors.save()?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod lookup;
pub mod store;
pub mod table;

pub use codec::{HeaderPolicy, RecordKind};
pub use lookup::{Edit, Keyed, Named, Revisable};
pub use store::RecordStore;
pub use table::{to_row, to_table, Table};
