// AHMS - Alberta Hospital Management System
// Copyright (c) 2025 AHMS Contributors
// Licensed under the MIT License

//! # AHMS - Alberta Hospital Management System
//!
//! AHMS keeps four kinds of hospital records (doctors, facilities, laboratories and
//! patients) in plain text files, one file per kind, and manages them from an
//! interactive console menu.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`console`] - Interactive menus and typed prompts
//! - [`core`] - Record codec, lookup, persistence and table rendering
//! - [`domain`] - Record types, identifiers and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Resource format
//!
//! Each resource starts with a header line, followed by one record per line with
//! fields joined by `_`:
//!
//! ```text
//! id_name_specilist_timing_qualification_roomNb
//! 21_Dr. Ada_Cardiology_9-5_MBBS_12
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ahms::core::{Named, RecordStore};
//! use ahms::domain::{Doctor, DoctorId};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let doctors: RecordStore<Doctor> = RecordStore::load("files/doctors.txt")?;
//!
//! if let Some(doctor) = doctors.find_by_key(&DoctorId::new(21)?) {
//!     println!("{} works in room {}", doctor.name(), doctor.room_number());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Record problems are [`domain::RecordError`]s; the store wraps them in
//! [`domain::StoreError`] with the resource and line, and [`domain::AhmsError`]
//! is the application-wide error:
//!
//! ```rust,no_run
//! use ahms::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let config = ahms::config::load_config("ahms.toml")?;
//!     println!("{}", config.resources.doctors_path().display());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod console;
pub mod core;
pub mod domain;
pub mod logging;
