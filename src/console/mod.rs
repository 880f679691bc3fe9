//! Interactive console front end
//!
//! The console adapts keyboard input to the core record operations. Nothing in
//! [`crate::core`] or [`crate::domain`] reads input or prints; everything
//! interactive lives here.
//!
//! - [`input`] - [`LineReader`] sources and the typed [`Console`] prompts
//! - [`forms`] - Field-by-field entry of each record kind
//! - [`menu`] - The menu [`Session`] over all four stores

pub mod forms;
pub mod input;
pub mod menu;

pub use input::{Console, LineReader, ScriptedReader, TerminalReader};
pub use menu::Session;
