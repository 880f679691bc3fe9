//! Menu command implementation
//!
//! Opens every configured resource and hands the terminal to the interactive
//! [`Session`].

use super::{load_config_or_report, report_store_error};
use crate::cli::{EXIT_CONFIG, EXIT_OK};
use crate::console::{Console, Session, TerminalReader};
use crate::domain::AhmsError;
use clap::Args;

/// Arguments for the menu command
#[derive(Args, Debug)]
pub struct MenuArgs {}

impl MenuArgs {
    /// Execute the menu command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Starting menu session");

        let Some(config) = load_config_or_report(config_path) else {
            return Ok(EXIT_CONFIG);
        };

        let console = Console::new(TerminalReader::new()?, std::io::stdout());
        let mut session = match Session::open(&config.resources, console) {
            Ok(session) => session,
            Err(AhmsError::Store(e)) => return Ok(report_store_error(&e)),
            Err(e) => return Err(e.into()),
        };

        match session.run() {
            Ok(()) => {
                tracing::info!("Menu session finished");
                Ok(EXIT_OK)
            }
            Err(AhmsError::Store(e)) => Ok(report_store_error(&e)),
            Err(e) => Err(e.into()),
        }
    }
}
