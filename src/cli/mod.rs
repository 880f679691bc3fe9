//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for AHMS using clap.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;

/// Process exit code for success
pub const EXIT_OK: i32 = 0;
/// Process exit code when a lookup matched nothing
pub const EXIT_NOT_FOUND: i32 = 1;
/// Process exit code for configuration errors
pub const EXIT_CONFIG: i32 = 2;
/// Process exit code when a resource cannot be read or written
pub const EXIT_RESOURCE: i32 = 3;
/// Process exit code for anything else
pub const EXIT_FATAL: i32 = 5;

/// AHMS - Alberta Hospital Management System
#[derive(Parser, Debug)]
#[command(name = "ahms")]
#[command(version, about, long_about = None)]
#[command(author = "AHMS Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "ahms.toml", env = "AHMS_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "AHMS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive management menu
    Menu(commands::menu::MenuArgs),

    /// Print every record of one kind
    List(commands::list::ListArgs),

    /// Look up a single record by id or name
    Find(commands::find::FindArgs),

    /// Validate the configuration file and every resource it names
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

/// Record kind selector for commands that work on one kind
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindArg {
    #[value(alias = "doctors")]
    Doctor,
    #[value(alias = "facilities")]
    Facility,
    #[value(aliases = ["laboratories", "lab", "labs"])]
    Laboratory,
    #[value(alias = "patients")]
    Patient,
}

impl fmt::Display for KindArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KindArg::Doctor => "doctor",
            KindArg::Facility => "facility",
            KindArg::Laboratory => "laboratory",
            KindArg::Patient => "patient",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_menu() {
        let cli = Cli::parse_from(["ahms", "menu"]);
        assert_eq!(cli.config, "ahms.toml");
        assert!(matches!(cli.command, Commands::Menu(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["ahms", "--config", "custom.toml", "menu"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["ahms", "--log-level", "debug", "menu"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_list_with_alias() {
        let cli = Cli::parse_from(["ahms", "list", "labs", "--json"]);
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.kind, KindArg::Laboratory);
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_find_by_id() {
        let cli = Cli::parse_from(["ahms", "find", "doctor", "--id", "101"]);
        match cli.command {
            Commands::Find(args) => {
                assert_eq!(args.kind, KindArg::Doctor);
                assert_eq!(args.id, Some(101));
                assert!(args.name.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_find_requires_id_or_name() {
        assert!(Cli::try_parse_from(["ahms", "find", "doctor"]).is_err());
        assert!(
            Cli::try_parse_from(["ahms", "find", "doctor", "--id", "1", "--name", "x"]).is_err()
        );
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["ahms", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["ahms", "init", "--with-resources"]);
        match cli.command {
            Commands::Init(args) => assert!(args.with_resources),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(KindArg::Laboratory.to_string(), "laboratory");
    }
}
