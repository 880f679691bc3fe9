//! List command implementation
//!
//! Prints every record of one kind as a table, or as JSON with `--json`.

use super::{load_config_or_report, report_store_error};
use crate::cli::{KindArg, EXIT_CONFIG, EXIT_OK};
use crate::core::codec::RecordKind;
use crate::core::store::read_all;
use crate::core::table::to_table;
use crate::domain::{Doctor, Facility, Laboratory, Patient};
use clap::Args;
use serde::Serialize;
use std::path::Path;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Record kind to list
    #[arg(value_enum)]
    pub kind: KindArg,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(kind = %self.kind, "Listing records");

        let Some(config) = load_config_or_report(config_path) else {
            return Ok(EXIT_CONFIG);
        };
        let resource = self.kind.resource_path(&config.resources);

        match self.kind {
            KindArg::Doctor => self.print::<Doctor>(&resource),
            KindArg::Facility => self.print::<Facility>(&resource),
            KindArg::Laboratory => self.print::<Laboratory>(&resource),
            KindArg::Patient => self.print::<Patient>(&resource),
        }
    }

    fn print<K: RecordKind + Serialize>(&self, resource: &Path) -> anyhow::Result<i32> {
        let records = match read_all::<K>(resource) {
            Ok(records) => records,
            Err(e) => return Ok(report_store_error(&e)),
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&records)?);
        } else {
            print!("{}", to_table(&records));
            println!("{} {} record(s)", records.len(), K::KIND);
        }
        Ok(EXIT_OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_missing_config() {
        let args = ListArgs {
            kind: KindArg::Doctor,
            json: false,
        };
        assert_eq!(args.execute("missing-list-config.toml").unwrap(), EXIT_CONFIG);
    }
}
