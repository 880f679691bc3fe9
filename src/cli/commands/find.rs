//! Find command implementation
//!
//! Looks up one record by id (doctors and patients) or by name (any kind, ignoring
//! case). Exits with [`EXIT_NOT_FOUND`] when nothing matches.

use super::{load_config_or_report, report_store_error};
use crate::cli::{KindArg, EXIT_CONFIG, EXIT_NOT_FOUND, EXIT_OK};
use crate::core::codec::RecordKind;
use crate::core::lookup::{find_by_key, find_by_name, Named};
use crate::core::store::read_all;
use crate::core::table::to_table;
use crate::domain::{Doctor, DoctorId, Facility, Laboratory, Patient, PatientId};
use clap::Args;
use serde::Serialize;
use std::path::Path;

type IdLookup<K> = fn(&[K], i64) -> Option<&K>;

/// Arguments for the find command
#[derive(Args, Debug)]
pub struct FindArgs {
    /// Record kind to search
    #[arg(value_enum)]
    pub kind: KindArg,

    /// Numeric id (doctor and patient only)
    #[arg(long, conflicts_with = "name", required_unless_present = "name")]
    pub id: Option<i64>,

    /// Name to match, ignoring case
    #[arg(long)]
    pub name: Option<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl FindArgs {
    /// Execute the find command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(kind = %self.kind, id = ?self.id, name = ?self.name, "Finding record");

        let Some(config) = load_config_or_report(config_path) else {
            return Ok(EXIT_CONFIG);
        };
        let resource = self.kind.resource_path(&config.resources);

        match self.kind {
            KindArg::Doctor => self.search::<Doctor>(&resource, Some(doctor_by_id)),
            KindArg::Facility => self.search::<Facility>(&resource, None),
            KindArg::Laboratory => self.search::<Laboratory>(&resource, None),
            KindArg::Patient => self.search::<Patient>(&resource, Some(patient_by_id)),
        }
    }

    fn search<K: RecordKind + Named + Serialize>(
        &self,
        resource: &Path,
        by_id: Option<IdLookup<K>>,
    ) -> anyhow::Result<i32> {
        if self.id.is_some() && by_id.is_none() {
            eprintln!("❌ --id applies to doctor and patient records only; use --name");
            return Ok(EXIT_CONFIG);
        }

        let records = match read_all::<K>(resource) {
            Ok(records) => records,
            Err(e) => return Ok(report_store_error(&e)),
        };

        let (found, query) = match (self.id, by_id, self.name.as_deref()) {
            (Some(id), Some(lookup), _) => (lookup(&records, id), format!("id {id}")),
            (_, _, Some(name)) => (find_by_name(&records, name), format!("name '{name}'")),
            _ => (None, "nothing".to_string()),
        };

        let Some(record) = found else {
            eprintln!("No {} found with {query}", K::KIND);
            return Ok(EXIT_NOT_FOUND);
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(record)?);
        } else {
            print!("{}", to_table(std::slice::from_ref(record)));
        }
        Ok(EXIT_OK)
    }
}

fn doctor_by_id(records: &[Doctor], id: i64) -> Option<&Doctor> {
    DoctorId::new(id)
        .ok()
        .and_then(|id| find_by_key(records, &id))
}

fn patient_by_id(records: &[Patient], id: i64) -> Option<&Patient> {
    PatientId::new(id)
        .ok()
        .and_then(|id| find_by_key(records, &id))
}
