//! Export functionality
//!
//! Writes ledger data out in re-usable formats: a month's transactions as
//! CSV (with the same header the importer expects, so an export can be
//! re-ingested) and the whole document as YAML for human-readable backup.

pub mod csv;
pub mod yaml;

pub use csv::{export_month_csv, write_month_csv};
pub use yaml::{export_full_yaml, write_document_yaml};

use std::path::Path;

use crate::error::LedgerResult;

/// Make sure the parent directory of an export target exists
fn ensure_parent_dir(path: &Path) -> LedgerResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
