//! Import and export CLI commands

use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::error::LedgerResult;
use crate::export::{write_document_yaml, write_month_csv};
use crate::import::import_csv;
use crate::models::MonthKey;
use crate::storage::LedgerStore;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export the month's transactions as CSV (re-importable)
    Csv {
        /// Output file path
        path: PathBuf,
    },

    /// Export the whole ledger document as YAML
    Yaml {
        /// Output file path
        path: PathBuf,
    },
}

/// Import a CSV file into the month's record and print the outcome
pub fn handle_import_command(
    store: &mut LedgerStore,
    key: MonthKey,
    file: &Path,
) -> LedgerResult<()> {
    let text = std::fs::read_to_string(file)?;
    let month = store.month_mut(key);
    let report = import_csv(month, &text)?;
    store.save()?;

    println!(
        "Imported {} row(s), skipped {} row(s) into {}",
        report.imported, report.skipped, key
    );
    for rejection in &report.rejections {
        println!("  line {}: {}", rejection.line, rejection.error);
    }
    Ok(())
}

/// Handle an export command
pub fn handle_export_command(
    store: &LedgerStore,
    key: MonthKey,
    cmd: ExportCommands,
) -> LedgerResult<()> {
    match cmd {
        ExportCommands::Csv { path } => {
            let month = store.month(key).cloned().unwrap_or_default();
            write_month_csv(&path, &month)?;
            println!(
                "Exported {} transaction(s) from {} to {}",
                month.transactions.len(),
                key,
                path.display()
            );
        }

        ExportCommands::Yaml { path } => {
            write_document_yaml(&path, store.document())?;
            println!(
                "Exported {} month(s) to {}",
                store.document().months.len(),
                path.display()
            );
        }
    }
    Ok(())
}
