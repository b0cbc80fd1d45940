//! CLI command handlers
//!
//! Bridges clap argument parsing with the accounting engine: each handler
//! resolves user input (names, dates, month keys) to typed values, runs the
//! engine operation, persists the document write-through, and prints the
//! result.

pub mod category;
pub mod import_export;
pub mod ledger;
pub mod transaction;

pub use category::{handle_category_command, CategoryCommands};
pub use import_export::{handle_export_command, handle_import_command, ExportCommands};
pub use ledger::{handle_assign, handle_income, handle_overview, handle_reset};
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{CategoryId, MonthKey, MonthRecord};

/// Parse an optional month argument, defaulting to the current month
pub fn resolve_month(input: Option<&str>) -> LedgerResult<MonthKey> {
    match input {
        None => Ok(MonthKey::current()),
        Some(raw) => raw.parse().map_err(|_| LedgerError::InvalidMonth {
            input: raw.to_string(),
        }),
    }
}

/// Resolve a user-entered category argument (name first, then id or id
/// prefix) to its id.
fn resolve_category_id(month: &MonthRecord, query: &str) -> LedgerResult<CategoryId> {
    month
        .resolve_category(query)
        .map(|c| c.id)
        .ok_or_else(|| LedgerError::category_not_found(query))
}
