//! Transaction CLI commands

use clap::{Subcommand, ValueEnum};

use crate::config::settings::Settings;
use crate::display::format_transactions_table;
use crate::engine;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{MonthKey, TransactionKind};
use crate::storage::LedgerStore;

use super::resolve_category_id;

/// Transaction direction as a CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Income => TransactionKind::Income,
            KindArg::Expense => TransactionKind::Expense,
        }
    }
}

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record an income or expense transaction
    Add {
        /// income or expense
        #[arg(value_enum)]
        kind: KindArg,
        /// Amount (always positive; the kind carries the direction)
        amount: f64,
        /// Category for expenses (name, id, or id prefix)
        #[arg(short, long)]
        category: Option<String>,
        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List the month's transactions, sorted by date
    List,

    /// Delete a transaction by id (or unique id prefix)
    Delete {
        /// Transaction id or id prefix
        id: String,
    },
}

/// Handle a transaction command against one month's record
pub fn handle_transaction_command(
    store: &mut LedgerStore,
    settings: &Settings,
    key: MonthKey,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            note,
            date,
        } => {
            let kind = TransactionKind::from(kind);
            let month = store.month_mut(key);
            let category_id = match (kind, category) {
                (TransactionKind::Expense, Some(query)) => {
                    Some(resolve_category_id(month, &query)?)
                }
                _ => None,
            };

            let txn = engine::record_transaction(
                month,
                kind,
                amount,
                category_id,
                note.as_deref().unwrap_or(""),
                date.as_deref().unwrap_or(""),
            )?;
            store.save()?;

            println!(
                "Recorded {} of {} on {}",
                txn.kind,
                crate::display::format_amount(txn.amount, &settings.currency_symbol),
                txn.date.format("%Y-%m-%d")
            );
            println!("  ID: {}", txn.id);
        }

        TransactionCommands::List => {
            let month = store.month(key).cloned().unwrap_or_default();
            print!(
                "{}",
                format_transactions_table(&month, &settings.currency_symbol)
            );
        }

        TransactionCommands::Delete { id } => {
            let month = store.month_mut(key);
            let txn_id = month
                .resolve_transaction(&id)
                .map(|t| t.id)
                .ok_or_else(|| LedgerError::transaction_not_found(&id))?;
            engine::delete_transaction(month, txn_id)?;
            store.save()?;
            println!("Deleted transaction {}", txn_id);
        }
    }

    Ok(())
}
