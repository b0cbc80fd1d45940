//! tenge-ledger - envelope-budgeting ledger for the terminal
//!
//! A monthly envelope-budgeting ledger: income enters a per-month pool,
//! gets assigned into category envelopes, and expenses are charged against
//! those envelopes. Every month is an independent ledger keyed by `YYYY-MM`.
//!
//! # Architecture
//!
//! - `models`: core data types (month keys, month records, categories,
//!   transactions, typed ids)
//! - `engine`: the accounting core — validated mutations that keep every
//!   envelope's available amount non-negative
//! - `import`: the CSV reconciliation importer (auto-covers shortfalls
//!   from the unassigned pool, row by row)
//! - `storage`: the JSON document store (lenient load, atomic write-through)
//! - `export`: CSV and YAML export
//! - `display`: terminal formatting
//! - `cli`: clap command handlers
//! - `config`: paths and user settings
//! - `error`: the `LedgerError` type every fallible operation returns
//!
//! # Example
//!
//! ```rust
//! use tenge_ledger::engine;
//! use tenge_ledger::models::MonthRecord;
//!
//! let mut month = MonthRecord::default();
//! engine::record_income(&mut month, 100_000.0).unwrap();
//! let food = engine::add_category(&mut month, "Food", 0.0, None).unwrap();
//! engine::assign(&mut month, food.id, 30_000.0).unwrap();
//! assert_eq!(month.amount_to_assign(), 70_000.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
