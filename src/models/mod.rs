//! Core data models for the ledger
//!
//! This module contains the data structures that represent the budgeting
//! domain: month keys, month records, categories, and transactions.

pub mod category;
pub mod ids;
pub mod month;
pub mod record;
pub mod transaction;

pub use category::Category;
pub use ids::{CategoryId, TransactionId};
pub use month::{MonthKey, MonthParseError};
pub use record::MonthRecord;
pub use transaction::{Transaction, TransactionKind};
