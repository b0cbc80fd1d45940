//! Custom error types for the ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every fallible engine operation returns one
//! of these kinds; a rejected operation leaves the month record untouched.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage read/write failures (I/O or serialization)
    #[error("Storage error: {0}")]
    Persistence(String),

    /// Amount is zero, negative where a positive is required, or not finite
    #[error("Invalid amount: {amount}")]
    InvalidAmount { amount: f64 },

    /// Category name is empty after trimming
    #[error("Category name cannot be empty")]
    InvalidName,

    /// Date string is not a valid YYYY-MM-DD calendar date
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },

    /// Month key string is not a valid YYYY-MM
    #[error("Invalid month '{input}': expected YYYY-MM")]
    InvalidMonth { input: String },

    /// No categories exist yet for this month
    #[error("No categories yet: create one first")]
    NoCategories,

    /// An expense was recorded without a category
    #[error("Expenses require a category")]
    CategoryRequired,

    /// Category lookup failed
    #[error("Category not found: {identifier}")]
    CategoryNotFound { identifier: String },

    /// Transaction lookup failed
    #[error("Transaction not found: {identifier}")]
    TransactionNotFound { identifier: String },

    /// Assigning more than the unassigned income pool holds
    #[error("Cannot assign {requested}: only {available} left to assign")]
    InsufficientUnassigned { requested: f64, available: f64 },

    /// Unassigning would take the category's assigned amount below zero
    #[error("Cannot unassign {requested}: only {assigned} is assigned")]
    NegativeAssignment { requested: f64, assigned: f64 },

    /// Unassigning would take the category's available amount below zero
    #[error("Cannot unassign: available would drop to {projected}")]
    WouldOverdraw { projected: f64 },

    /// Spending more than the category has available
    #[error("Insufficient funds in category '{category}': need {needed}, have {available}")]
    InsufficientFunds {
        category: String,
        needed: f64,
        available: f64,
    },

    /// Deleting a category that transactions still reference
    #[error("Category '{category}' has transactions; delete them first")]
    CategoryInUse { category: String },

    /// Deleting a category that still holds assigned or activity amounts
    #[error("Category '{category}' still has assigned or activity amounts")]
    CategoryNotEmpty { category: String },

    /// Import input has no data rows
    #[error("Import file is empty: need a header row and at least one data row")]
    EmptyFile,

    /// Import header lacks required columns
    #[error("Import header is missing required columns: {missing}")]
    MissingColumns { missing: String },
}

impl LedgerError {
    /// Create a "category not found" error
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::CategoryNotFound {
            identifier: identifier.into(),
        }
    }

    /// Create a "transaction not found" error
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::TransactionNotFound {
            identifier: identifier.into(),
        }
    }

    /// Create an "invalid amount" error
    pub fn invalid_amount(amount: f64) -> Self {
        Self::InvalidAmount { amount }
    }

    /// Create an "invalid date" error
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CategoryNotFound { .. } | Self::TransactionNotFound { .. }
        )
    }

    /// Check if this is a persistence error
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl From<serde_yaml::Error> for LedgerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = LedgerError::category_not_found("Groceries");
        assert_eq!(err.to_string(), "Category not found: Groceries");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_insufficient_funds_error() {
        let err = LedgerError::InsufficientFunds {
            category: "Groceries".into(),
            needed: 5000.0,
            available: 3000.0,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds in category 'Groceries': need 5000, have 3000"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(ledger_err.is_persistence());
    }
}
