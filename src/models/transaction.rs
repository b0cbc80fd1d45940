//! Transaction model
//!
//! A transaction is either an income (adds to the month's income pool, no
//! category) or an expense (charged against exactly one category). Amounts
//! are strictly positive at creation; the kind determines the sign of the
//! effect.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, TransactionId};

/// The two directions a transaction can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money entering the month's income pool
    Income,
    /// Money leaving a category envelope
    Expense,
}

impl TransactionKind {
    /// Parse user-facing type spellings, including the Russian aliases the
    /// import format accepts. Returns None for anything unrecognized.
    pub fn parse_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "доход" => Some(Self::Income),
            "expense" | "расход" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A single ledger entry within a month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Transaction date
    pub date: NaiveDate,

    /// Income or expense
    pub kind: TransactionKind,

    /// Always positive; the kind carries the direction
    #[serde(default)]
    pub amount: f64,

    /// The charged category; None for income
    #[serde(default)]
    pub category_id: Option<CategoryId>,

    /// Free-text note, stored trimmed
    #[serde(default)]
    pub note: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(kind: TransactionKind, date: NaiveDate, amount: f64) -> Self {
        Self {
            id: TransactionId::new(),
            date,
            kind,
            amount,
            category_id: None,
            note: String::new(),
        }
    }

    /// Create an income entry
    pub fn income(date: NaiveDate, amount: f64, note: impl Into<String>) -> Self {
        let mut txn = Self::new(TransactionKind::Income, date, amount);
        txn.note = note.into().trim().to_string();
        txn
    }

    /// Create an expense entry charged to a category
    pub fn expense(
        date: NaiveDate,
        amount: f64,
        category_id: CategoryId,
        note: impl Into<String>,
    ) -> Self {
        let mut txn = Self::new(TransactionKind::Expense, date, amount);
        txn.category_id = Some(category_id);
        txn.note = note.into().trim().to_string();
        txn
    }

    /// Check if this is an income entry
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense entry
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_income_transaction() {
        let txn = Transaction::income(test_date(), 5000.0, "salary");
        assert!(txn.is_income());
        assert_eq!(txn.amount, 5000.0);
        assert!(txn.category_id.is_none());
        assert_eq!(txn.note, "salary");
    }

    #[test]
    fn test_expense_transaction() {
        let category_id = CategoryId::new();
        let txn = Transaction::expense(test_date(), 1200.0, category_id, "  lunch  ");
        assert!(txn.is_expense());
        assert_eq!(txn.category_id, Some(category_id));
        assert_eq!(txn.note, "lunch");
    }

    #[test]
    fn test_kind_parse_loose() {
        assert_eq!(
            TransactionKind::parse_loose("income"),
            Some(TransactionKind::Income)
        );
        assert_eq!(
            TransactionKind::parse_loose(" EXPENSE "),
            Some(TransactionKind::Expense)
        );
        assert_eq!(
            TransactionKind::parse_loose("Доход"),
            Some(TransactionKind::Income)
        );
        assert_eq!(
            TransactionKind::parse_loose("расход"),
            Some(TransactionKind::Expense)
        );
        assert_eq!(TransactionKind::parse_loose("transfer"), None);
        assert_eq!(TransactionKind::parse_loose(""), None);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&TransactionKind::Expense).unwrap();
        assert_eq!(json, "\"expense\"");
        let back: TransactionKind = serde_json::from_str("\"income\"").unwrap();
        assert_eq!(back, TransactionKind::Income);
    }

    #[test]
    fn test_date_serializes_as_iso() {
        let txn = Transaction::income(test_date(), 100.0, "");
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"2025-01-15\""));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let txn = Transaction::expense(test_date(), 750.5, CategoryId::new(), "taxi");
        let json = serde_json::to_string(&txn).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, txn.id);
        assert_eq!(back.kind, txn.kind);
        assert_eq!(back.amount, txn.amount);
        assert_eq!(back.category_id, txn.category_id);
    }
}
