//! Month record: one month's complete ledger state
//!
//! Holds the income pool, the ordered category envelopes, and the
//! transaction log. Records are created lazily the first time a month is
//! touched and persist indefinitely. Derived quantities (amount to assign,
//! per-category available) are always recomputed, never stored.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::ids::{CategoryId, TransactionId};
use super::transaction::Transaction;

/// All ledger data for a single calendar month
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonthRecord {
    /// Total income recorded this month
    #[serde(default)]
    pub income: f64,

    /// Category envelopes, in creation order (also the display order)
    #[serde(default)]
    pub categories: Vec<Category>,

    /// Transaction log, unordered; display sorts by date
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl MonthRecord {
    /// Income not yet allocated to any category.
    ///
    /// Can go negative after income transactions are deleted; the user
    /// resolves that by unassigning.
    pub fn amount_to_assign(&self) -> f64 {
        let assigned: f64 = self.categories.iter().map(|c| c.assigned).sum();
        self.income - assigned
    }

    /// Look up a category by id
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Look up a category by id, mutably
    pub fn category_mut(&mut self, id: CategoryId) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.id == id)
    }

    /// Look up a category by name, case-insensitively, ignoring surrounding
    /// whitespace. First match wins.
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        let needle = name.trim().to_lowercase();
        self.categories
            .iter()
            .find(|c| c.name.to_lowercase() == needle)
    }

    /// Resolve a user-entered category query: name first, then id or id
    /// fragment.
    pub fn resolve_category(&self, query: &str) -> Option<&Category> {
        if let Some(category) = self.category_by_name(query) {
            return Some(category);
        }
        self.categories
            .iter()
            .find(|c| c.id.matches_fragment(query))
    }

    /// Look up a transaction by id
    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Resolve a user-entered transaction id or id fragment
    pub fn resolve_transaction(&self, query: &str) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|t| t.id.matches_fragment(query))
    }

    /// Whether any transaction references the given category
    pub fn has_transactions_for(&self, id: CategoryId) -> bool {
        self.transactions
            .iter()
            .any(|t| t.category_id == Some(id))
    }

    /// Transactions sorted by date ascending. The sort is stable, so
    /// same-date entries keep their insertion order.
    pub fn sorted_transactions(&self) -> Vec<&Transaction> {
        let mut sorted: Vec<&Transaction> = self.transactions.iter().collect();
        sorted.sort_by(|a, b| a.date.cmp(&b.date));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_amount_to_assign() {
        let mut record = MonthRecord::default();
        record.income = 100000.0;
        record.categories.push(Category::new("Food", 0.0, None));
        record.categories.push(Category::new("Rent", 0.0, None));
        record.categories[0].assigned = 30000.0;
        record.categories[1].assigned = 50000.0;
        assert_eq!(record.amount_to_assign(), 20000.0);
    }

    #[test]
    fn test_amount_to_assign_can_go_negative() {
        let mut record = MonthRecord::default();
        record.income = 10000.0;
        record.categories.push(Category::new("Food", 0.0, None));
        record.categories[0].assigned = 15000.0;
        assert_eq!(record.amount_to_assign(), -5000.0);
    }

    #[test]
    fn test_category_by_name_is_case_insensitive() {
        let mut record = MonthRecord::default();
        record.categories.push(Category::new("Groceries", 0.0, None));
        assert!(record.category_by_name("groceries").is_some());
        assert!(record.category_by_name("  GROCERIES ").is_some());
        assert!(record.category_by_name("grocery").is_none());
    }

    #[test]
    fn test_resolve_category_falls_back_to_id() {
        let mut record = MonthRecord::default();
        record.categories.push(Category::new("Food", 0.0, None));
        let id = record.categories[0].id;
        let fragment = &id.as_uuid().to_string()[..8];
        assert_eq!(record.resolve_category(fragment).map(|c| c.id), Some(id));
        assert_eq!(record.resolve_category("Food").map(|c| c.id), Some(id));
        assert!(record.resolve_category("zzz").is_none());
    }

    #[test]
    fn test_has_transactions_for() {
        let mut record = MonthRecord::default();
        let category = Category::new("Food", 0.0, None);
        let id = category.id;
        record.categories.push(category);
        assert!(!record.has_transactions_for(id));

        record
            .transactions
            .push(Transaction::expense(date(2025, 1, 10), 500.0, id, ""));
        assert!(record.has_transactions_for(id));
    }

    #[test]
    fn test_sorted_transactions_is_stable() {
        let mut record = MonthRecord::default();
        record
            .transactions
            .push(Transaction::income(date(2025, 1, 20), 1.0, "late"));
        record
            .transactions
            .push(Transaction::income(date(2025, 1, 5), 2.0, "first"));
        record
            .transactions
            .push(Transaction::income(date(2025, 1, 5), 3.0, "second"));

        let sorted = record.sorted_transactions();
        assert_eq!(sorted[0].note, "first");
        assert_eq!(sorted[1].note, "second");
        assert_eq!(sorted[2].note, "late");
    }

    #[test]
    fn test_partial_json_defaults() {
        let record: MonthRecord = serde_json::from_str("{\"income\": 500}").unwrap();
        assert_eq!(record.income, 500.0);
        assert!(record.categories.is_empty());
        assert!(record.transactions.is_empty());

        let empty: MonthRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.income, 0.0);
    }
}
