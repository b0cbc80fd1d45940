//! Envelope accounting engine
//!
//! The core of the ledger: every mutation of a month record goes through one
//! of these operations. Each one validates its inputs against the envelope
//! invariants and either commits the change or returns a typed error with the
//! month record untouched. The operations take the record by `&mut` so the
//! caller decides which store and which month they apply to.
//!
//! The invariant everything here protects: for every category,
//! `available = assigned + activity` never drops below zero at rest.

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, CategoryId, MonthRecord, Transaction, TransactionId, TransactionKind};

/// Add income to the month's pool without logging a transaction.
///
/// This is the quick-add path; `record_transaction` with
/// [`TransactionKind::Income`] also bumps the pool but logs an entry too.
/// Returns the new income total.
pub fn record_income(month: &mut MonthRecord, amount: f64) -> LedgerResult<f64> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(LedgerError::invalid_amount(amount));
    }
    month.income += amount;
    Ok(month.income)
}

/// Create a new category envelope and append it to the month's sequence.
///
/// The name must be non-empty after trimming. Goals that are negative or
/// non-finite are stored as 0 (no goal).
pub fn add_category(
    month: &mut MonthRecord,
    name: &str,
    goal: f64,
    goal_date: Option<NaiveDate>,
) -> LedgerResult<Category> {
    if name.trim().is_empty() {
        return Err(LedgerError::InvalidName);
    }
    let category = Category::new(name, goal, goal_date);
    month.categories.push(category.clone());
    Ok(category)
}

/// Move money between the unassigned pool and a category envelope.
///
/// A positive amount allocates from the pool (limited by what is left to
/// assign); a negative amount deallocates back to the pool (limited by what
/// the envelope still holds unspent). Zero is rejected. Returns the
/// category's new assigned total.
pub fn assign(month: &mut MonthRecord, category_id: CategoryId, amount: f64) -> LedgerResult<f64> {
    if !amount.is_finite() || amount == 0.0 {
        return Err(LedgerError::invalid_amount(amount));
    }
    if month.categories.is_empty() {
        return Err(LedgerError::NoCategories);
    }

    let to_assign = month.amount_to_assign();
    let category = month
        .category_mut(category_id)
        .ok_or_else(|| LedgerError::category_not_found(category_id.to_string()))?;

    if amount > 0.0 {
        if amount > to_assign {
            return Err(LedgerError::InsufficientUnassigned {
                requested: amount,
                available: to_assign,
            });
        }
        category.assigned += amount;
        return Ok(category.assigned);
    }

    // Deallocation: never below zero, and never below what is already spent
    let new_assigned = category.assigned + amount;
    if new_assigned < 0.0 {
        return Err(LedgerError::NegativeAssignment {
            requested: -amount,
            assigned: category.assigned,
        });
    }
    let new_available = new_assigned + category.activity;
    if new_available < 0.0 {
        return Err(LedgerError::WouldOverdraw {
            projected: new_available,
        });
    }
    category.assigned = new_assigned;
    Ok(category.assigned)
}

/// Record an income or expense transaction.
///
/// `date` is the raw user input: empty means "today", anything else must be
/// a valid `YYYY-MM-DD` calendar date. Expenses are charged against a
/// category and are limited by that category's available amount. Returns a
/// clone of the appended transaction.
pub fn record_transaction(
    month: &mut MonthRecord,
    kind: TransactionKind,
    amount: f64,
    category_id: Option<CategoryId>,
    note: &str,
    date: &str,
) -> LedgerResult<Transaction> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(LedgerError::invalid_amount(amount));
    }
    let date = parse_transaction_date(date)?;

    match kind {
        TransactionKind::Income => {
            month.income += amount;
            let txn = Transaction::income(date, amount, note);
            month.transactions.push(txn.clone());
            Ok(txn)
        }
        TransactionKind::Expense => {
            if month.categories.is_empty() {
                return Err(LedgerError::NoCategories);
            }
            let category_id = category_id.ok_or(LedgerError::CategoryRequired)?;
            let category = month
                .category_mut(category_id)
                .ok_or_else(|| LedgerError::category_not_found(category_id.to_string()))?;

            let available = category.available();
            if amount > available {
                return Err(LedgerError::InsufficientFunds {
                    category: category.name.clone(),
                    needed: amount,
                    available,
                });
            }

            category.activity -= amount;
            let txn = Transaction::expense(date, amount, category_id, note);
            month.transactions.push(txn.clone());
            Ok(txn)
        }
    }
}

/// Delete a transaction and roll back its effect.
///
/// Returns `Ok(false)` when the id matches nothing (a no-op, not an error).
/// Deleting an expense restores the category's activity; if the category no
/// longer resolves the rollback is simply skipped. Deleting an income entry
/// decrements the pool unconditionally, even when that leaves more assigned
/// than income — the resulting negative amount-to-assign is the user's to
/// fix by deallocating.
pub fn delete_transaction(month: &mut MonthRecord, id: TransactionId) -> LedgerResult<bool> {
    let Some(txn) = month.transaction(id).cloned() else {
        return Ok(false);
    };

    match txn.kind {
        TransactionKind::Expense => {
            if let Some(category) = txn.category_id.and_then(|cid| month.category_mut(cid)) {
                category.activity += txn.amount;
            }
        }
        TransactionKind::Income => {
            month.income -= txn.amount;
        }
    }

    month.transactions.retain(|t| t.id != id);
    Ok(true)
}

/// Delete a category envelope.
///
/// Returns `Ok(false)` when the id matches nothing. Deletion is a leaf
/// operation: the category must have no referencing transactions and both
/// balances must be exactly zero.
pub fn delete_category(month: &mut MonthRecord, id: CategoryId) -> LedgerResult<bool> {
    let Some(category) = month.category(id) else {
        return Ok(false);
    };
    let name = category.name.clone();

    if month.has_transactions_for(id) {
        return Err(LedgerError::CategoryInUse { category: name });
    }
    if !month.category(id).map(Category::is_empty).unwrap_or(false) {
        return Err(LedgerError::CategoryNotEmpty { category: name });
    }

    month.categories.retain(|c| c.id != id);
    Ok(true)
}

/// Parse a transaction date input: empty means today, otherwise the input
/// must be a valid `YYYY-MM-DD` calendar date.
pub fn parse_transaction_date(input: &str) -> LedgerResult<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(chrono::Local::now().date_naive());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| LedgerError::invalid_date(input))
}
