//! CSV reconciliation importer
//!
//! Turns a delimited table of transactions into month-record mutations, row
//! by row. Each expense row is reconciled against the envelope model: when a
//! category does not hold enough, the shortfall is covered from the
//! unassigned pool before the expense is charged, and the row is skipped if
//! the pool cannot cover it either. Rows are processed in input order, so
//! every auto-allocation shrinks the pool the later rows draw from.
//!
//! The parser works line-first by contract: delimiter detection and line
//! splitting happen before field parsing, quotes escape delimiters within a
//! line, and a doubled quote is a literal quote. Multi-line quoted fields are
//! not part of the format.

use std::fmt;

use crate::engine::parse_transaction_date;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, MonthRecord, Transaction, TransactionKind};

/// Category name used when an expense row leaves the category field blank
pub const DEFAULT_CATEGORY_NAME: &str = "Без категории";

const REQUIRED_COLUMNS: [&str; 5] = ["date", "type", "amount", "category", "note"];

/// Why a single data row was skipped
#[derive(Debug, Clone, PartialEq)]
pub enum RowError {
    /// The type field is not a recognized income/expense spelling
    BadType,
    /// The amount field is not a finite positive number
    BadAmount,
    /// The date field is not a valid YYYY-MM-DD date
    BadDate,
    /// The category cannot cover the amount even after drawing on the pool
    InsufficientFunds {
        category: String,
        needed: f64,
        available: f64,
    },
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::BadType => write!(f, "unrecognized type (expected income or expense)"),
            RowError::BadAmount => write!(f, "amount is not a positive number"),
            RowError::BadDate => write!(f, "date is not a valid YYYY-MM-DD date"),
            RowError::InsufficientFunds {
                category,
                needed,
                available,
            } => write!(
                f,
                "insufficient funds in '{}': need {}, have {} (incl. unassigned)",
                category, needed, available
            ),
        }
    }
}

/// A skipped row: its 1-based line number within the trimmed input, plus why
#[derive(Debug, Clone, PartialEq)]
pub struct RowRejection {
    pub line: usize,
    pub error: RowError,
}

/// Outcome of one import run. Partial success is normal: accepted rows are
/// committed, rejected rows are listed, nothing aborts mid-file.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    /// Rows whose effects were applied
    pub imported: usize,
    /// Rows skipped, each with a reason in `rejections`
    pub skipped: usize,
    /// Per-row rejection reasons, in input order
    pub rejections: Vec<RowRejection>,
}

impl ImportReport {
    fn reject(&mut self, line: usize, error: RowError) {
        self.skipped += 1;
        self.rejections.push(RowRejection { line, error });
    }
}

/// Field indices for the required columns, located from the header row
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    date: usize,
    kind: usize,
    amount: usize,
    category: usize,
    note: usize,
}

impl ColumnIndex {
    /// Locate every required column by exact normalized name, or report all
    /// the missing ones at once.
    fn locate(header_fields: &[String]) -> LedgerResult<Self> {
        let normalized: Vec<String> = header_fields
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();

        let find = |name: &str| normalized.iter().position(|h| h == name);

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| find(name).is_none())
            .copied()
            .collect();
        if !missing.is_empty() {
            return Err(LedgerError::MissingColumns {
                missing: missing.join(", "),
            });
        }

        Ok(Self {
            date: find("date").unwrap(),
            kind: find("type").unwrap(),
            amount: find("amount").unwrap(),
            category: find("category").unwrap(),
            note: find("note").unwrap(),
        })
    }
}

/// Import a CSV document into the given month record.
///
/// The whole input is read up front; accepted rows mutate the record in
/// input order and the report carries the final counts. Only two failures
/// abort the import before any row is processed: an input with no data rows
/// (`EmptyFile`) and a header lacking a required column (`MissingColumns`).
pub fn import_csv(month: &mut MonthRecord, text: &str) -> LedgerResult<ImportReport> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if lines.len() < 2 {
        return Err(LedgerError::EmptyFile);
    }

    let delimiter = detect_delimiter(lines[0]);
    let header_fields = split_line(lines[0], delimiter);
    let columns = ColumnIndex::locate(&header_fields)?;

    let mut report = ImportReport::default();

    for (index, line) in lines.iter().enumerate().skip(1) {
        let line_number = index + 1;
        let fields = split_line(line, delimiter);
        let field = |i: usize| fields.get(i).map(String::as_str).unwrap_or("");

        let Some(kind) = TransactionKind::parse_loose(field(columns.kind)) else {
            report.reject(line_number, RowError::BadType);
            continue;
        };
        let Some(amount) = parse_amount(field(columns.amount)) else {
            report.reject(line_number, RowError::BadAmount);
            continue;
        };
        let Ok(date) = parse_transaction_date(field(columns.date)) else {
            report.reject(line_number, RowError::BadDate);
            continue;
        };
        // An absent date field must not silently become "today" here: the
        // import contract requires an explicit date per row.
        if field(columns.date).trim().is_empty() {
            report.reject(line_number, RowError::BadDate);
            continue;
        }

        let note = field(columns.note);

        match kind {
            TransactionKind::Income => {
                month.income += amount;
                month.transactions.push(Transaction::income(date, amount, note));
                report.imported += 1;
            }
            TransactionKind::Expense => {
                let name = {
                    let raw = field(columns.category).trim();
                    if raw.is_empty() {
                        DEFAULT_CATEGORY_NAME
                    } else {
                        raw
                    }
                    .to_string()
                };

                let category_id = match month.category_by_name(&name) {
                    Some(category) => category.id,
                    None => {
                        // Auto-create on first mention; stays behind as an
                        // empty leaf even if this row ends up rejected.
                        let category = Category::new(name.clone(), 0.0, None);
                        let id = category.id;
                        month.categories.push(category);
                        id
                    }
                };

                // Shortfall reconciliation: draw the missing part from the
                // unassigned pool when it is large enough.
                let to_assign = month.amount_to_assign();
                let category = month.category_mut(category_id).expect("just resolved");
                let assigned_before = category.assigned;
                let mut available = category.available();
                if amount > available {
                    let need = amount - available;
                    if need <= to_assign {
                        category.assigned += need;
                        available = category.available();
                    }
                }

                if amount > available {
                    category.assigned = assigned_before;
                    report.reject(
                        line_number,
                        RowError::InsufficientFunds {
                            category: name,
                            needed: amount,
                            available,
                        },
                    );
                    continue;
                }

                category.activity -= amount;
                month
                    .transactions
                    .push(Transaction::expense(date, amount, category_id, note));
                report.imported += 1;
            }
        }
    }

    Ok(report)
}

/// Pick the field delimiter from the header line: `;` only when it is
/// strictly more frequent than `,`.
fn detect_delimiter(header: &str) -> char {
    let commas = header.matches(',').count();
    let semicolons = header.matches(';').count();
    if semicolons > commas {
        ';'
    } else {
        ','
    }
}

/// Split one line into trimmed fields. Double quotes enclose fields (hiding
/// the delimiter), and a doubled quote inside a quoted field is a literal
/// quote character.
fn split_line(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '"' {
            if in_quotes && chars.peek() == Some(&'"') {
                current.push('"');
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
            continue;
        }
        if ch == delimiter && !in_quotes {
            fields.push(current.trim().to_string());
            current.clear();
            continue;
        }
        current.push(ch);
    }
    fields.push(current.trim().to_string());
    fields
}

/// Parse an amount field: whitespace is ignored anywhere ("12 000"), a
/// decimal comma is accepted ("12,5"). Only finite positive values pass.
fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    let value: f64 = cleaned.parse().ok()?;
    if value.is_finite() && value > 0.0 {
        Some(value)
    } else {
        None
    }
}
