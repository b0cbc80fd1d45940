//! CSV export
//!
//! Writes one month's transactions with the header
//! `date,type,amount,category,note` — exactly the columns the importer
//! requires, so a file exported here can be imported back.

use std::io::Write;
use std::path::Path;

use crate::error::LedgerResult;
use crate::models::MonthRecord;

/// Export a month's transactions as CSV, sorted by date ascending
pub fn export_month_csv<W: Write>(month: &MonthRecord, writer: &mut W) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["date", "type", "amount", "category", "note"])?;

    for txn in month.sorted_transactions() {
        let category_name = txn
            .category_id
            .and_then(|id| month.category(id))
            .map(|c| c.name.as_str())
            .unwrap_or("");

        csv_writer.write_record([
            txn.date.format("%Y-%m-%d").to_string(),
            txn.kind.to_string(),
            format_amount_field(txn.amount),
            category_name.to_string(),
            txn.note.clone(),
        ])?;
    }

    csv_writer.flush().map_err(crate::error::LedgerError::from)?;
    Ok(())
}

/// Export a month's transactions to a file, creating parent directories
pub fn write_month_csv(path: &Path, month: &MonthRecord) -> LedgerResult<()> {
    super::ensure_parent_dir(path)?;
    let mut file = std::fs::File::create(path)?;
    export_month_csv(month, &mut file)
}

/// Render an amount without a trailing ".0" for whole values
fn format_amount_field(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{}", amount)
    }
}
