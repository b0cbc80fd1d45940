//! Month overview rendering
//!
//! Formats a month record for the terminal: the income/to-assign summary,
//! the category envelope table with goal progress, and the date-sorted
//! transaction table.

use crate::display::format_amount;
use crate::models::{Category, MonthKey, MonthRecord};

/// Render the full overview screen for one month
pub fn format_overview(key: MonthKey, month: &MonthRecord, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Month: {}\n", key));
    output.push_str(&format!(
        "Income:         {}\n",
        format_amount(month.income, symbol)
    ));
    output.push_str(&format!(
        "Left to assign: {}\n",
        format_amount(month.amount_to_assign(), symbol)
    ));
    output.push('\n');

    output.push_str(&format_categories_table(month, symbol));
    output.push('\n');
    output.push_str(&format_transactions_table(month, symbol));

    output
}

/// Render the category envelope table
pub fn format_categories_table(month: &MonthRecord, symbol: &str) -> String {
    if month.categories.is_empty() {
        return "No categories yet. Run 'tenge category add <name>' to create one.\n".to_string();
    }

    let rows: Vec<[String; 5]> = month
        .categories
        .iter()
        .map(|category| {
            [
                category.name.clone(),
                format_amount(category.assigned, symbol),
                format_amount(category.activity, symbol),
                format_amount(category.available(), symbol),
                goal_text(category, symbol),
            ]
        })
        .collect();

    let headers = ["Category", "Assigned", "Activity", "Available", "Goal"];
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|r| r[i].chars().count())
                .max()
                .unwrap_or(0)
                .max(h.len())
        })
        .collect();

    let mut output = String::new();
    output.push_str(&format_row(&headers.map(String::from), &widths));
    output.push_str(&format_separator(&widths));
    for row in &rows {
        output.push_str(&format_row(row, &widths));
    }
    output
}

/// Render the transaction table, sorted by date ascending
pub fn format_transactions_table(month: &MonthRecord, symbol: &str) -> String {
    let transactions = month.sorted_transactions();
    if transactions.is_empty() {
        return "No transactions yet.\n".to_string();
    }

    let rows: Vec<[String; 6]> = transactions
        .iter()
        .map(|txn| {
            let category_name = txn
                .category_id
                .and_then(|id| month.category(id))
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "-".to_string());
            [
                txn.id.to_string(),
                txn.date.format("%Y-%m-%d").to_string(),
                txn.kind.to_string(),
                category_name,
                format_amount(txn.amount, symbol),
                txn.note.clone(),
            ]
        })
        .collect();

    let headers = ["ID", "Date", "Type", "Category", "Amount", "Note"];
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|r| r[i].chars().count())
                .max()
                .unwrap_or(0)
                .max(h.len())
        })
        .collect();

    let mut output = String::new();
    output.push_str(&format_row(&headers.map(String::from), &widths));
    output.push_str(&format_separator(&widths));
    for row in &rows {
        output.push_str(&format_row(row, &widths));
    }
    output
}

/// Render a category's goal column: "-" without a goal, otherwise the
/// target (and date), plus a progress hint.
fn goal_text(category: &Category, symbol: &str) -> String {
    if !category.has_goal() && category.goal_date.is_none() {
        return "-".to_string();
    }

    let mut text = String::new();
    if category.has_goal() {
        text.push_str(&format_amount(category.goal, symbol));
    }
    if let Some(date) = category.goal_date {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(&format!("by {}", date.format("%Y-%m-%d")));
    }
    if category.has_goal() {
        let remaining = category.goal_remaining();
        if remaining > 0.0 {
            text.push_str(&format!(" (short by {})", format_amount(remaining, symbol)));
        } else {
            text.push_str(" (goal met)");
        }
    }
    text
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        // Manual padding: char-count widths, not byte widths
        for _ in cell.chars().count()..widths[i] {
            line.push(' ');
        }
    }
    format!("{}\n", line.trim_end())
}

fn format_separator(widths: &[usize]) -> String {
    let columns: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    format!("{}\n", columns.join("  "))
}
