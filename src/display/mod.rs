//! Display formatting for terminal output
//!
//! Amount formatting plus the table renderers for the month overview.

pub mod overview;

pub use overview::{format_categories_table, format_overview, format_transactions_table};

/// Format an amount with space-grouped thousands, a decimal comma, and the
/// configured currency symbol: `12 345,5 ₸`. Values are rounded to two
/// decimal places; whole values render without a fraction.
pub fn format_amount(amount: f64, symbol: &str) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as i64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let mut grouped = String::new();
    let digits = whole.to_string();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative && cents != 0 {
        out.push('-');
    }
    out.push_str(&grouped);
    if fraction != 0 {
        if fraction % 10 == 0 {
            out.push_str(&format!(",{}", fraction / 10));
        } else {
            out.push_str(&format!(",{:02}", fraction));
        }
    }
    if !symbol.is_empty() {
        out.push(' ');
        out.push_str(symbol);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_whole_amounts() {
        assert_eq!(format_amount(0.0, "₸"), "0 ₸");
        assert_eq!(format_amount(500.0, "₸"), "500 ₸");
        assert_eq!(format_amount(12000.0, "₸"), "12 000 ₸");
        assert_eq!(format_amount(1234567.0, "₸"), "1 234 567 ₸");
    }

    #[test]
    fn test_format_fractional_amounts() {
        assert_eq!(format_amount(12.5, "₸"), "12,5 ₸");
        assert_eq!(format_amount(3400.75, "₸"), "3 400,75 ₸");
        assert_eq!(format_amount(0.05, "₸"), "0,05 ₸");
    }

    #[test]
    fn test_format_negative_amounts() {
        assert_eq!(format_amount(-20000.0, "₸"), "-20 000 ₸");
        assert_eq!(format_amount(-12.5, "₸"), "-12,5 ₸");
        // Rounds away the sign for a vanishing fraction
        assert_eq!(format_amount(-0.001, "₸"), "0 ₸");
    }

    #[test]
    fn test_format_other_symbols() {
        assert_eq!(format_amount(1000.0, "$"), "1 000 $");
        assert_eq!(format_amount(1000.0, ""), "1 000");
    }
}
