//! Top-level ledger commands: overview, income, assign, reset

use crate::config::settings::Settings;
use crate::display::format_overview;
use crate::display::overview::format_categories_table;
use crate::engine;
use crate::error::LedgerResult;
use crate::models::MonthKey;
use crate::storage::LedgerStore;

use super::resolve_category_id;

/// Print the month overview (summary, categories, transactions)
pub fn handle_overview(
    store: &LedgerStore,
    settings: &Settings,
    key: MonthKey,
) -> LedgerResult<()> {
    // Viewing must not create the month record; render an empty one instead
    let month = store.month(key).cloned().unwrap_or_default();
    print!("{}", format_overview(key, &month, &settings.currency_symbol));
    Ok(())
}

/// Add income to the month's pool (no transaction entry)
pub fn handle_income(
    store: &mut LedgerStore,
    settings: &Settings,
    key: MonthKey,
    amount: f64,
) -> LedgerResult<()> {
    let month = store.month_mut(key);
    let total = engine::record_income(month, amount)?;
    let to_assign = month.amount_to_assign();
    store.save()?;

    println!(
        "Recorded income of {} for {}",
        crate::display::format_amount(amount, &settings.currency_symbol),
        key
    );
    println!(
        "  Income total:   {}",
        crate::display::format_amount(total, &settings.currency_symbol)
    );
    println!(
        "  Left to assign: {}",
        crate::display::format_amount(to_assign, &settings.currency_symbol)
    );
    Ok(())
}

/// Move money between the unassigned pool and a category envelope
pub fn handle_assign(
    store: &mut LedgerStore,
    settings: &Settings,
    key: MonthKey,
    category: &str,
    amount: f64,
) -> LedgerResult<()> {
    let month = store.month_mut(key);
    let category_id = resolve_category_id(month, category)?;
    engine::assign(month, category_id, amount)?;
    let table = format_categories_table(month, &settings.currency_symbol);
    let to_assign = month.amount_to_assign();
    store.save()?;

    print!("{}", table);
    println!(
        "\nLeft to assign: {}",
        crate::display::format_amount(to_assign, &settings.currency_symbol)
    );
    Ok(())
}

/// Wipe the stored document after an explicit confirmation flag
pub fn handle_reset(store: &mut LedgerStore, yes: bool) -> LedgerResult<()> {
    if !yes {
        println!("This deletes every month, category, and transaction.");
        println!("Re-run with --yes to confirm.");
        return Ok(());
    }
    store.wipe()?;
    println!("Ledger data deleted.");
    Ok(())
}
