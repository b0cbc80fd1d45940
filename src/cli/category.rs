//! Category CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_categories_table;
use crate::engine;
use crate::error::{LedgerError, LedgerResult};
use crate::models::MonthKey;
use crate::storage::LedgerStore;

use super::resolve_category_id;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Create a new category envelope
    Add {
        /// Category name
        name: String,
        /// Funding goal amount for this month
        #[arg(long, default_value = "0")]
        goal: f64,
        /// Target date for the goal (YYYY-MM-DD, informational)
        #[arg(long)]
        goal_date: Option<String>,
    },

    /// List categories with assigned/activity/available amounts
    List,

    /// Delete a category (must be empty and unreferenced)
    Delete {
        /// Category name, id, or id prefix
        category: String,
    },
}

/// Handle a category command against one month's record
pub fn handle_category_command(
    store: &mut LedgerStore,
    settings: &Settings,
    key: MonthKey,
    cmd: CategoryCommands,
) -> LedgerResult<()> {
    match cmd {
        CategoryCommands::Add {
            name,
            goal,
            goal_date,
        } => {
            let goal_date = goal_date
                .map(|raw| {
                    chrono::NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                        .map_err(|_| LedgerError::invalid_date(raw))
                })
                .transpose()?;

            let month = store.month_mut(key);
            let category = engine::add_category(month, &name, goal, goal_date)?;
            store.save()?;

            println!("Created category: {}", category.name);
            println!("  ID: {}", category.id);
            if category.has_goal() {
                println!(
                    "  Goal: {}",
                    crate::display::format_amount(category.goal, &settings.currency_symbol)
                );
            }
        }

        CategoryCommands::List => {
            let month = store.month(key).cloned().unwrap_or_default();
            print!(
                "{}",
                format_categories_table(&month, &settings.currency_symbol)
            );
        }

        CategoryCommands::Delete { category } => {
            let month = store.month_mut(key);
            let category_id = resolve_category_id(month, &category)?;
            let name = month
                .category(category_id)
                .map(|c| c.name.clone())
                .unwrap_or_default();
            engine::delete_category(month, category_id)?;
            store.save()?;
            println!("Deleted category: {}", name);
        }
    }

    Ok(())
}
