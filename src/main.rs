use anyhow::Result;
use clap::{Parser, Subcommand};

use tenge_ledger::cli::{
    handle_assign, handle_category_command, handle_export_command, handle_import_command,
    handle_income, handle_overview, handle_reset, handle_transaction_command, resolve_month,
    CategoryCommands, ExportCommands, TransactionCommands,
};
use tenge_ledger::config::{paths::LedgerPaths, settings::Settings};
use tenge_ledger::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "tenge",
    version,
    about = "Envelope-budgeting ledger for the terminal",
    long_about = "tenge is a monthly envelope-budgeting ledger: record income, \
                  assign it into category envelopes, charge expenses against \
                  them, and bulk-import transactions from CSV. Every month is \
                  an independent ledger keyed by YYYY-MM."
)]
struct Cli {
    /// Month to operate on (YYYY-MM, defaults to the current month)
    #[arg(short, long, global = true)]
    month: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month overview: income, left to assign, envelopes, transactions
    Overview,

    /// Add income to the month's pool (without logging a transaction)
    Income {
        /// Amount to add
        amount: f64,
    },

    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(CategoryCommands),

    /// Assign money to a category (negative amount deallocates)
    Assign {
        /// Category name, id, or id prefix
        category: String,
        /// Amount to allocate (negative to move back to the pool)
        #[arg(allow_hyphen_values = true)]
        amount: f64,
    },

    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Tx(TransactionCommands),

    /// Import transactions from a CSV file into the month
    Import {
        /// Path to the CSV file (columns: date,type,amount,category,note)
        file: std::path::PathBuf,
    },

    /// Export ledger data
    #[command(subcommand)]
    Export(ExportCommands),

    /// Delete all ledger data
    Reset {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let mut store = LedgerStore::open(&paths)?;
    let key = resolve_month(cli.month.as_deref())?;

    let outcome = match cli.command {
        Some(Commands::Overview) => handle_overview(&store, &settings, key),
        Some(Commands::Income { amount }) => handle_income(&mut store, &settings, key, amount),
        Some(Commands::Category(cmd)) => handle_category_command(&mut store, &settings, key, cmd),
        Some(Commands::Assign { category, amount }) => {
            handle_assign(&mut store, &settings, key, &category, amount)
        }
        Some(Commands::Tx(cmd)) => handle_transaction_command(&mut store, &settings, key, cmd),
        Some(Commands::Import { file }) => handle_import_command(&mut store, key, &file),
        Some(Commands::Export(cmd)) => handle_export_command(&store, key, cmd),
        Some(Commands::Reset { yes }) => handle_reset(&mut store, yes),
        Some(Commands::Config) => {
            println!("tenge-ledger configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", store.path().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            Ok(())
        }
        None => {
            println!("tenge - envelope-budgeting ledger");
            println!();
            println!("Run 'tenge --help' for usage information.");
            println!("Run 'tenge overview' to see the current month.");
            Ok(())
        }
    };

    if let Err(error) = outcome {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }

    Ok(())
}
