use anyhow::Result;
use clap::{Parser, Subcommand};

use pocket_ledger::cli::{handle_transaction_command, TransactionCommands};
use pocket_ledger::config::{LedgerPaths, Settings};
use pocket_ledger::logging::{self, LogTarget};
use pocket_ledger::storage::Storage;
use pocket_ledger::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Personal income and expense ledger",
    long_about = "Pocket Ledger records income and expense transactions, filters \
                  them by type, category and description, and keeps a running \
                  income / expense / balance summary. Run without a command to \
                  open the interactive interface."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    #[command(flatten)]
    Ledger(TransactionCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);

    let paths = LedgerPaths::new()?;
    let target = match command {
        Commands::Tui => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    logging::init(&paths, target)?;

    let settings = Settings::load_or_create(&paths)?;
    let mut storage = Storage::open(paths.clone())?;

    match command {
        Commands::Tui => run_tui(&mut storage, &settings)?,
        Commands::Ledger(cmd) => handle_transaction_command(&mut storage, &settings, cmd)?,
        Commands::Config => {
            println!("Pocket Ledger Configuration");
            println!("===========================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Audit log:         {}", paths.audit_log().display());
            println!("Diagnostics log:   {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Digit grouping:    {:?}", settings.digit_grouping);
            println!("  Date format:       {}", settings.date_format);
            println!("  Notification secs: {}", settings.notification_secs);
            println!("  Categories:        {}", settings.categories.join(", "));
        }
    }

    Ok(())
}
