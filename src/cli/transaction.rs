//! Transaction CLI commands
//!
//! Implements the one-shot commands that mirror the TUI's form, table,
//! summary panel and clear button.

use std::io::{self, BufRead, Write};

use clap::{Args, Subcommand};

use crate::config::Settings;
use crate::display::{format_summary, format_transaction_details, format_transaction_table};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{TransactionId, TransactionType};
use crate::services::{
    ClearOutcome, CreateTransactionInput, TransactionFilter, TransactionService,
};
use crate::storage::Storage;

/// Filter controls shared by `list` and `summary`
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Type filter: all, income or expense
    #[arg(short = 't', long = "type", default_value = "all")]
    pub kind: String,
    /// Category filter: all or an exact category name
    #[arg(short, long, default_value = "all")]
    pub category: String,
    /// Case-insensitive search on the description
    #[arg(short, long, default_value = "")]
    pub search: String,
}

impl FilterArgs {
    fn to_filter(&self) -> LedgerResult<TransactionFilter> {
        Ok(TransactionFilter::from_controls(
            &self.kind,
            &self.category,
            &self.search,
        )?)
    }
}

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// income or expense
        #[arg(value_name = "TYPE")]
        kind: String,
        /// Positive amount, e.g. "1200" or "1,200.50"
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// What the money was for; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
        /// Category label
        #[arg(short, long)]
        category: String,
    },
    /// List transactions, newest first, followed by their totals
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Show income, expense and balance totals
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Show a single transaction
    Show {
        /// Transaction ID
        id: String,
    },
    /// Delete a transaction by ID
    #[command(alias = "rm")]
    Delete {
        /// Transaction ID
        id: String,
    },
    /// Delete every transaction
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// List configured categories and categories in use
    Categories,
    /// Show recent additions, deletions and clears
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            description,
            category,
        } => {
            let kind: TransactionType = kind.parse()?;
            let mut service = TransactionService::new(storage, settings);
            let txn = service.create(CreateTransactionInput {
                kind,
                category,
                description: description.join(" "),
                amount,
            })?;
            println!("Transaction added ✅ (id {})", txn.id);
        }

        TransactionCommands::List { filter } => {
            let filter = filter.to_filter()?;
            let service = TransactionService::new(storage, settings);
            let rows = service.list(&filter);
            print!("{}", format_transaction_table(&rows, settings));
            println!();
            print!("{}", format_summary(&service.summary(&filter), settings));
        }

        TransactionCommands::Summary { filter } => {
            let filter = filter.to_filter()?;
            let service = TransactionService::new(storage, settings);
            print!("{}", format_summary(&service.summary(&filter), settings));
        }

        TransactionCommands::Show { id } => {
            let service = TransactionService::new(storage, settings);
            let txn = service.find(&id).ok_or_else(|| {
                LedgerError::Validation(format!("No transaction with id {}", id.trim()))
            })?;
            print!("{}", format_transaction_details(txn, settings));
        }

        TransactionCommands::Delete { id } => {
            let id = parse_id(&id)?;
            let mut service = TransactionService::new(storage, settings);
            match service.delete(id)? {
                Some(txn) => println!("Deleted ✅ ({} {})", txn.id, txn.description),
                None => println!("No transaction with id {}; nothing deleted", id),
            }
        }

        TransactionCommands::Clear { force } => {
            let mut service = TransactionService::new(storage, settings);
            let outcome = service.clear_all(|prompt| force || prompt_confirm(prompt))?;
            match outcome {
                ClearOutcome::Cleared(count) => println!("Cleared ✅ ({} removed)", count),
                ClearOutcome::Declined => println!("Aborted."),
            }
        }

        TransactionCommands::Categories => {
            println!("Configured categories:");
            for category in &settings.categories {
                println!("  {}", category);
            }

            let extra: Vec<String> = storage
                .transactions
                .categories()
                .into_iter()
                .filter(|c| !settings.categories.contains(c))
                .collect();
            if !extra.is_empty() {
                println!();
                println!("Also in use:");
                for category in extra {
                    println!("  {}", category);
                }
            }
        }

        TransactionCommands::History { limit } => {
            let entries = storage.audit().recent(limit)?;
            if entries.is_empty() {
                println!("No history yet.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
    }

    Ok(())
}

fn parse_id(raw: &str) -> LedgerResult<TransactionId> {
    raw.parse()
        .map_err(|_| LedgerError::Validation(format!("Invalid transaction id: '{}'", raw)))
}

/// Ask a yes/no question on stdin; anything but y/yes declines
fn prompt_confirm(prompt: &str) -> bool {
    print!("{} [y/N]: ", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}
