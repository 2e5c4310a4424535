//! Transaction CLI commands
//!
//! Adding, listing and settling transactions, plus the monthly totals view.

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::transaction::{format_totals, format_transaction_table};
use crate::display::MoneyFormat;
use crate::error::{PocketError, PocketResult};
use crate::models::{Category, CategoryType, TransactionType};
use crate::services::{
    AccountService, CreateTransactionInput, MonthService, TransactionFilter, TransactionService,
    TypeFilter,
};
use crate::stores::{DataStore, Preferences};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Account name or ID
        account: String,
        /// Amount, always positive (e.g., "12.50")
        amount: String,
        /// Transaction type (income, expense, card_spending)
        #[arg(short = 't', long = "type")]
        kind: String,
        /// Category name; defaults to the first category of the matching type
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Mark the transaction as already received
        #[arg(short, long)]
        received: bool,
        /// Free-text description
        #[arg(long)]
        description: Option<String>,
        /// Repeat every month
        #[arg(long)]
        recurring: bool,
    },
    /// List transactions
    List {
        /// Only this month (YYYY-MM, or "current")
        #[arg(short, long)]
        month: Option<String>,
        /// Type filter (all, income, expense, card_spending)
        #[arg(short = 't', long = "type", default_value = "all")]
        kind: String,
        /// Only this account
        #[arg(short, long)]
        account: Option<String>,
    },
    /// Mark a transaction as received
    Settle {
        /// Transaction ID (full or short form)
        id: String,
    },
}

impl TransactionCommands {
    /// Whether the command changes the ledger
    pub fn modifies_data(&self) -> bool {
        matches!(self, Self::Add { .. } | Self::Settle { .. })
    }
}

/// Handle a transaction command
pub fn handle_transaction_command(
    data: &DataStore,
    settings: &Settings,
    prefs: &Preferences,
    cmd: TransactionCommands,
) -> PocketResult<()> {
    let service = TransactionService::new(data);
    let money = MoneyFormat::new(&settings.currency_symbol, prefs.hide_values);

    match cmd {
        TransactionCommands::Add {
            account,
            amount,
            kind,
            category,
            date,
            received,
            description,
            recurring,
        } => {
            let kind = parse_type(&kind)?;
            let account = AccountService::new(data).require(&account)?;
            let category = resolve_category(data, category.as_deref(), kind)?;
            let date =
                date.unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string());

            let txn = service.create(CreateTransactionInput {
                account_id: account.id,
                category_id: category.id,
                card_id: None,
                kind,
                money: amount,
                date,
                received,
                description,
                note: None,
                recurring,
            })?;

            println!("Created transaction: {}", txn.id);
            println!("  Account:  {}", account.name);
            println!("  Category: {}", category.name);
            println!("  Type:     {}", txn.kind);
            println!("  Date:     {}", txn.date);
            println!(
                "  Status:   {}",
                if txn.is_settled() { "received" } else { "pending" }
            );
        }

        TransactionCommands::List {
            month,
            kind,
            account,
        } => {
            let mut filter = TransactionFilter::new().kind(kind.parse::<TypeFilter>()?);
            if let Some(month) = month {
                filter = filter.month(MonthService::new(settings).parse_month(&month)?);
            }
            if let Some(account) = account {
                filter = filter.account(AccountService::new(data).require(&account)?.id);
            }

            let transactions = service.list(&filter)?;
            print!(
                "{}",
                format_transaction_table(
                    &transactions,
                    &data.accounts()?,
                    &data.categories()?,
                    &money,
                    &settings.date_format,
                )
            );
        }

        TransactionCommands::Settle { id } => {
            let txn = service.settle(&id)?;
            println!("Settled transaction: {}", txn.id);
        }
    }

    Ok(())
}

/// Print income, expense and net totals for an optional month and type
pub fn handle_totals(
    data: &DataStore,
    settings: &Settings,
    prefs: &Preferences,
    month: Option<&str>,
    kind: &str,
) -> PocketResult<()> {
    let mut filter = TransactionFilter::new().kind(kind.parse::<TypeFilter>()?);
    if let Some(month) = month {
        filter = filter.month(MonthService::new(settings).parse_month(month)?);
    }

    let totals = TransactionService::new(data).totals(&filter)?;
    let money = MoneyFormat::new(&settings.currency_symbol, prefs.hide_values);
    print!("{}", format_totals(&totals, &money));

    Ok(())
}

fn parse_type(s: &str) -> PocketResult<TransactionType> {
    TransactionType::parse(s).ok_or_else(|| {
        PocketError::Validation(format!(
            "Invalid transaction type: '{}'. Valid types: income, expense, card_spending",
            s
        ))
    })
}

fn resolve_category(
    data: &DataStore,
    name: Option<&str>,
    kind: TransactionType,
) -> PocketResult<Category> {
    if let Some(name) = name {
        return data
            .category_by_name(name)?
            .ok_or_else(|| PocketError::category_not_found(name));
    }

    data.categories()?
        .into_iter()
        .find(|c| c.category_type.matches(kind))
        .ok_or_else(|| {
            let wanted = if kind.is_inflow() {
                CategoryType::Income
            } else {
                CategoryType::Expenses
            };
            PocketError::Validation(format!(
                "No {} category exists. Create one with 'pocketbook category add <name> --type {}'",
                wanted,
                wanted.to_string().to_lowercase()
            ))
        })
}
