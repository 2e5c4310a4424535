//! Account CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::account::{format_account_details, format_account_list};
use crate::display::MoneyFormat;
use crate::error::{PocketError, PocketResult};
use crate::models::Money;
use crate::services::balance::balance_report;
use crate::services::AccountService;
use crate::stores::{AuthStore, DataStore, Preferences};

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a new account
    #[command(alias = "create")]
    Add {
        /// Account name
        name: String,
        /// Starting balance (e.g., "1000.00" or "-250")
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        balance: String,
    },
    /// List all accounts with balances
    List,
    /// Show account details
    Show {
        /// Account name or ID
        account: String,
    },
}

impl AccountCommands {
    /// Whether the command changes the ledger
    pub fn modifies_data(&self) -> bool {
        matches!(self, Self::Add { .. })
    }
}

/// Handle an account command
pub fn handle_account_command(
    data: &DataStore,
    auth: &AuthStore,
    settings: &Settings,
    prefs: &Preferences,
    cmd: AccountCommands,
) -> PocketResult<()> {
    let service = AccountService::new(data);
    let money = MoneyFormat::new(&settings.currency_symbol, prefs.hide_values);

    match cmd {
        AccountCommands::Add { name, balance } => {
            let starting_balance = Money::parse(&balance).map_err(|e| {
                PocketError::Validation(format!(
                    "Invalid balance format: '{}'. Use format like '1000.00' or '1000'. Error: {}",
                    balance, e
                ))
            })?;

            let owner = auth.user().map(|u| u.id);
            let account = service.create(&name, starting_balance, owner)?;

            println!("Created account: {}", account.name);
            println!("  Starting Balance: {}", money.format(account.starting_balance));
            println!("  ID: {}", account.id);
        }

        AccountCommands::List => {
            let summaries = service.list_with_balances()?;
            print!("{}", format_account_list(&summaries, &money));
        }

        AccountCommands::Show { account } => {
            let found = service.require(&account)?;
            let summary = balance_report(&found, &data.transactions()?);
            print!("{}", format_account_details(&summary, &money));
        }
    }

    Ok(())
}
