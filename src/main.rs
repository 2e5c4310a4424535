use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pocketbook::cli::{
    handle_account_command, handle_category_command, handle_login, handle_logout, handle_months,
    handle_prefs_command, handle_totals, handle_transaction_command, handle_whoami,
};
use pocketbook::config::{PocketPaths, Settings};
use pocketbook::storage::JsonFileStore;
use pocketbook::stores::{AuthStore, DataStore, PreferencesStore};

/// Environment variable holding the log filter
const LOG_ENV: &str = "POCKETBOOK_LOG";

#[derive(Parser)]
#[command(
    name = "pocketbook",
    version,
    about = "Personal finance ledger for the terminal",
    long_about = "Pocketbook tracks accounts, categories and transactions, \
                  and shows monthly income and expense totals from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in locally
    Login {
        email: String,
        password: String,
    },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Preference commands
    #[command(subcommand)]
    Prefs(pocketbook::cli::PrefsCommands),

    /// Account management commands
    #[command(subcommand)]
    Account(pocketbook::cli::AccountCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(pocketbook::cli::CategoryCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(pocketbook::cli::TransactionCommands),

    /// Income, expense and net totals
    Totals {
        /// Only this month (YYYY-MM, or "current")
        #[arg(short, long)]
        month: Option<String>,
        /// Type filter (all, income, expense, card_spending)
        #[arg(short = 't', long = "type", default_value = "all")]
        kind: String,
    },

    /// List the months around the current one
    Months {
        /// Months before the current one
        #[arg(short, long)]
        back: Option<u32>,
        /// Months after the current one
        #[arg(short, long)]
        forward: Option<u32>,
    },

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = PocketPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    // Client state
    let kv = JsonFileStore::new(paths.kv_file());
    let mut auth = AuthStore::new(&kv);
    auth.hydrate()?;
    let mut prefs = PreferencesStore::new(&kv);
    prefs.hydrate()?;
    let data = DataStore::load(paths.data_file())?;

    tracing::debug!(base_dir = %paths.base_dir().display(), "state loaded");

    match cli.command {
        Some(Commands::Login { email, password }) => {
            handle_login(&mut auth, &email, &password)?;
        }
        Some(Commands::Logout) => {
            handle_logout(&mut auth)?;
        }
        Some(Commands::Whoami) => handle_whoami(&auth),
        Some(Commands::Prefs(cmd)) => {
            handle_prefs_command(&mut prefs, cmd)?;
        }
        Some(Commands::Account(cmd)) => {
            let save = cmd.modifies_data();
            handle_account_command(&data, &auth, &settings, &prefs.preferences(), cmd)?;
            if save {
                data.save(paths.data_file())?;
            }
        }
        Some(Commands::Category(cmd)) => {
            let save = cmd.modifies_data();
            handle_category_command(&data, cmd)?;
            if save {
                data.save(paths.data_file())?;
            }
        }
        Some(Commands::Transaction(cmd)) => {
            let save = cmd.modifies_data();
            handle_transaction_command(&data, &settings, &prefs.preferences(), cmd)?;
            if save {
                data.save(paths.data_file())?;
            }
        }
        Some(Commands::Totals { month, kind }) => {
            handle_totals(&data, &settings, &prefs.preferences(), month.as_deref(), &kind)?;
        }
        Some(Commands::Months { back, forward }) => {
            handle_months(&settings, prefs.language(), back, forward)?;
        }
        Some(Commands::Config) => {
            println!("Pocketbook Configuration");
            println!("========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Ledger file:     {}", paths.data_file().display());
            println!("State file:      {}", paths.kv_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!(
                "  Month window:    {} back, {} forward",
                settings.month_window_back, settings.month_window_forward
            );
        }
        None => {
            println!("Pocketbook - personal finance ledger");
            println!();
            println!("Run 'pocketbook --help' for usage information.");
        }
    }

    Ok(())
}
