//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the stores and services.

pub mod account;
pub mod auth;
pub mod category;
pub mod months;
pub mod prefs;
pub mod transaction;

pub use account::{handle_account_command, AccountCommands};
pub use auth::{handle_login, handle_logout, handle_whoami};
pub use category::{handle_category_command, CategoryCommands};
pub use months::handle_months;
pub use prefs::{handle_prefs_command, PrefsCommands};
pub use transaction::{handle_totals, handle_transaction_command, TransactionCommands};
