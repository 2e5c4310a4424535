//! Pocketbook - personal finance ledger
//!
//! This library provides the core of the Pocketbook application: accounts,
//! cards, categories and transactions, the monthly filters and balance
//! aggregation built over them, and the client state stores that persist
//! the signed-in user and UI preferences.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, transactions, categories, etc.)
//! - `storage`: Key-value and JSON file persistence
//! - `stores`: Auth, preference and ledger state containers
//! - `services`: Filters, balances, month ranges and business logic
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `pocketbook` binary
//!
//! # Example
//!
//! ```rust
//! use pocketbook::models::{Account, Category, CategoryType, Money, Transaction, TransactionType};
//! use pocketbook::services::calculate_totals;
//!
//! let account = Account::new("Wallet");
//! let salary = Category::new("Salary", CategoryType::Income);
//! let mut txn = Transaction::new(account.id, salary.id, TransactionType::Income, "1000", "2024-06-05");
//! txn.settle();
//!
//! let totals = calculate_totals(&[txn]);
//! assert_eq!(totals.income, Money::from_cents(100000));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod stores;

pub use error::PocketError;
