//! Service layer for Pocketbook
//!
//! The pure ledger computations (filters, balance aggregation, month
//! ranges) plus thin services that apply them to the data store.

pub mod account;
pub mod auth;
pub mod balance;
pub mod filter;
pub mod months;
pub mod transaction;

pub use account::AccountService;
pub use auth::MockAuthenticator;
pub use balance::{account_balance, balance_report, calculate_totals, AccountBalance, Totals};
pub use filter::{
    filter_by_account, filter_by_month, filter_by_type, filter_transactions, TransactionFilter,
    TypeFilter,
};
pub use months::{current_month_window, generate_months, month_index, month_window, MonthService};
pub use transaction::{CreateTransactionInput, TransactionService};
