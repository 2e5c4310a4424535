//! Core data models for Pocketbook
//!
//! This module contains the data structures of the personal finance domain:
//! accounts, cards, categories, transactions and the month descriptors used
//! to browse them.

pub mod account;
pub mod card;
pub mod category;
pub mod ids;
pub mod locale;
pub mod money;
pub mod month;
pub mod transaction;
pub mod user;

pub use account::{Account, AccountKind, BankType};
pub use card::{Card, CardType};
pub use category::{Category, CategoryType};
pub use ids::{
    AccountId, AccountKindId, BankTypeId, CardId, CardTypeId, CategoryId, TransactionId, UserId,
};
pub use locale::Language;
pub use money::{Money, MoneyParseError};
pub use month::MonthDescriptor;
pub use transaction::{Transaction, TransactionType};
pub use user::User;
