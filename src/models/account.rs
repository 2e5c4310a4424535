//! Account model
//!
//! A bank account owned by a user, together with the small reference
//! entities that classify it (bank and account kind).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, AccountKindId, BankTypeId, UserId};
use super::money::Money;

/// A bank an account can be held at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankType {
    pub id: BankTypeId,
    pub name: String,
}

impl BankType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BankTypeId::new(),
            name: name.into(),
        }
    }
}

/// Kind of account (checking, savings, wallet, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountKind {
    pub id: AccountKindId,
    pub name: String,
}

impl AccountKind {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: AccountKindId::new(),
            name: name.into(),
        }
    }
}

/// A financial account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Display name (e.g., "Main Checking")
    pub name: String,

    /// Balance when the account was registered; may be negative
    pub starting_balance: Money,

    /// Owner of the account
    pub user_id: Option<UserId>,

    #[serde(default)]
    pub bank_type_id: Option<BankTypeId>,

    #[serde(default)]
    pub account_kind_id: Option<AccountKindId>,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last modified
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with a zero starting balance
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            name: name.into(),
            starting_balance: Money::zero(),
            user_id: None,
            bank_type_id: None,
            account_kind_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new account with a starting balance
    pub fn with_starting_balance(name: impl Into<String>, starting_balance: Money) -> Self {
        let mut account = Self::new(name);
        account.starting_balance = starting_balance;
        account
    }

    /// Rename the account
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        let len = self.name.chars().count();
        if len > 100 {
            return Err(AccountValidationError::NameTooLong(len));
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Account name too long ({} chars, max 100)", len)
            }
        }
    }
}

impl std::error::Error for AccountValidationError {}
