//! Account service
//!
//! Account creation and lookup, and balances computed from the data store.

use crate::error::{PocketError, PocketResult};
use crate::models::{Account, AccountId, Money, UserId};
use crate::stores::DataStore;

use super::balance::{account_balance, balance_report, AccountBalance};

/// Service for account management
pub struct AccountService<'a> {
    data: &'a DataStore,
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(data: &'a DataStore) -> Self {
        Self { data }
    }

    /// Create a new account
    pub fn create(
        &self,
        name: &str,
        starting_balance: Money,
        owner: Option<UserId>,
    ) -> PocketResult<Account> {
        let mut account = Account::with_starting_balance(name.trim(), starting_balance);
        account.user_id = owner;
        self.data.add_account(account)
    }

    /// Find an account by name or ID string
    pub fn find(&self, identifier: &str) -> PocketResult<Option<Account>> {
        if let Some(account) = self.data.account_by_name(identifier)? {
            return Ok(Some(account));
        }

        Ok(self
            .data
            .accounts()?
            .into_iter()
            .find(|a| a.id.matches(identifier)))
    }

    /// Find an account or fail with a not-found error
    pub fn require(&self, identifier: &str) -> PocketResult<Account> {
        self.find(identifier)?
            .ok_or_else(|| PocketError::account_not_found(identifier))
    }

    /// Current balance of one account
    pub fn balance(&self, account_id: AccountId) -> PocketResult<Money> {
        let account = self
            .data
            .account(account_id)?
            .ok_or_else(|| PocketError::account_not_found(account_id.to_string()))?;

        Ok(account_balance(&account, &self.data.transactions()?))
    }

    /// Every account with its balance details
    pub fn list_with_balances(&self) -> PocketResult<Vec<AccountBalance>> {
        let transactions = self.data.transactions()?;
        Ok(self
            .data
            .accounts()?
            .iter()
            .map(|account| balance_report(account, &transactions))
            .collect())
    }

    /// Sum of every account balance
    pub fn total_balance(&self) -> PocketResult<Money> {
        Ok(self
            .list_with_balances()?
            .iter()
            .map(|summary| summary.balance)
            .sum())
    }
}
