//! Domain data state
//!
//! Accounts, cards, categories and transactions held in memory for the
//! lifetime of the process. Readers get cloned snapshots; every change goes
//! through a named mutator that validates it first.

use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::error::{PocketError, PocketResult};
use crate::models::{
    Account, AccountId, AccountKind, BankType, Card, CardId, CardType, Category, CategoryId,
    Transaction, TransactionId,
};
use crate::storage::{read_json, write_json_atomic};

/// Serializable copy of every collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSnapshot {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub bank_types: Vec<BankType>,
    #[serde(default)]
    pub account_kinds: Vec<AccountKind>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub card_types: Vec<CardType>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// In-memory domain data
#[derive(Debug, Default)]
pub struct DataStore {
    data: RwLock<DataSnapshot>,
}

impl DataStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given collections
    pub fn from_snapshot(snapshot: DataSnapshot) -> Self {
        Self {
            data: RwLock::new(snapshot),
        }
    }

    /// Load a snapshot file; a missing file gives an empty store
    pub fn load(path: impl AsRef<Path>) -> PocketResult<Self> {
        let snapshot: DataSnapshot = read_json(path.as_ref())?;
        tracing::debug!(
            path = %path.as_ref().display(),
            accounts = snapshot.accounts.len(),
            transactions = snapshot.transactions.len(),
            "loaded ledger"
        );
        Ok(Self::from_snapshot(snapshot))
    }

    /// Write the current collections to a snapshot file
    pub fn save(&self, path: impl AsRef<Path>) -> PocketResult<()> {
        let snapshot = self.snapshot()?;
        write_json_atomic(path, &snapshot)
    }

    /// Clone every collection
    pub fn snapshot(&self) -> PocketResult<DataSnapshot> {
        Ok(self.read()?.clone())
    }

    fn read(&self) -> PocketResult<RwLockReadGuard<'_, DataSnapshot>> {
        self.data
            .read()
            .map_err(|e| PocketError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> PocketResult<RwLockWriteGuard<'_, DataSnapshot>> {
        self.data
            .write()
            .map_err(|e| PocketError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    // Readers

    pub fn accounts(&self) -> PocketResult<Vec<Account>> {
        let mut accounts = self.read()?.accounts.clone();
        accounts.sort_by_key(|a| a.name.to_lowercase());
        Ok(accounts)
    }

    pub fn account(&self, id: AccountId) -> PocketResult<Option<Account>> {
        Ok(self.read()?.accounts.iter().find(|a| a.id == id).cloned())
    }

    /// Find an account by name (case-insensitive)
    pub fn account_by_name(&self, name: &str) -> PocketResult<Option<Account>> {
        let name = name.trim().to_lowercase();
        Ok(self
            .read()?
            .accounts
            .iter()
            .find(|a| a.name.to_lowercase() == name)
            .cloned())
    }

    pub fn bank_types(&self) -> PocketResult<Vec<BankType>> {
        Ok(self.read()?.bank_types.clone())
    }

    pub fn account_kinds(&self) -> PocketResult<Vec<AccountKind>> {
        Ok(self.read()?.account_kinds.clone())
    }

    pub fn categories(&self) -> PocketResult<Vec<Category>> {
        let mut categories = self.read()?.categories.clone();
        categories.sort_by(|a, b| {
            a.category_type
                .to_string()
                .cmp(&b.category_type.to_string())
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        Ok(categories)
    }

    pub fn category(&self, id: CategoryId) -> PocketResult<Option<Category>> {
        Ok(self.read()?.categories.iter().find(|c| c.id == id).cloned())
    }

    /// Find a category by name (case-insensitive)
    pub fn category_by_name(&self, name: &str) -> PocketResult<Option<Category>> {
        let name = name.trim().to_lowercase();
        Ok(self
            .read()?
            .categories
            .iter()
            .find(|c| c.name.to_lowercase() == name)
            .cloned())
    }

    pub fn cards(&self) -> PocketResult<Vec<Card>> {
        Ok(self.read()?.cards.clone())
    }

    pub fn card(&self, id: CardId) -> PocketResult<Option<Card>> {
        Ok(self.read()?.cards.iter().find(|c| c.id == id).cloned())
    }

    pub fn card_types(&self) -> PocketResult<Vec<CardType>> {
        Ok(self.read()?.card_types.clone())
    }

    /// All transactions, newest date first
    pub fn transactions(&self) -> PocketResult<Vec<Transaction>> {
        let mut transactions = self.read()?.transactions.clone();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(transactions)
    }

    pub fn transaction(&self, id: TransactionId) -> PocketResult<Option<Transaction>> {
        Ok(self
            .read()?
            .transactions
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    /// Find a transaction by full id or by its short display form (`txn-1a2b3c4d`)
    pub fn find_transaction(&self, identifier: &str) -> PocketResult<Option<Transaction>> {
        if let Ok(id) = identifier.parse::<TransactionId>() {
            return self.transaction(id);
        }

        let identifier = identifier.trim();
        let data = self.read()?;
        let mut matches = data
            .transactions
            .iter()
            .filter(|t| t.id.matches(identifier));

        match (matches.next(), matches.next()) {
            (Some(t), None) => Ok(Some(t.clone())),
            (None, _) => Ok(None),
            (Some(_), Some(_)) => Err(PocketError::Validation(format!(
                "Ambiguous transaction id '{}', use the full id",
                identifier
            ))),
        }
    }

    // Mutators

    /// Register a new account; names must be unique
    pub fn add_account(&self, account: Account) -> PocketResult<Account> {
        account
            .validate()
            .map_err(|e| PocketError::Validation(e.to_string()))?;

        let mut data = self.write()?;
        let name = account.name.to_lowercase();
        if data.accounts.iter().any(|a| a.name.to_lowercase() == name) {
            return Err(PocketError::Duplicate {
                entity_type: "Account",
                identifier: account.name,
            });
        }

        data.accounts.push(account.clone());
        Ok(account)
    }

    pub fn add_bank_type(&self, bank_type: BankType) -> PocketResult<()> {
        self.write()?.bank_types.push(bank_type);
        Ok(())
    }

    pub fn add_account_kind(&self, kind: AccountKind) -> PocketResult<()> {
        self.write()?.account_kinds.push(kind);
        Ok(())
    }

    pub fn add_card_type(&self, card_type: CardType) -> PocketResult<()> {
        self.write()?.card_types.push(card_type);
        Ok(())
    }

    /// Register a new category; names must be unique
    pub fn add_category(&self, category: Category) -> PocketResult<Category> {
        category
            .validate()
            .map_err(|e| PocketError::Validation(e.to_string()))?;

        let mut data = self.write()?;
        let name = category.name.to_lowercase();
        if data.categories.iter().any(|c| c.name.to_lowercase() == name) {
            return Err(PocketError::Duplicate {
                entity_type: "Category",
                identifier: category.name,
            });
        }

        data.categories.push(category.clone());
        Ok(category)
    }

    /// Register a new card against an existing account
    pub fn add_card(&self, card: Card) -> PocketResult<Card> {
        card.validate()
            .map_err(|e| PocketError::Validation(e.to_string()))?;

        let mut data = self.write()?;
        if !data.accounts.iter().any(|a| a.id == card.account_id) {
            return Err(PocketError::account_not_found(card.account_id.to_string()));
        }

        data.cards.push(card.clone());
        Ok(card)
    }

    /// Record a new transaction
    pub fn add_transaction(&self, txn: Transaction) -> PocketResult<Transaction> {
        let mut data = self.write()?;
        check_transaction(&data, &txn)?;

        if data.transactions.iter().any(|t| t.id == txn.id) {
            return Err(PocketError::Duplicate {
                entity_type: "Transaction",
                identifier: txn.id.to_string(),
            });
        }

        tracing::debug!(id = %txn.id, kind = txn.kind.as_str(), "added transaction");
        data.transactions.push(txn.clone());
        Ok(txn)
    }

    /// Replace an existing transaction
    pub fn update_transaction(&self, txn: Transaction) -> PocketResult<Transaction> {
        let mut data = self.write()?;
        check_transaction(&data, &txn)?;

        let slot = data
            .transactions
            .iter_mut()
            .find(|t| t.id == txn.id)
            .ok_or_else(|| PocketError::transaction_not_found(txn.id.to_string()))?;

        *slot = txn.clone();
        Ok(txn)
    }

    /// Delete a transaction, returning it
    pub fn remove_transaction(&self, id: TransactionId) -> PocketResult<Transaction> {
        let mut data = self.write()?;
        let index = data
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| PocketError::transaction_not_found(id.to_string()))?;

        Ok(data.transactions.remove(index))
    }

    /// Mark a transaction as received or not
    pub fn set_settled(&self, id: TransactionId, settled: bool) -> PocketResult<Transaction> {
        let mut data = self.write()?;
        let txn = data
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| PocketError::transaction_not_found(id.to_string()))?;

        if settled {
            txn.settle();
        } else {
            txn.unsettle();
        }
        Ok(txn.clone())
    }
}

/// Validate a transaction and the entities it references
fn check_transaction(data: &DataSnapshot, txn: &Transaction) -> PocketResult<()> {
    txn.validate()
        .map_err(|e| PocketError::Validation(e.to_string()))?;

    if !data.accounts.iter().any(|a| a.id == txn.account_id) {
        return Err(PocketError::account_not_found(txn.account_id.to_string()));
    }

    let category = data
        .categories
        .iter()
        .find(|c| c.id == txn.category_id)
        .ok_or_else(|| PocketError::category_not_found(txn.category_id.to_string()))?;

    if !category.category_type.matches(txn.kind) {
        return Err(PocketError::Validation(format!(
            "Category '{}' ({}) cannot hold {} transactions",
            category.name,
            category.category_type,
            txn.kind.as_str()
        )));
    }

    if let Some(card_id) = txn.card_id {
        let card = data
            .cards
            .iter()
            .find(|c| c.id == card_id)
            .ok_or_else(|| PocketError::card_not_found(card_id.to_string()))?;

        if card.account_id != txn.account_id {
            return Err(PocketError::Validation(format!(
                "Card '{}' belongs to a different account",
                card.name
            )));
        }
    }

    Ok(())
}
