//! Transaction service
//!
//! Creating and settling transactions, and the filtered views and totals
//! built on top of the data store.

use crate::error::{PocketError, PocketResult};
use crate::models::{AccountId, CardId, CategoryId, Money, Transaction, TransactionType};
use crate::stores::DataStore;

use super::balance::{calculate_totals, Totals};
use super::filter::TransactionFilter;

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub account_id: AccountId,
    pub category_id: CategoryId,
    pub card_id: Option<CardId>,
    pub kind: TransactionType,
    /// Amount as typed, e.g. "12.50"
    pub money: String,
    /// ISO date
    pub date: String,
    pub received: bool,
    pub description: Option<String>,
    pub note: Option<String>,
    pub recurring: bool,
}

/// Service for transaction management
pub struct TransactionService<'a> {
    data: &'a DataStore,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(data: &'a DataStore) -> Self {
        Self { data }
    }

    /// Create a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> PocketResult<Transaction> {
        let amount = Money::parse_amount(&input.money)
            .map_err(|e| PocketError::Validation(e.to_string()))?;

        let mut txn = Transaction::new(
            input.account_id,
            input.category_id,
            input.kind,
            // Normalize "12,5" to "12.50" so stored amounts read the same way
            format!("{}.{:02}", amount.units(), amount.cents_part()),
            input.date.trim(),
        );
        txn.card_id = input.card_id;
        txn.received = input.received;
        txn.recurring = input.recurring;
        if let Some(description) = input.description {
            txn.description = description.trim().to_string();
        }
        if let Some(note) = input.note {
            txn.note = note.trim().to_string();
        }

        self.data.add_transaction(txn)
    }

    /// Transactions matching a filter, newest first
    pub fn list(&self, filter: &TransactionFilter) -> PocketResult<Vec<Transaction>> {
        Ok(filter.apply(&self.data.transactions()?))
    }

    /// Income and expense totals for the transactions matching a filter
    pub fn totals(&self, filter: &TransactionFilter) -> PocketResult<Totals> {
        Ok(calculate_totals(&self.list(filter)?))
    }

    /// Mark a transaction as received, by full or short id
    pub fn settle(&self, identifier: &str) -> PocketResult<Transaction> {
        let txn = self
            .data
            .find_transaction(identifier)?
            .ok_or_else(|| PocketError::transaction_not_found(identifier))?;

        self.data.set_settled(txn.id, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, Category, CategoryType};
    use crate::services::filter::TypeFilter;
    use chrono::NaiveDate;

    fn setup() -> (DataStore, Account, Category, Category) {
        let data = DataStore::new();
        let account = data.add_account(Account::new("Main")).unwrap();
        let salary = data
            .add_category(Category::new("Salary", CategoryType::Income))
            .unwrap();
        let food = data
            .add_category(Category::new("Food", CategoryType::Expenses))
            .unwrap();
        (data, account, salary, food)
    }

    fn input(account: &Account, category: &Category, kind: TransactionType, money: &str, date: &str) -> CreateTransactionInput {
        CreateTransactionInput {
            account_id: account.id,
            category_id: category.id,
            card_id: None,
            kind,
            money: money.to_string(),
            date: date.to_string(),
            received: true,
            description: Some("  lunch ".into()),
            note: None,
            recurring: false,
        }
    }

    #[test]
    fn test_create_normalizes_amount() {
        let (data, account, _, food) = setup();
        let service = TransactionService::new(&data);
        let txn = service
            .create(input(&account, &food, TransactionType::Expense, "12,5", "2024-06-01"))
            .unwrap();

        assert_eq!(txn.money, "12.50");
        assert_eq!(txn.description, "lunch");
        assert!(service
            .create(input(&account, &food, TransactionType::Expense, "-3", "2024-06-01"))
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_totals_for_month_and_type() {
        let (data, account, salary, food) = setup();
        let service = TransactionService::new(&data);
        service
            .create(input(&account, &salary, TransactionType::Income, "1000", "2024-06-05"))
            .unwrap();
        service
            .create(input(&account, &food, TransactionType::Expense, "200", "2024-06-07"))
            .unwrap();
        service
            .create(input(&account, &food, TransactionType::Expense, "50", "2024-05-07"))
            .unwrap();

        let june = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let totals = service
            .totals(&TransactionFilter::new().month(june))
            .unwrap();
        assert_eq!(totals.income, Money::from_cents(100000));
        assert_eq!(totals.expense, Money::from_cents(20000));

        let incomes = service
            .list(&TransactionFilter::new().month(june).kind(TypeFilter::Only(TransactionType::Income)))
            .unwrap();
        assert_eq!(incomes.len(), 1);
    }

    #[test]
    fn test_settle_by_short_id() {
        let (data, account, salary, _) = setup();
        let service = TransactionService::new(&data);
        let mut pending = input(&account, &salary, TransactionType::Income, "500", "2024-06-05");
        pending.received = false;
        let txn = service.create(pending).unwrap();

        let settled = service.settle(&txn.id.to_string()).unwrap();
        assert!(settled.received);
        assert!(service.settle("txn-00000000").unwrap_err().is_not_found());
    }
}
