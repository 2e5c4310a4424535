//! Transaction filters
//!
//! Pure selection functions over transaction snapshots. None of them
//! mutate their input or fail; output keeps the input order.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::error::PocketError;
use crate::models::{AccountId, Transaction, TransactionType};

/// Type selector: every transaction, or only one type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(TransactionType),
}

impl TypeFilter {
    /// Check whether a transaction passes this selector
    pub fn accepts(&self, txn: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Only(kind) => txn.kind == *kind,
        }
    }
}

impl From<TransactionType> for TypeFilter {
    fn from(kind: TransactionType) -> Self {
        Self::Only(kind)
    }
}

impl FromStr for TypeFilter {
    type Err = PocketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        TransactionType::parse(s).map(Self::Only).ok_or_else(|| {
            PocketError::Validation(format!(
                "Invalid transaction type: '{}'. Valid types: all, income, expense, card_spending",
                s
            ))
        })
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(kind) => write!(f, "{}", kind.as_str()),
        }
    }
}

/// Keep transactions dated in the same calendar month and year as `month`
///
/// `None` returns the input unchanged. Transactions whose date cannot be
/// parsed are excluded whenever a month is given.
pub fn filter_by_month(transactions: &[Transaction], month: Option<NaiveDate>) -> Vec<Transaction> {
    let Some(month) = month else {
        return transactions.to_vec();
    };

    transactions
        .iter()
        .filter(|t| match t.parsed_date() {
            Some(date) => date.year() == month.year() && date.month() == month.month(),
            None => {
                tracing::debug!(id = %t.id, date = %t.date, "excluding transaction with unparsable date");
                false
            }
        })
        .cloned()
        .collect()
}

/// Keep transactions matching the type selector
pub fn filter_by_type(transactions: &[Transaction], filter: TypeFilter) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| filter.accepts(t))
        .cloned()
        .collect()
}

/// Month filter followed by type filter
pub fn filter_transactions(
    transactions: &[Transaction],
    month: Option<NaiveDate>,
    filter: TypeFilter,
) -> Vec<Transaction> {
    filter_by_type(&filter_by_month(transactions, month), filter)
}

/// Keep transactions belonging to one account
pub fn filter_by_account(transactions: &[Transaction], account_id: AccountId) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.account_id == account_id)
        .cloned()
        .collect()
}

/// Combined filter options, built up fluently
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Calendar month to keep (any day inside it)
    pub month: Option<NaiveDate>,
    /// Transaction type selector
    pub kind: TypeFilter,
    /// Restrict to one account
    pub account_id: Option<AccountId>,
    /// Keep only settled transactions
    pub settled_only: bool,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    pub fn month(mut self, month: NaiveDate) -> Self {
        self.month = Some(month);
        self
    }

    pub fn kind(mut self, kind: TypeFilter) -> Self {
        self.kind = kind;
        self
    }

    pub fn account(mut self, account_id: AccountId) -> Self {
        self.account_id = Some(account_id);
        self
    }

    pub fn settled_only(mut self) -> Self {
        self.settled_only = true;
        self
    }

    /// Apply every configured filter
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        let mut result = filter_transactions(transactions, self.month, self.kind);
        if let Some(account_id) = self.account_id {
            result.retain(|t| t.account_id == account_id);
        }
        if self.settled_only {
            result.retain(Transaction::is_settled);
        }
        result
    }
}
