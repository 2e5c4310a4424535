//! Transaction model
//!
//! A transaction records money moving in or out of an account. The amount
//! is kept as the decimal string the user typed and is always a
//! non-negative magnitude; the direction comes from [`TransactionType`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, CardId, CategoryId, TransactionId};
use super::money::{Money, MoneyParseError};

/// Kind of a transaction, which also decides its sign in balance math
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Money received into the account
    Income,
    /// Money paid out of the account
    Expense,
    /// Purchase made with a card tied to the account
    CardSpending,
}

impl TransactionType {
    /// All transaction types in display order
    pub fn all() -> &'static [Self] {
        &[Self::Income, Self::Expense, Self::CardSpending]
    }

    /// Returns true if this type adds to the account balance
    pub fn is_inflow(&self) -> bool {
        matches!(self, Self::Income)
    }

    /// The tag used in storage and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::CardSpending => "card_spending",
        }
    }

    /// Parse a transaction type from its tag
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            "card_spending" | "card" => Some(Self::CardSpending),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
            Self::CardSpending => write!(f, "Card Spending"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// The account this transaction belongs to
    pub account_id: AccountId,

    /// Category the transaction is filed under
    pub category_id: CategoryId,

    /// Card used, for card spending
    #[serde(default)]
    pub card_id: Option<CardId>,

    /// Amount as a decimal string, e.g. "1000" or "12.50"
    pub money: String,

    /// Whether the transaction has been received/settled
    #[serde(default)]
    pub received: bool,

    /// ISO date string, e.g. "2024-06-15" or an RFC 3339 timestamp
    pub date: String,

    /// Income, expense or card spending
    #[serde(rename = "type")]
    pub kind: TransactionType,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub note: String,

    /// Whether the transaction recurs every month
    #[serde(default)]
    pub recurring: bool,

    /// Whether the transaction is repeated a fixed number of times
    #[serde(default)]
    pub repeat: bool,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,

    /// When the transaction was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new, unsettled transaction
    pub fn new(
        account_id: AccountId,
        category_id: CategoryId,
        kind: TransactionType,
        money: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            account_id,
            category_id,
            card_id: None,
            money: money.into(),
            received: false,
            date: date.into(),
            kind,
            description: String::new(),
            note: String::new(),
            recurring: false,
            repeat: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Parse the stored amount as a non-negative magnitude
    pub fn amount(&self) -> Result<Money, MoneyParseError> {
        Money::parse_amount(&self.money)
    }

    /// The amount with its balance sign applied: positive for income,
    /// negative for expenses and card spending
    pub fn signed_amount(&self) -> Result<Money, MoneyParseError> {
        let amount = self.amount()?;
        Ok(if self.kind.is_inflow() { amount } else { -amount })
    }

    /// Parse the stored date
    ///
    /// Accepts plain dates (`2024-06-15`), RFC 3339 timestamps and naive
    /// timestamps. Returns `None` for anything else.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.date)
    }

    /// Check whether the transaction counts toward balances and totals
    pub fn is_settled(&self) -> bool {
        self.received
    }

    /// Mark as received
    pub fn settle(&mut self) {
        self.received = true;
        self.updated_at = Utc::now();
    }

    /// Mark as not yet received
    pub fn unsettle(&mut self) {
        self.received = false;
        self.updated_at = Utc::now();
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        self.amount()
            .map_err(TransactionValidationError::InvalidAmount)?;

        if self.parsed_date().is_none() {
            return Err(TransactionValidationError::InvalidDate(self.date.clone()));
        }

        let len = self.description.chars().count();
        if len > 200 {
            return Err(TransactionValidationError::DescriptionTooLong(len));
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.date, self.kind, self.description, self.money)
    }
}

/// Parse an ISO date or timestamp into its calendar date
pub(crate) fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    InvalidAmount(MoneyParseError),
    InvalidDate(String),
    DescriptionTooLong(usize),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAmount(e) => write!(f, "{}", e),
            Self::InvalidDate(s) => write!(f, "Invalid transaction date: '{}'", s),
            Self::DescriptionTooLong(len) => {
                write!(f, "Description too long ({} chars, max 200)", len)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(kind: TransactionType, money: &str, date: &str) -> Transaction {
        Transaction::new(AccountId::new(), CategoryId::new(), kind, money, date)
    }

    #[test]
    fn test_new_transaction_is_unsettled() {
        let t = txn(TransactionType::Income, "1000", "2024-06-15");
        assert!(!t.is_settled());
        assert!(t.card_id.is_none());
        assert_eq!(t.amount().unwrap(), Money::from_cents(100000));
    }

    #[test]
    fn test_signed_amount() {
        let income = txn(TransactionType::Income, "10.50", "2024-06-15");
        let expense = txn(TransactionType::Expense, "10.50", "2024-06-15");
        let card = txn(TransactionType::CardSpending, "3", "2024-06-15");

        assert_eq!(income.signed_amount().unwrap().cents(), 1050);
        assert_eq!(expense.signed_amount().unwrap().cents(), -1050);
        assert_eq!(card.signed_amount().unwrap().cents(), -300);
    }

    #[test]
    fn test_parsed_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 15);
        assert_eq!(txn(TransactionType::Income, "1", "2024-06-15").parsed_date(), expected);
        assert_eq!(
            txn(TransactionType::Income, "1", "2024-06-15T10:30:00.000Z").parsed_date(),
            expected
        );
        assert_eq!(
            txn(TransactionType::Income, "1", "2024-06-15T10:30:00").parsed_date(),
            expected
        );
        assert_eq!(txn(TransactionType::Income, "1", "15/06/2024").parsed_date(), None);
        assert_eq!(txn(TransactionType::Income, "1", "").parsed_date(), None);
    }

    #[test]
    fn test_settle_and_unsettle() {
        let mut t = txn(TransactionType::Expense, "5", "2024-06-15");
        t.settle();
        assert!(t.is_settled());
        t.unsettle();
        assert!(!t.is_settled());
    }

    #[test]
    fn test_validation() {
        assert!(txn(TransactionType::Expense, "5", "2024-06-15").validate().is_ok());

        assert!(matches!(
            txn(TransactionType::Expense, "-5", "2024-06-15").validate(),
            Err(TransactionValidationError::InvalidAmount(_))
        ));
        assert!(matches!(
            txn(TransactionType::Expense, "5", "yesterday").validate(),
            Err(TransactionValidationError::InvalidDate(_))
        ));

        let mut long = txn(TransactionType::Expense, "5", "2024-06-15");
        long.description = "x".repeat(201);
        assert_eq!(
            long.validate(),
            Err(TransactionValidationError::DescriptionTooLong(201))
        );
    }

    #[test]
    fn test_type_tags() {
        assert_eq!(TransactionType::parse("income"), Some(TransactionType::Income));
        assert_eq!(TransactionType::parse("EXPENSE"), Some(TransactionType::Expense));
        assert_eq!(
            TransactionType::parse("card-spending"),
            Some(TransactionType::CardSpending)
        );
        assert_eq!(TransactionType::parse("transfer"), None);

        let json = serde_json::to_string(&TransactionType::CardSpending).unwrap();
        assert_eq!(json, "\"card_spending\"");
    }

    #[test]
    fn test_serialization_uses_type_field() {
        let t = txn(TransactionType::Income, "1000", "2024-06-15");
        let value = serde_json::to_value(&t).unwrap();
        assert_eq!(value["type"], "income");
        assert_eq!(value["money"], "1000");

        let back: Transaction = serde_json::from_value(value).unwrap();
        assert_eq!(back, t);
    }
}
