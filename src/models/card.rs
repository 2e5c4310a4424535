//! Card model
//!
//! Credit or debit cards attached to an account. Card spending transactions
//! reference a card and are charged against the owning account.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, CardId, CardTypeId};
use super::money::Money;

/// Card network or product line (Visa, Mastercard, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardType {
    pub id: CardTypeId,
    pub name: String,
}

impl CardType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CardTypeId::new(),
            name: name.into(),
        }
    }
}

/// A payment card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,

    pub name: String,

    /// The account card spending is charged to
    pub account_id: AccountId,

    #[serde(default)]
    pub card_type_id: Option<CardTypeId>,

    /// Credit limit
    #[serde(default)]
    pub limit: Money,

    /// Day of month the statement closes
    pub closing_day: u32,

    /// Day of month the statement is due
    pub due_day: u32,
}

impl Card {
    /// Create a new card closing on the 1st and due on the 10th
    pub fn new(name: impl Into<String>, account_id: AccountId) -> Self {
        Self {
            id: CardId::new(),
            name: name.into(),
            account_id,
            card_type_id: None,
            limit: Money::zero(),
            closing_day: 1,
            due_day: 10,
        }
    }

    /// Validate the card
    pub fn validate(&self) -> Result<(), CardValidationError> {
        if self.name.trim().is_empty() {
            return Err(CardValidationError::EmptyName);
        }
        if self.limit.is_negative() {
            return Err(CardValidationError::NegativeLimit);
        }
        for day in [self.closing_day, self.due_day] {
            if !(1..=31).contains(&day) {
                return Err(CardValidationError::InvalidDay(day));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardValidationError {
    EmptyName,
    NegativeLimit,
    InvalidDay(u32),
}

impl fmt::Display for CardValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Card name cannot be empty"),
            Self::NegativeLimit => write!(f, "Card limit cannot be negative"),
            Self::InvalidDay(day) => write!(f, "Invalid day of month: {}", day),
        }
    }
}

impl std::error::Error for CardValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_validation() {
        let mut card = Card::new("Gold", AccountId::new());
        assert!(card.validate().is_ok());

        card.due_day = 32;
        assert_eq!(card.validate(), Err(CardValidationError::InvalidDay(32)));

        card.due_day = 10;
        card.limit = Money::from_cents(-1);
        assert_eq!(card.validate(), Err(CardValidationError::NegativeLimit));

        card.name = String::new();
        assert_eq!(card.validate(), Err(CardValidationError::EmptyName));
    }
}
