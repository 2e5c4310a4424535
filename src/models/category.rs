//! Category model
//!
//! Categories classify transactions as either income or expenses and carry
//! the color and icon the app shows next to them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::transaction::TransactionType;

/// Whether a category collects income or expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    Income,
    Expenses,
}

impl CategoryType {
    /// Check whether a transaction of the given type may be filed here
    pub fn matches(&self, kind: TransactionType) -> bool {
        match self {
            Self::Income => kind == TransactionType::Income,
            Self::Expenses => kind != TransactionType::Income,
        }
    }

    /// Parse a category type from its tag
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "incomes" => Some(Self::Income),
            "expense" | "expenses" => Some(Self::Expenses),
            _ => None,
        }
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expenses => write!(f, "Expenses"),
        }
    }
}

/// A transaction category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// Income or expenses
    #[serde(rename = "type")]
    pub category_type: CategoryType,

    /// Color resource, usually a hex code like "#ff8800"
    #[serde(default)]
    pub color: String,

    /// Icon resource name
    #[serde(default)]
    pub icon: String,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>, category_type: CategoryType) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            category_type,
            color: String::new(),
            icon: String::new(),
        }
    }

    /// Set color and icon
    pub fn with_style(mut self, color: impl Into<String>, icon: impl Into<String>) -> Self {
        self.color = color.into();
        self.icon = icon.into();
        self
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        let len = self.name.chars().count();
        if len > 50 {
            return Err(CategoryValidationError::NameTooLong(len));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
