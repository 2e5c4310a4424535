//! Display formatting for terminal output
//!
//! Renders accounts, categories, transactions and month lists. Every amount
//! goes through [`MoneyFormat`] so the "hide values" preference is honoured
//! in one place.

pub mod account;
pub mod category;
pub mod month;
pub mod transaction;

pub use account::{format_account_details, format_account_list};
pub use category::format_category_list;
pub use month::format_month_list;
pub use transaction::{format_totals, format_transaction_table};

use crate::models::Money;

/// Placeholder shown instead of amounts when values are hidden
pub const MASK: &str = "****";

/// How amounts are rendered
#[derive(Debug, Clone, Copy)]
pub struct MoneyFormat<'a> {
    pub symbol: &'a str,
    pub hidden: bool,
}

impl<'a> MoneyFormat<'a> {
    pub fn new(symbol: &'a str, hidden: bool) -> Self {
        Self { symbol, hidden }
    }

    /// Format an amount, or the mask when values are hidden
    pub fn format(&self, amount: Money) -> String {
        if self.hidden {
            MASK.to_string()
        } else {
            amount.format_with_symbol(self.symbol)
        }
    }
}

/// Truncate a string to a maximum length, adding "..." if needed
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        format!("{}...", s.chars().take(max_len - 3).collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_format_masks() {
        let amount = Money::from_cents(-1250);
        assert_eq!(MoneyFormat::new("R$", false).format(amount), "-R$12.50");
        assert_eq!(MoneyFormat::new("R$", true).format(amount), MASK);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10), "Short");
        assert_eq!(truncate("This is a very long string", 10), "This is...");
        assert_eq!(truncate("Café au lait", 4), "C...");
    }
}
