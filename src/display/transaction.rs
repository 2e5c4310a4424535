//! Transaction display formatting
//!
//! Register view of transactions plus the income/expense summary line.

use std::collections::HashMap;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Account, AccountId, Category, CategoryId, Transaction};
use crate::services::Totals;

use super::{truncate, MoneyFormat, MASK};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "St")]
    status: &'static str,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Account")]
    account: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format transactions as a register table
///
/// Accounts and categories are used to resolve names; unknown ids show as "?".
pub fn format_transaction_table(
    transactions: &[Transaction],
    accounts: &[Account],
    categories: &[Category],
    money: &MoneyFormat,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let account_names: HashMap<AccountId, &str> =
        accounts.iter().map(|a| (a.id, a.name.as_str())).collect();
    let category_names: HashMap<CategoryId, &str> =
        categories.iter().map(|c| (c.id, c.name.as_str())).collect();

    let rows = transactions.iter().map(|txn| TransactionRow {
        status: if txn.is_settled() { "✓" } else { " " },
        id: txn.id.to_string(),
        date: txn
            .parsed_date()
            .map(|d| d.format(date_format).to_string())
            .unwrap_or_else(|| txn.date.clone()),
        kind: txn.kind.to_string(),
        account: account_names.get(&txn.account_id).unwrap_or(&"?").to_string(),
        category: category_names.get(&txn.category_id).unwrap_or(&"?").to_string(),
        amount: format_amount(txn, money),
        description: truncate(&txn.description, 30),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

fn format_amount(txn: &Transaction, money: &MoneyFormat) -> String {
    if money.hidden {
        return MASK.to_string();
    }
    match txn.signed_amount() {
        Ok(amount) => money.format(amount),
        Err(_) => format!("{} (unreadable)", txn.money),
    }
}

/// Format income, expense and net totals
pub fn format_totals(totals: &Totals, money: &MoneyFormat) -> String {
    let mut output = String::new();
    output.push_str(&format!("Income:   {:>14}\n", money.format(totals.income)));
    output.push_str(&format!("Expenses: {:>14}\n", money.format(totals.expense)));
    output.push_str(&format!("Net:      {:>14}\n", money.format(totals.net())));

    if !totals.is_clean() {
        output.push_str(&format!(
            "Warning: {} settled transaction(s) with unreadable amounts were not counted\n",
            totals.malformed.len()
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryType, Money, TransactionType};

    #[test]
    fn test_register_resolves_names() {
        let account = Account::new("Wallet");
        let category = Category::new("Groceries", CategoryType::Expenses);
        let mut txn = Transaction::new(
            account.id,
            category.id,
            TransactionType::Expense,
            "42.10",
            "2024-06-15",
        );
        txn.settle();

        let output = format_transaction_table(
            &[txn],
            &[account],
            &[category],
            &MoneyFormat::new("$", false),
            "%d/%m/%Y",
        );

        assert!(output.contains("Wallet"));
        assert!(output.contains("Groceries"));
        assert!(output.contains("-$42.10"));
        assert!(output.contains("15/06/2024"));
    }

    #[test]
    fn test_register_shows_unreadable_amount() {
        let txn = Transaction::new(
            AccountId::new(),
            CategoryId::new(),
            TransactionType::Income,
            "abc",
            "2024-06-15",
        );
        let output =
            format_transaction_table(&[txn], &[], &[], &MoneyFormat::new("$", false), "%Y-%m-%d");

        assert!(output.contains("abc (unreadable)"));
        assert!(output.contains('?'));
    }

    #[test]
    fn test_totals() {
        let totals = Totals {
            income: Money::from_cents(100000),
            expense: Money::from_cents(20000),
            malformed: Vec::new(),
        };
        let output = format_totals(&totals, &MoneyFormat::new("$", false));
        assert!(output.contains("$800.00"));
        assert!(!output.contains("Warning"));

        let hidden = format_totals(&totals, &MoneyFormat::new("$", true));
        assert!(!hidden.contains("$"));
    }
}
