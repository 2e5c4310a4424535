//! Balance aggregation
//!
//! Account balances and income/expense totals over transaction snapshots.
//!
//! Only settled (received) transactions count. Income adds to a balance,
//! expenses and card spending subtract from it. Amounts that cannot be
//! parsed, including magnitudes above the parsing cap, contribute nothing,
//! and their ids are reported back in [`Totals::malformed`] /
//! [`AccountBalance::malformed`] so callers can warn about the data instead
//! of silently under-counting. Sums saturate rather than overflow.

use crate::models::{Account, Money, Transaction, TransactionId};

/// Income and expense sums over a set of transactions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Totals {
    /// Sum of settled income
    pub income: Money,
    /// Sum of settled expenses and card spending
    pub expense: Money,
    /// Settled transactions skipped because their amount did not parse
    pub malformed: Vec<TransactionId>,
}

impl Totals {
    /// Income minus expense
    pub fn net(&self) -> Money {
        self.income - self.expense
    }

    /// True when every settled amount parsed
    pub fn is_clean(&self) -> bool {
        self.malformed.is_empty()
    }
}

/// Balance details for one account
#[derive(Debug, Clone, PartialEq)]
pub struct AccountBalance {
    pub account: Account,
    /// Starting balance plus settled transactions
    pub balance: Money,
    /// Signed sum of transactions not yet received
    pub pending: Money,
    /// Number of transactions not yet received
    pub pending_count: usize,
    /// Transactions of this account skipped because their amount did not parse
    pub malformed: Vec<TransactionId>,
}

impl AccountBalance {
    /// Balance once every pending transaction is received
    pub fn projected(&self) -> Money {
        self.balance + self.pending
    }
}

/// Sum settled income and expenses
pub fn calculate_totals(transactions: &[Transaction]) -> Totals {
    let mut totals = Totals::default();

    for txn in transactions.iter().filter(|t| t.is_settled()) {
        match txn.amount() {
            Ok(amount) if txn.kind.is_inflow() => totals.income += amount,
            Ok(amount) => totals.expense += amount,
            Err(e) => {
                tracing::warn!(id = %txn.id, money = %txn.money, error = %e, "skipping unparsable amount");
                totals.malformed.push(txn.id);
            }
        }
    }

    totals
}

/// Current balance of an account: starting balance plus its settled transactions
///
/// Transactions belonging to other accounts are ignored.
pub fn account_balance(account: &Account, transactions: &[Transaction]) -> Money {
    let delta: Money = transactions
        .iter()
        .filter(|t| t.account_id == account.id && t.is_settled())
        .filter_map(|t| t.signed_amount().ok())
        .sum();

    account.starting_balance + delta
}

/// Balance, pending amount and data problems for one account
pub fn balance_report(account: &Account, transactions: &[Transaction]) -> AccountBalance {
    let mut report = AccountBalance {
        account: account.clone(),
        balance: account.starting_balance,
        pending: Money::zero(),
        pending_count: 0,
        malformed: Vec::new(),
    };

    for txn in transactions.iter().filter(|t| t.account_id == account.id) {
        let amount = match txn.signed_amount() {
            Ok(amount) => amount,
            Err(e) => {
                tracing::warn!(id = %txn.id, money = %txn.money, error = %e, "skipping unparsable amount");
                report.malformed.push(txn.id);
                continue;
            }
        };

        if txn.is_settled() {
            report.balance += amount;
        } else {
            report.pending += amount;
            report.pending_count += 1;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::money::MAX_PARSED_CENTS;
    use crate::models::{CategoryId, TransactionType};

    fn txn(account: &Account, kind: TransactionType, money: &str, received: bool) -> Transaction {
        let mut t = Transaction::new(account.id, CategoryId::new(), kind, money, "2024-06-10");
        t.received = received;
        t
    }

    #[test]
    fn test_settled_income_and_expense() {
        let account = Account::with_starting_balance("Main", Money::from_cents(500000));
        let transactions = vec![
            txn(&account, TransactionType::Income, "1000", true),
            txn(&account, TransactionType::Expense, "200", true),
        ];

        assert_eq!(
            account_balance(&account, &transactions),
            Money::from_cents(580000)
        );
    }

    #[test]
    fn test_unsettled_income_is_ignored() {
        let account = Account::new("Main");
        let transactions = vec![txn(&account, TransactionType::Income, "500", false)];

        assert_eq!(account_balance(&account, &transactions), Money::zero());
    }

    #[test]
    fn test_card_spending_subtracts() {
        let account = Account::with_starting_balance("Main", Money::from_cents(10000));
        let transactions = vec![txn(&account, TransactionType::CardSpending, "25.50", true)];

        assert_eq!(
            account_balance(&account, &transactions),
            Money::from_cents(7450)
        );
    }

    #[test]
    fn test_other_accounts_ignored() {
        let account = Account::with_starting_balance("Main", Money::from_cents(100));
        let other = Account::new("Other");
        let transactions = vec![txn(&other, TransactionType::Income, "999", true)];

        assert_eq!(account_balance(&account, &transactions), Money::from_cents(100));
    }

    #[test]
    fn test_balance_equals_start_plus_delta() {
        let account = Account::with_starting_balance("Main", Money::from_cents(-3000));
        let transactions = vec![
            txn(&account, TransactionType::Income, "10.10", true),
            txn(&account, TransactionType::Income, "0.20", true),
            txn(&account, TransactionType::Expense, "5.05", true),
            txn(&account, TransactionType::Expense, "70", false),
        ];

        let delta: Money = transactions
            .iter()
            .filter(|t| t.is_settled())
            .map(|t| t.signed_amount().unwrap())
            .sum();
        assert_eq!(delta, Money::from_cents(525));
        assert_eq!(
            account_balance(&account, &transactions),
            account.starting_balance + delta
        );
    }

    #[test]
    fn test_totals_empty() {
        let totals = calculate_totals(&[]);
        assert_eq!(totals.income, Money::zero());
        assert_eq!(totals.expense, Money::zero());
        assert!(totals.is_clean());
    }

    #[test]
    fn test_oversized_amounts_are_reported_not_summed() {
        let account = Account::new("Main");
        let huge = "92233720368547758";
        let transactions = vec![
            txn(&account, TransactionType::Income, huge, true),
            txn(&account, TransactionType::Income, huge, true),
            txn(&account, TransactionType::Income, "10", true),
        ];

        let totals = calculate_totals(&transactions);
        assert_eq!(totals.income, Money::from_cents(1000));
        assert_eq!(totals.malformed, vec![transactions[0].id, transactions[1].id]);
        assert_eq!(account_balance(&account, &transactions), Money::from_cents(1000));
        assert_eq!(balance_report(&account, &transactions).malformed.len(), 2);
    }

    #[test]
    fn test_largest_amounts_sum_without_overflow() {
        let account = Account::with_starting_balance("Main", Money::from_cents(i64::MAX));
        let transactions: Vec<Transaction> = (0..3)
            .map(|_| txn(&account, TransactionType::Income, "1000000000000", true))
            .collect();

        let totals = calculate_totals(&transactions);
        assert_eq!(totals.income.cents(), 3 * MAX_PARSED_CENTS);
        assert!(totals.is_clean());
        assert_eq!(account_balance(&account, &transactions).cents(), i64::MAX);
    }

    #[test]
    fn test_totals_by_direction() {
        let account = Account::new("Main");
        let transactions = vec![
            txn(&account, TransactionType::Income, "1000", true),
            txn(&account, TransactionType::Income, "50", false),
            txn(&account, TransactionType::Expense, "200", true),
            txn(&account, TransactionType::CardSpending, "99.99", true),
        ];

        let totals = calculate_totals(&transactions);
        assert_eq!(totals.income, Money::from_cents(100000));
        assert_eq!(totals.expense, Money::from_cents(29999));
        assert_eq!(totals.net(), Money::from_cents(70001));
    }

    #[test]
    fn test_malformed_amount_counts_zero_and_is_reported() {
        let account = Account::with_starting_balance("Main", Money::from_cents(100));
        let bad = txn(&account, TransactionType::Income, "12abc", true);
        let negative = txn(&account, TransactionType::Expense, "-5", true);
        let transactions = vec![
            bad.clone(),
            negative.clone(),
            txn(&account, TransactionType::Income, "1", true),
        ];

        let totals = calculate_totals(&transactions);
        assert_eq!(totals.income, Money::from_cents(100));
        assert_eq!(totals.expense, Money::zero());
        assert_eq!(totals.malformed, vec![bad.id, negative.id]);
        assert!(!totals.is_clean());

        assert_eq!(account_balance(&account, &transactions), Money::from_cents(200));
    }

    #[test]
    fn test_unsettled_malformed_not_reported_in_totals() {
        let account = Account::new("Main");
        let transactions = vec![txn(&account, TransactionType::Income, "oops", false)];
        assert!(calculate_totals(&transactions).is_clean());
    }

    #[test]
    fn test_balance_report() {
        let account = Account::with_starting_balance("Main", Money::from_cents(500000));
        let bad = txn(&account, TransactionType::Expense, "", true);
        let transactions = vec![
            txn(&account, TransactionType::Income, "1000", true),
            txn(&account, TransactionType::Expense, "200", true),
            txn(&account, TransactionType::Income, "500", false),
            txn(&account, TransactionType::CardSpending, "100", false),
            bad.clone(),
        ];

        let report = balance_report(&account, &transactions);
        assert_eq!(report.balance, Money::from_cents(580000));
        assert_eq!(report.balance, account_balance(&account, &transactions));
        assert_eq!(report.pending, Money::from_cents(40000));
        assert_eq!(report.pending_count, 2);
        assert_eq!(report.projected(), Money::from_cents(620000));
        assert_eq!(report.malformed, vec![bad.id]);
    }
}
