//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::models::Money;
use crate::services::AccountBalance;

use super::MoneyFormat;

/// Format a list of accounts with balances as a table
pub fn format_account_list(summaries: &[AccountBalance], money: &MoneyFormat) -> String {
    if summaries.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let name_width = summaries
        .iter()
        .map(|s| s.account.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>14}  {:>14}  {}\n",
        "Name",
        "Balance",
        "Projected",
        "Status",
        name_width = name_width,
    ));
    output.push_str(&separator(name_width));

    for summary in summaries {
        let status = if !summary.malformed.is_empty() {
            format!("{} unreadable", summary.malformed.len())
        } else if summary.pending_count > 0 {
            format!("{} pending", summary.pending_count)
        } else {
            String::new()
        };

        output.push_str(&format!(
            "{:<name_width$}  {:>14}  {:>14}  {}\n",
            summary.account.name,
            money.format(summary.balance),
            money.format(summary.projected()),
            status,
            name_width = name_width,
        ));
    }

    let total: Money = summaries.iter().map(|s| s.balance).sum();
    let projected: Money = summaries.iter().map(|s| s.projected()).sum();

    output.push_str(&separator(name_width));
    output.push_str(&format!(
        "{:<name_width$}  {:>14}  {:>14}\n",
        "TOTAL",
        money.format(total),
        money.format(projected),
        name_width = name_width,
    ));

    output
}

fn separator(name_width: usize) -> String {
    format!(
        "{:-<name_width$}  {:->14}  {:->14}  {:-<10}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    )
}

/// Format a single account's details
pub fn format_account_details(summary: &AccountBalance, money: &MoneyFormat) -> String {
    let account = &summary.account;

    let mut output = String::new();
    output.push_str(&format!("Account: {}\n", account.name));
    output.push_str(&format!("  ID:               {}\n", account.id));
    output.push_str(&format!(
        "  Starting Balance: {}\n",
        money.format(account.starting_balance)
    ));
    output.push_str(&format!("  Balance:          {}\n", money.format(summary.balance)));

    if summary.pending_count > 0 {
        output.push_str(&format!(
            "  Pending:          {} ({} transactions)\n",
            money.format(summary.pending),
            summary.pending_count
        ));
        output.push_str(&format!(
            "  Projected:        {}\n",
            money.format(summary.projected())
        ));
    }

    for id in &summary.malformed {
        output.push_str(&format!("  Unreadable amount in {}\n", id));
    }

    output.push_str(&format!(
        "  Created:          {}\n",
        account.created_at.format("%Y-%m-%d %H:%M")
    ));

    output
}
