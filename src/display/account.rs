//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::config::Settings;
use crate::models::{Account, Money};

fn money(amount: Money, settings: &Settings) -> String {
    amount.format_with(&settings.currency_symbol, &settings.currency_suffix())
}

/// Format a list of accounts as a table with a total row
pub fn format_account_list(accounts: &[Account], settings: &Settings) -> String {
    if accounts.is_empty() {
        return "No accounts found.".to_string();
    }

    let name_width = accounts
        .iter()
        .map(|a| a.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(5);

    let category_width = accounts
        .iter()
        .filter_map(|a| a.category.as_ref())
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let balances: Vec<String> = accounts.iter().map(|a| money(a.balance, settings)).collect();
    let total = Money::from_cents(accounts.iter().map(|a| a.balance.cents()).sum());
    let total = money(total, settings);
    let balance_width = balances
        .iter()
        .chain(std::iter::once(&total))
        .map(|b| b.chars().count())
        .max()
        .unwrap_or(12)
        .max(12);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<category_width$}  {:>balance_width$}  {}\n",
        "Name", "Category", "Balance", "Status",
    ));

    let separator = format!(
        "{:-<name_width$}  {:-<category_width$}  {:->balance_width$}  {:-<6}\n",
        "", "", "", "",
    );
    output.push_str(&separator);

    for (account, balance) in accounts.iter().zip(&balances) {
        output.push_str(&format!(
            "{:<name_width$}  {:<category_width$}  {:>balance_width$}  {}\n",
            account.name,
            account.category.as_deref().unwrap_or(""),
            balance,
            if account.closed { "Closed" } else { "" },
        ));
    }

    output.push_str(&separator);
    output.push_str(&format!(
        "{:<name_width$}  {:<category_width$}  {:>balance_width$}\n",
        "TOTAL", "", total,
    ));

    output
}

/// Format a single account's details
pub fn format_account_details(account: &Account, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", account.name));
    output.push_str(&format!("  ID:          {}\n", account.id));
    if !account.description.is_empty() {
        output.push_str(&format!("  Description: {}\n", account.description));
    }
    if let Some(category) = &account.category {
        output.push_str(&format!("  Category:    {}\n", category));
    }
    output.push_str(&format!(
        "  Balance:     {}\n",
        money(account.balance, settings)
    ));
    output.push_str(&format!(
        "  Status:      {}\n",
        if account.closed { "Closed" } else { "Open" }
    ));
    output.push_str(&format!(
        "  Created:     {}\n",
        account.created_at.format("%Y-%m-%d %H:%M")
    ));

    output
}
