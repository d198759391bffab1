//! Account actions: create, list and delete

use serde::Serialize;

use super::consequence::Consequence;
use super::{ActionOutcome, ActionOutput};
use crate::audit::EntityType;
use crate::error::ShellResult;
use crate::models::{Account, Money};
use crate::session::Session;

/// `new account`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateAccount {
    pub name: String,
    pub description: String,
    pub category_name: String,
    pub starting_balance: Money,
}

impl CreateAccount {
    /// A name is the only required argument
    pub fn is_usable(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn execute(&self, session: &Session) -> ShellResult<ActionOutcome> {
        let ledger = session.ledger();

        let mut account = Account::new(self.name.trim(), self.starting_balance);
        account.description = self.description.trim().to_string();
        let category = self.category_name.trim();
        if !category.is_empty() {
            account.category = Some(category.to_string());
        }

        let account = ledger.insert_account(account)?;
        let mut consequences = vec![Consequence::created(
            EntityType::Account,
            account.id,
            &account.name,
            &account,
        )];

        if let Some(category) = &account.category {
            let consequence = match ledger.file_account(category, account.id)? {
                (Some(before), after) => Consequence::updated(
                    EntityType::Category,
                    after.id,
                    &after.name,
                    &before,
                    &after,
                ),
                (None, created) => {
                    Consequence::created(EntityType::Category, created.id, &created.name, &created)
                }
            };
            consequences.push(consequence);
        }

        Ok(ActionOutcome::new(ActionOutput::Account(account), consequences))
    }
}

/// `list account`
///
/// Text filters match case-insensitive substrings; an empty filter matches
/// everything. Balance bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListAccounts {
    pub name: String,
    pub description: String,
    pub category_name: String,
    pub min_balance: Option<Money>,
    pub max_balance: Option<Money>,
    pub include_closed: bool,
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl ListAccounts {
    pub fn matches(&self, account: &Account) -> bool {
        if account.closed && !self.include_closed {
            return false;
        }

        let category = account.category.as_deref().unwrap_or_default();
        contains_ignore_case(&account.name, self.name.trim())
            && contains_ignore_case(&account.description, self.description.trim())
            && contains_ignore_case(category, self.category_name.trim())
            && self.min_balance.map_or(true, |min| account.balance >= min)
            && self.max_balance.map_or(true, |max| account.balance <= max)
    }

    pub fn execute(&self, session: &Session) -> ShellResult<ActionOutcome> {
        let accounts: Vec<Account> = session
            .ledger()
            .accounts()?
            .into_iter()
            .filter(|account| self.matches(account))
            .collect();

        let consequences = accounts
            .iter()
            .map(|a| Consequence::read(EntityType::Account, a.id, &a.name, a))
            .collect();

        Ok(ActionOutcome::new(ActionOutput::Accounts(accounts), consequences))
    }
}

/// `delete account`
///
/// A soft delete closes the account; a hard delete removes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteAccount {
    pub name: String,
    pub is_hard_delete: bool,
}

impl DeleteAccount {
    pub fn is_usable(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn execute(&self, session: &Session) -> ShellResult<ActionOutcome> {
        let ledger = session.ledger();
        let name = self.name.trim();

        if !self.is_hard_delete {
            let (before, after) = ledger.close_account(name)?;
            return Ok(ActionOutcome::new(
                ActionOutput::Text(format!("Closed account: {}", after.name)),
                vec![Consequence::updated(
                    EntityType::Account,
                    after.id,
                    &after.name,
                    &before,
                    &after,
                )],
            ));
        }

        let account = ledger.remove_account(name)?;
        let mut consequences = vec![Consequence::deleted(
            EntityType::Account,
            account.id,
            &account.name,
            &account,
        )];

        if let Some(category) = &account.category {
            if let Some((before, after)) = ledger.unfile_account(category, account.id)? {
                consequences.push(Consequence::updated(
                    EntityType::Category,
                    after.id,
                    &after.name,
                    &before,
                    &after,
                ));
            }
        }

        Ok(ActionOutcome::new(
            ActionOutput::Text(format!("Deleted account: {}", account.name)),
            consequences,
        ))
    }
}
