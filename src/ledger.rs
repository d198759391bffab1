//! In-memory account book
//!
//! Holds the accounts and categories that executed actions work against.
//! Names are unique and compared case-insensitively.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{ShellError, ShellResult};
use crate::models::{Account, AccountId, Category, CategoryId};

/// A category before and after a change
pub type CategoryChange = (Option<Category>, Category);

#[derive(Debug, Default)]
pub struct Ledger {
    accounts: RwLock<HashMap<AccountId, Account>>,
    categories: RwLock<HashMap<CategoryId, Category>>,
}

fn read_lock<T>(lock: &RwLock<T>) -> ShellResult<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|e| ShellError::Storage(format!("Failed to acquire read lock: {}", e)))
}

fn write_lock<T>(lock: &RwLock<T>) -> ShellResult<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|e| ShellError::Storage(format!("Failed to acquire write lock: {}", e)))
}

fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new account after validating it
    pub fn insert_account(&self, account: Account) -> ShellResult<Account> {
        account
            .validate()
            .map_err(|e| ShellError::Validation(e.to_string()))?;

        let mut accounts = write_lock(&self.accounts)?;
        if accounts.values().any(|a| same_name(&a.name, &account.name)) {
            return Err(ShellError::Duplicate {
                entity_type: "Account",
                identifier: account.name,
            });
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    /// Find an account by name (case-insensitive)
    pub fn find_account(&self, name: &str) -> ShellResult<Option<Account>> {
        let accounts = read_lock(&self.accounts)?;
        Ok(accounts.values().find(|a| same_name(&a.name, name)).cloned())
    }

    /// All accounts, sorted by name
    pub fn accounts(&self) -> ShellResult<Vec<Account>> {
        let accounts = read_lock(&self.accounts)?;
        let mut all: Vec<_> = accounts.values().cloned().collect();
        all.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(all)
    }

    /// Mark an account closed. Returns the account before and after.
    pub fn close_account(&self, name: &str) -> ShellResult<(Account, Account)> {
        let mut accounts = write_lock(&self.accounts)?;
        let account = accounts
            .values_mut()
            .find(|a| same_name(&a.name, name))
            .ok_or_else(|| ShellError::account_not_found(name))?;

        let before = account.clone();
        account.close();
        Ok((before, account.clone()))
    }

    /// Remove an account entirely
    pub fn remove_account(&self, name: &str) -> ShellResult<Account> {
        let mut accounts = write_lock(&self.accounts)?;
        let id = accounts
            .values()
            .find(|a| same_name(&a.name, name))
            .map(|a| a.id)
            .ok_or_else(|| ShellError::account_not_found(name))?;

        accounts
            .remove(&id)
            .ok_or_else(|| ShellError::account_not_found(name))
    }

    /// Find a category by name (case-insensitive)
    pub fn find_category(&self, name: &str) -> ShellResult<Option<Category>> {
        let categories = read_lock(&self.categories)?;
        Ok(categories
            .values()
            .find(|c| same_name(&c.name, name))
            .cloned())
    }

    /// All categories, sorted by name
    pub fn categories(&self) -> ShellResult<Vec<Category>> {
        let categories = read_lock(&self.categories)?;
        let mut all: Vec<_> = categories.values().cloned().collect();
        all.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(all)
    }

    /// File an account under a category, creating the category if needed.
    ///
    /// The first element is `None` when the category was created.
    pub fn file_account(&self, category: &str, account: AccountId) -> ShellResult<CategoryChange> {
        let mut categories = write_lock(&self.categories)?;

        if let Some(existing) = categories
            .values_mut()
            .find(|c| same_name(&c.name, category))
        {
            let before = existing.clone();
            existing.attach(account);
            return Ok((Some(before), existing.clone()));
        }

        let mut created = Category::new(category);
        created.attach(account);
        categories.insert(created.id, created.clone());
        Ok((None, created))
    }

    /// Take an account out of a category. Returns `None` if no such category exists.
    pub fn unfile_account(
        &self,
        category: &str,
        account: AccountId,
    ) -> ShellResult<Option<(Category, Category)>> {
        let mut categories = write_lock(&self.categories)?;

        Ok(categories
            .values_mut()
            .find(|c| same_name(&c.name, category))
            .map(|existing| {
                let before = existing.clone();
                existing.detach(account);
                (before, existing.clone())
            }))
    }
}
