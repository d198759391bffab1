//! Account model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;

/// A financial account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,

    /// Account name (unique, compared case-insensitively)
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Name of the category this account is filed under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    pub balance: Money,

    /// Closed accounts are soft-deleted: hidden from listings, but kept
    pub closed: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new open account with the given starting balance
    pub fn new(name: impl Into<String>, starting_balance: Money) -> Self {
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            name: name.into(),
            description: String::new(),
            category: None,
            balance: starting_balance,
            closed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark this account as closed
    pub fn close(&mut self) {
        self.closed = true;
        self.updated_at = Utc::now();
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(AccountValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.category {
            Some(category) => write!(f, "{} [{}]", self.name, category),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountValidationError {
    #[error("Account name cannot be empty")]
    EmptyName,
    #[error("Account name too long ({0} chars, max 100)")]
    NameTooLong(usize),
}
