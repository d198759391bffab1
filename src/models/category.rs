//! Category model
//!
//! Categories group accounts by name. They are created on demand the first
//! time an account is filed under them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, CategoryId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,

    /// Accounts filed under this category
    #[serde(default)]
    pub accounts: Vec<AccountId>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::new(),
            name: name.into(),
            accounts: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// File an account under this category
    pub fn attach(&mut self, account: AccountId) {
        if !self.accounts.contains(&account) {
            self.accounts.push(account);
            self.updated_at = Utc::now();
        }
    }

    /// Remove an account from this category
    pub fn detach(&mut self, account: AccountId) {
        let before = self.accounts.len();
        self.accounts.retain(|id| *id != account);
        if self.accounts.len() != before {
            self.updated_at = Utc::now();
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
