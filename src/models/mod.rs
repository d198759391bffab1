//! Core data models for Budget Shell
//!
//! The data structures the executed actions work with: accounts, categories
//! and money amounts.

pub mod account;
pub mod category;
pub mod ids;
pub mod money;

pub use account::{Account, AccountValidationError};
pub use category::Category;
pub use ids::{AccountId, CategoryId};
pub use money::{Money, MoneyParseError};
