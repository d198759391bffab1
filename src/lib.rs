//! Budget Shell - interactive command interpreter for a budgeting tool
//!
//! Reads command lines such as `new account Groceries --balance=50`,
//! suggests what may be typed next while a command is still incomplete, and
//! turns complete commands into actions that run against an in-memory
//! ledger.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, categories, money)
//! - `parse`: Tokenizer, token patterns, match resolution and command parsers
//! - `actions`: What a parsed command does, and its execution
//! - `ledger`: In-memory account book
//! - `session`: Settings, ledger and audit log shared by parsing and execution
//! - `audit`: Audit logging system
//! - `display`: Plain-text output formatting
//! - `cli`: Interactive shell and one-shot command handlers
//!
//! # Example
//!
//! ```rust
//! use budget_shell::config::Settings;
//! use budget_shell::parse::{parse_expression, Grammar};
//! use budget_shell::session::Session;
//!
//! let grammar = Grammar::new()?;
//! let session = Session::new(Settings::default());
//!
//! let outcome = parse_expression("new account Groceries", &grammar, &session);
//! if let Some(action) = outcome.action {
//!     action.execute(&session)?;
//! }
//! assert_eq!(session.ledger().accounts()?.len(), 1);
//! # Ok::<(), budget_shell::ShellError>(())
//! ```

pub mod actions;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod parse;
pub mod session;

pub use error::{ShellError, ShellResult};
