//! Command-line parsing and auto-suggestion
//!
//! A raw input line is split into tokens, then walked through the grammar.
//! The result is the action the line describes, if it is complete, together
//! with what may be typed next:
//!
//! ```
//! use budget_shell::config::Settings;
//! use budget_shell::parse::{parse_expression, Grammar};
//! use budget_shell::session::Session;
//!
//! let grammar = Grammar::new().unwrap();
//! let session = Session::new(Settings::default());
//!
//! let outcome = parse_expression("new account", &grammar, &session);
//! assert!(outcome.action.is_none());
//! assert!(outcome.suggestion.next_args.contains(&"<name>".to_string()));
//! ```
//!
//! Malformed input is never an error: it produces no action and a list of
//! suggestions instead.

pub mod commands;
pub mod context;
pub mod grammar;
pub mod resolve;
pub mod suggestion;
pub mod token;
pub mod tokenizer;
pub mod values;

pub use context::ParseContext;
pub use grammar::{CommandId, Grammar, NounId};
pub use resolve::{resolve, Resolution};
pub use suggestion::{AutoSuggestion, ParseOutcome};
pub use token::{display_names, Rule, TokenPattern, ValueKind};
pub use tokenizer::tokenize;

use crate::session::Session;

/// Parse one input line
pub fn parse_expression(line: &str, grammar: &Grammar, session: &Session) -> ParseOutcome {
    let tokens = tokenize(line);
    commands::parse_root(&tokens, grammar, session)
}
