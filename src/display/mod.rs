//! Display formatting for terminal output
//!
//! Turns action outputs, help content and suggestions into plain text.

pub mod account;
pub mod help;
pub mod suggestion;

pub use account::{format_account_details, format_account_list};
pub use help::format_help;
pub use suggestion::format_suggestion;

use crate::actions::ActionOutput;
use crate::config::Settings;

/// Format the output of an executed action; `Exit` prints nothing
pub fn format_output(output: &ActionOutput, settings: &Settings) -> Option<String> {
    match output {
        ActionOutput::Text(text) => Some(text.clone()),
        ActionOutput::Help(content) => Some(format_help(content)),
        ActionOutput::Account(account) => Some(format!(
            "Created account:\n{}",
            format_account_details(account, settings)
        )),
        ActionOutput::Accounts(accounts) => Some(format_account_list(accounts, settings)),
        ActionOutput::Exit => None,
    }
}
