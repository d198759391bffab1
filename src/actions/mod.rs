//! Actions produced by the parser and their execution
//!
//! The parser turns a complete input line into an [`Action`]. Executing the
//! action against a [`Session`] yields output for the user and a list of
//! [`Consequence`]s describing what was read or changed; mutations are
//! appended to the session's audit log.

pub mod account;
pub mod consequence;
pub mod help;

use serde::Serialize;

pub use account::{CreateAccount, DeleteAccount, ListAccounts};
pub use consequence::{Consequence, ConsequenceKind};
pub use help::{HelpContent, HelpItem};

use crate::error::ShellResult;
use crate::models::Account;
use crate::session::Session;

/// A runnable command
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", content = "args", rename_all = "snake_case")]
pub enum Action {
    CreateAccount(CreateAccount),
    ListAccounts(ListAccounts),
    DeleteAccount(DeleteAccount),
    Help(HelpContent),
    Exit,
    Version,
}

/// What an executed action has to show
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutput {
    Text(String),
    Help(HelpContent),
    Account(Account),
    Accounts(Vec<Account>),
    /// The interactive shell should stop
    Exit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub output: ActionOutput,
    pub consequences: Vec<Consequence>,
    /// Set when the change was applied but could not be written to the
    /// audit log
    pub audit_error: Option<String>,
}

impl ActionOutcome {
    pub fn new(output: ActionOutput, consequences: Vec<Consequence>) -> Self {
        Self {
            output,
            consequences,
            audit_error: None,
        }
    }

    /// An outcome that touched no entity
    pub fn output_only(output: ActionOutput) -> Self {
        Self::new(output, Vec::new())
    }
}

impl Action {
    /// Run the action and record its consequences in the audit log.
    ///
    /// A failed audit write does not undo the change; it is reported in
    /// [`ActionOutcome::audit_error`].
    pub fn execute(&self, session: &Session) -> ShellResult<ActionOutcome> {
        let mut outcome = match self {
            Self::CreateAccount(action) => action.execute(session)?,
            Self::ListAccounts(action) => action.execute(session)?,
            Self::DeleteAccount(action) => action.execute(session)?,
            Self::Help(content) => ActionOutcome::output_only(ActionOutput::Help(content.clone())),
            Self::Exit => ActionOutcome::output_only(ActionOutput::Exit),
            Self::Version => ActionOutcome::output_only(ActionOutput::Text(format!(
                "budget-shell {}",
                env!("CARGO_PKG_VERSION")
            ))),
        };

        if let Err(e) = session.record(&outcome.consequences) {
            outcome.audit_error = Some(e.to_string());
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditLogger;
    use crate::config::Settings;
    use crate::models::Money;
    use tempfile::TempDir;

    #[test]
    fn test_execute_records_mutations() {
        let temp = TempDir::new().unwrap();
        let session = Session::new(Settings::default())
            .with_audit_logger(AuditLogger::new(temp.path().join("audit.log")));

        Action::CreateAccount(CreateAccount {
            name: "Checking".into(),
            category_name: "Bank".into(),
            ..CreateAccount::default()
        })
        .execute(&session)
        .unwrap();
        Action::ListAccounts(ListAccounts::default())
            .execute(&session)
            .unwrap();

        let entries = session.audit_logger().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_audit_failure_keeps_the_change() {
        let temp = TempDir::new().unwrap();
        // A directory cannot be opened for appending
        let session = Session::new(Settings::default())
            .with_audit_logger(AuditLogger::new(temp.path().to_path_buf()));

        let outcome = Action::CreateAccount(CreateAccount {
            name: "Checking".into(),
            ..CreateAccount::default()
        })
        .execute(&session)
        .unwrap();

        assert!(matches!(outcome.output, ActionOutput::Account(_)));
        assert!(outcome.audit_error.is_some());
        assert!(session.ledger().find_account("Checking").unwrap().is_some());
    }

    #[test]
    fn test_terminal_outputs() {
        let session = Session::new(Settings::default());

        let exit = Action::Exit.execute(&session).unwrap();
        assert_eq!(exit.output, ActionOutput::Exit);

        let version = Action::Version.execute(&session).unwrap();
        match version.output {
            ActionOutput::Text(text) => assert!(text.starts_with("budget-shell ")),
            other => panic!("unexpected output: {:?}", other),
        }

        let help = HelpContent::new().header("Help");
        let outcome = Action::Help(help.clone()).execute(&session).unwrap();
        assert_eq!(outcome.output, ActionOutput::Help(help));
        assert!(outcome.consequences.is_empty());
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::CreateAccount(CreateAccount {
            name: "Checking".into(),
            starting_balance: Money::from_cents(1234),
            ..CreateAccount::default()
        });

        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["action"], "create_account");
        assert_eq!(json["args"]["name"], "Checking");
        assert_eq!(json["args"]["starting_balance"], 1234);

        let json = serde_json::to_value(Action::Exit).unwrap();
        assert_eq!(json["action"], "exit");
    }
}
