//! CLI command handlers
//!
//! Bridges the clap argument parsing in the binary with the parser and the
//! session.

pub mod oneshot;
pub mod shell;

pub use oneshot::{handle_config, handle_parse, handle_run};
pub use shell::{handle_shell, Shell, Step};

use anyhow::{bail, Result};

use crate::audit::AuditLogger;
use crate::config::{ShellPaths, Settings};
use crate::error::ShellResult;
use crate::session::Session;

/// Create a session for executing commands, with the audit log attached when
/// auditing is enabled
pub fn open_session(paths: &ShellPaths, settings: Settings) -> ShellResult<Session> {
    paths.ensure_directories()?;

    let audit_enabled = settings.audit_enabled;
    let session = Session::new(settings);
    if audit_enabled {
        Ok(session.with_audit_logger(AuditLogger::new(paths.audit_log())))
    } else {
        Ok(session)
    }
}

/// Join command-line words back into one input line, quoting words so they
/// tokenize the same way again.
///
/// The line syntax has no escapes, so a word holding both quote characters
/// cannot be written and is refused.
pub fn join_args(args: &[String]) -> Result<String> {
    let words = args
        .iter()
        .map(|arg| {
            let single = arg.contains('\'');
            let double = arg.contains('"');

            if single && double {
                bail!("Cannot pass a word containing both quote characters: {}", arg);
            }
            if double {
                Ok(format!("'{}'", arg))
            } else if single || arg.is_empty() || arg.contains(char::is_whitespace) {
                Ok(format!("\"{}\"", arg))
            } else {
                Ok(arg.clone())
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(words.join(" "))
}
