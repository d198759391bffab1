//! Session state shared by parsing and execution
//!
//! A session bundles the user's settings, the ledger that actions run
//! against, and the audit log that records what they changed. Parsers only
//! borrow it; actions receive it when they execute.

use crate::actions::Consequence;
use crate::audit::AuditLogger;
use crate::config::Settings;
use crate::error::ShellResult;
use crate::ledger::Ledger;
use crate::models::Money;

#[derive(Debug)]
pub struct Session {
    settings: Settings,
    ledger: Ledger,
    audit: Option<AuditLogger>,
}

impl Session {
    /// A session with an empty ledger and no audit log
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ledger: Ledger::new(),
            audit: None,
        }
    }

    pub fn with_audit_logger(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Format an amount with the configured currency symbol and code
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with(
            &self.settings.currency_symbol,
            &self.settings.currency_suffix(),
        )
    }

    /// Append the auditable consequences to the audit log, if one is attached
    pub fn record(&self, consequences: &[Consequence]) -> ShellResult<()> {
        let Some(logger) = &self.audit else {
            return Ok(());
        };
        if !self.settings.audit_enabled {
            return Ok(());
        }

        let entries: Vec<_> = consequences
            .iter()
            .filter_map(Consequence::audit_entry)
            .collect();
        logger.log_batch(&entries)
    }
}
