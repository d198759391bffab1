//! One-shot commands: parse or run a single line, show configuration

use anyhow::{bail, Result};

use crate::config::{ShellPaths, Settings};
use crate::display::{format_output, format_suggestion};
use crate::parse::{parse_expression, Grammar};
use crate::session::Session;

/// Print what a line parses to without executing it
pub fn handle_parse(grammar: &Grammar, session: &Session, line: &str, json: bool) -> Result<()> {
    let outcome = parse_expression(line, grammar, session);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!(
        "{}",
        if outcome.is_valid() { "valid" } else { "incomplete" }
    );
    if let Some(action) = &outcome.action {
        println!("action: {}", serde_json::to_string(action)?);
    }
    if let Some(next) = format_suggestion(&outcome.suggestion) {
        println!("{}", next);
    }

    Ok(())
}

/// Parse and execute a single line
pub fn handle_run(grammar: &Grammar, session: &Session, line: &str) -> Result<()> {
    let outcome = parse_expression(line, grammar, session);

    let Some(action) = outcome.action else {
        if let Some(next) = format_suggestion(&outcome.suggestion) {
            eprintln!("{}", next);
        }
        bail!("Incomplete command: '{}'", line);
    };

    let executed = action.execute(session)?;
    if let Some(err) = &executed.audit_error {
        eprintln!("Warning: change applied but not audited: {}", err);
    }
    if let Some(text) = format_output(&executed.output, session.settings()) {
        println!("{}", text);
    }

    Ok(())
}

/// Show resolved paths and settings
pub fn handle_config(paths: &ShellPaths, settings: &Settings) {
    println!("Budget Shell Configuration");
    println!("==========================");
    println!("Data directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    if !settings.currency_code.is_empty() {
        println!("  Currency code:   {}", settings.currency_code);
    }
    println!("  Audit enabled:   {}", settings.audit_enabled);
    println!("  Prompt:          {:?}", settings.prompt);
}
