//! Interactive shell
//!
//! Reads one command per line, executes complete commands and prints the
//! suggestions for anything else.

use std::io::{self, BufRead, Write};

use crate::display::{format_output, format_suggestion};
use crate::error::ShellResult;
use crate::parse::{parse_expression, Grammar};
use crate::session::Session;

/// What the loop does after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

/// Shell state that persists across lines
pub struct Shell {
    grammar: Grammar,
    session: Session,
}

impl Shell {
    pub fn new(grammar: Grammar, session: Session) -> Self {
        Self { grammar, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Evaluate one line, writing whatever it prints to `out`
    pub fn eval_line<W: Write>(&self, line: &str, out: &mut W) -> ShellResult<Step> {
        if line.trim().is_empty() {
            return Ok(Step::Continue);
        }

        let outcome = parse_expression(line, &self.grammar, &self.session);
        let Some(action) = outcome.action else {
            if let Some(next) = format_suggestion(&outcome.suggestion) {
                writeln!(out, "{}", next)?;
            }
            return Ok(Step::Continue);
        };

        let executed = action.execute(&self.session)?;
        if let Some(err) = &executed.audit_error {
            eprintln!("Warning: change applied but not audited: {}", err);
        }
        match format_output(&executed.output, self.session.settings()) {
            Some(text) => {
                writeln!(out, "{}", text)?;
                Ok(Step::Continue)
            }
            None => Ok(Step::Quit),
        }
    }

    /// Run until `exit` or end of input
    ///
    /// Execution errors are reported on stderr and the loop continues.
    pub fn run<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> ShellResult<()> {
        let mut lines = input.lines();

        loop {
            write!(out, "{}", self.session.settings().prompt)?;
            out.flush()?;

            let Some(line) = lines.next() else {
                // EOF (Ctrl+D)
                writeln!(out)?;
                break;
            };

            match self.eval_line(&line?, out) {
                Ok(Step::Continue) => {}
                Ok(Step::Quit) => break,
                Err(e) => eprintln!("Error: {}", e),
            }
        }

        Ok(())
    }
}

/// Run the interactive shell on stdin and stdout
pub fn handle_shell(grammar: Grammar, session: Session) -> ShellResult<()> {
    println!("Budget Shell {}", env!("CARGO_PKG_VERSION"));
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let shell = Shell::new(grammar, session);
    let stdin = io::stdin();
    shell.run(stdin.lock(), &mut io::stdout())
}
