//! Commands that take no arguments: `exit` and `version`

use super::{admissible, unmatched, Consumed};
use crate::actions::{Action, HelpContent};
use crate::parse::context::ParseContext;
use crate::parse::grammar::Grammar;
use crate::parse::resolve::resolve;
use crate::parse::suggestion::ParseOutcome;
use crate::parse::token::{display_names, TokenPattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BareArg {
    Help,
}

pub(crate) fn arguments() -> Vec<TokenPattern<BareArg>> {
    vec![TokenPattern::flag(BareArg::Help, "h", "help")]
}

/// The action a bare command runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bare {
    Exit,
    Version,
}

impl Bare {
    fn action(self) -> Action {
        match self {
            Self::Exit => Action::Exit,
            Self::Version => Action::Version,
        }
    }

    fn help(self) -> HelpContent {
        let (title, description) = match self {
            Self::Exit => ("Exit Command", "Leave the interactive shell."),
            Self::Version => ("Version Command", "Show the program version."),
        };

        HelpContent::new()
            .header(title)
            .rule('═')
            .paragraph(description)
    }
}

pub(crate) fn parse(ctx: ParseContext<'_>, grammar: &Grammar, command: Bare) -> ParseOutcome {
    let next = admissible(&grammar.bare, BareArg::Help, &Consumed::new());

    let Some(token) = ctx.next_token() else {
        return ParseOutcome::complete(command.action(), display_names(next));
    };

    let resolution = resolve(token, &next);
    match resolution.exact.map(TokenPattern::id) {
        Some(BareArg::Help) => ParseOutcome::terminal(Action::Help(command.help())),
        None => unmatched(token, &resolution.ranked),
    }
}
