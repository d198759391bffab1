//! `help [--verbose]`

use super::{unmatched, Consumed};
use super::{delete_account, list_account, new_account};
use crate::actions::{Action, HelpContent};
use crate::parse::context::ParseContext;
use crate::parse::grammar::Grammar;
use crate::parse::resolve::resolve;
use crate::parse::suggestion::ParseOutcome;
use crate::parse::token::{display_names, TokenPattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpArg {
    Verbose,
}

pub(crate) fn arguments() -> Vec<TokenPattern<HelpArg>> {
    vec![TokenPattern::flag(HelpArg::Verbose, "v", "verbose")]
}

/// Syntax line for every command, in root command order
const SYNTAX: [&str; 6] = [
    new_account::SYNTAX,
    list_account::SYNTAX,
    delete_account::SYNTAX,
    "help [--verbose]",
    "exit",
    "version",
];

pub(crate) fn parse(mut ctx: ParseContext<'_>, grammar: &Grammar) -> ParseOutcome {
    let table = &grammar.help;
    let mut verbose = false;
    let mut consumed = Consumed::new();

    loop {
        // Help takes no help flag of its own
        let next: Vec<_> = table
            .iter()
            .filter(|t| !consumed.contains(t.id()))
            .collect();

        let Some(token) = ctx.next_token() else {
            return ParseOutcome::complete(
                Action::Help(general_help(grammar, verbose)),
                display_names(next),
            );
        };

        let resolution = resolve(token, &next);
        let Some(matched) = resolution.exact else {
            return unmatched(token, &resolution.ranked);
        };

        match matched.id() {
            HelpArg::Verbose => {
                verbose = true;
                ctx.advance();
            }
        }
        consumed.insert(matched.id());
    }
}

fn general_help(grammar: &Grammar, verbose: bool) -> HelpContent {
    let help = HelpContent::new()
        .header("Budget Shell General Help")
        .rule('═')
        .paragraph("Available Commands")
        .list(display_names(grammar.commands()));

    if !verbose {
        return help.paragraph("Type `help --verbose` for syntax, or `<command> --help` for details.");
    }

    help.rule('-').header("Syntax").list(SYNTAX)
}
