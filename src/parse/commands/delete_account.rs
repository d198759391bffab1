//! `delete account -n=<name> [--hard]`

use super::{admissible, take_value, unmatched, Consumed};
use crate::actions::{Action, DeleteAccount, HelpContent};
use crate::error::ShellResult;
use crate::parse::context::ParseContext;
use crate::parse::grammar::Grammar;
use crate::parse::resolve::resolve;
use crate::parse::suggestion::ParseOutcome;
use crate::parse::token::{display_names, TokenPattern, ValueKind};
use crate::parse::values::item_name_value;

pub(crate) const SYNTAX: &str = "delete account -n=<name> [--hard]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteAccountArg {
    Name,
    Hard,
    Help,
}

pub(crate) fn arguments() -> ShellResult<Vec<TokenPattern<DeleteAccountArg>>> {
    Ok(vec![
        TokenPattern::optional_argument(DeleteAccountArg::Name, "n", "name", ValueKind::Text)?,
        TokenPattern::flag(DeleteAccountArg::Hard, "d", "hard"),
        TokenPattern::flag(DeleteAccountArg::Help, "h", "help"),
    ])
}

pub(crate) fn parse(mut ctx: ParseContext<'_>, grammar: &Grammar) -> ParseOutcome {
    let table = &grammar.delete_account;
    let mut action = DeleteAccount::default();
    let mut consumed = Consumed::new();

    loop {
        let next = admissible(table, DeleteAccountArg::Help, &consumed);

        let Some(token) = ctx.next_token() else {
            let next_args = display_names(next);
            return if action.is_usable() {
                ParseOutcome::complete(Action::DeleteAccount(action), next_args)
            } else {
                ParseOutcome::invalid(next_args)
            };
        };

        let resolution = resolve(token, &next);
        let Some(matched) = resolution.exact else {
            return unmatched(token, &resolution.ranked);
        };

        match matched.id() {
            DeleteAccountArg::Name => match take_value(&mut ctx, matched) {
                Ok(value) => action.name = item_name_value(value),
                Err(suggestion) => return ParseOutcome::incomplete(suggestion),
            },
            DeleteAccountArg::Hard => {
                action.is_hard_delete = true;
                ctx.advance();
            }
            DeleteAccountArg::Help => return ParseOutcome::terminal(Action::Help(help())),
        }
        consumed.insert(matched.id());
    }
}

fn help() -> HelpContent {
    HelpContent::new()
        .header("Delete Account Command")
        .rule('═')
        .header("Description")
        .paragraph("Close an account. Closed accounts keep their history but are hidden from listings.")
        .rule('-')
        .header(format!("Syntax: {}", SYNTAX))
        .list([
            "-n, --name: name of the account to delete (required)",
            "-d, --hard: remove the account entirely instead of closing it",
        ])
}
