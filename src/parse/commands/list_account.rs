//! `list account [filters...]`

use super::{admissible, take_value, unmatched, Consumed};
use crate::actions::{Action, HelpContent, ListAccounts};
use crate::error::ShellResult;
use crate::parse::context::ParseContext;
use crate::parse::grammar::Grammar;
use crate::parse::resolve::resolve;
use crate::parse::suggestion::ParseOutcome;
use crate::parse::token::{display_names, TokenPattern, ValueKind};
use crate::parse::values::{item_name_value, money_value};

pub(crate) const SYNTAX: &str = "list account [-n=<name>] [-d=<description>] [-c=<category>] [-m=<min-balance>] [-x=<max-balance>] [--all]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAccountArg {
    Name,
    Description,
    Category,
    MinBalance,
    MaxBalance,
    All,
    Help,
}

pub(crate) fn arguments() -> ShellResult<Vec<TokenPattern<ListAccountArg>>> {
    Ok(vec![
        TokenPattern::optional_argument(ListAccountArg::Name, "n", "name", ValueKind::Text)?,
        TokenPattern::optional_argument(
            ListAccountArg::Description,
            "d",
            "description",
            ValueKind::Text,
        )?,
        TokenPattern::optional_argument(ListAccountArg::Category, "c", "category", ValueKind::Text)?,
        TokenPattern::optional_argument(
            ListAccountArg::MinBalance,
            "m",
            "min-balance",
            ValueKind::Amount,
        )?,
        TokenPattern::optional_argument(
            ListAccountArg::MaxBalance,
            "x",
            "max-balance",
            ValueKind::Amount,
        )?,
        TokenPattern::flag(ListAccountArg::All, "a", "all"),
        TokenPattern::flag(ListAccountArg::Help, "h", "help"),
    ])
}

/// Every filter is optional, so any prefix of a well-formed line can run.
pub(crate) fn parse(mut ctx: ParseContext<'_>, grammar: &Grammar) -> ParseOutcome {
    let table = &grammar.list_account;
    let mut action = ListAccounts::default();
    let mut consumed = Consumed::new();

    loop {
        let next = admissible(table, ListAccountArg::Help, &consumed);

        let Some(token) = ctx.next_token() else {
            return ParseOutcome::complete(Action::ListAccounts(action), display_names(next));
        };

        let resolution = resolve(token, &next);
        let Some(matched) = resolution.exact else {
            return unmatched(token, &resolution.ranked);
        };

        match matched.id() {
            ListAccountArg::Name => match take_value(&mut ctx, matched) {
                Ok(value) => action.name = item_name_value(value),
                Err(suggestion) => return ParseOutcome::incomplete(suggestion),
            },
            ListAccountArg::Description => match take_value(&mut ctx, matched) {
                Ok(value) => action.description = item_name_value(value),
                Err(suggestion) => return ParseOutcome::incomplete(suggestion),
            },
            ListAccountArg::Category => match take_value(&mut ctx, matched) {
                Ok(value) => action.category_name = item_name_value(value),
                Err(suggestion) => return ParseOutcome::incomplete(suggestion),
            },
            ListAccountArg::MinBalance => match take_value(&mut ctx, matched) {
                Ok(value) => action.min_balance = Some(money_value(value, &grammar.amount)),
                Err(suggestion) => return ParseOutcome::incomplete(suggestion),
            },
            ListAccountArg::MaxBalance => match take_value(&mut ctx, matched) {
                Ok(value) => action.max_balance = Some(money_value(value, &grammar.amount)),
                Err(suggestion) => return ParseOutcome::incomplete(suggestion),
            },
            ListAccountArg::All => {
                action.include_closed = true;
                ctx.advance();
            }
            ListAccountArg::Help => return ParseOutcome::terminal(Action::Help(help())),
        }
        consumed.insert(matched.id());
    }
}

fn help() -> HelpContent {
    HelpContent::new()
        .header("List Accounts Command")
        .rule('═')
        .header("Description")
        .paragraph("List open accounts, optionally filtered. Text filters match any part of the field, ignoring case.")
        .rule('-')
        .header(format!("Syntax: {}", SYNTAX))
        .list([
            "-n, --name: account name contains text",
            "-d, --description: description contains text",
            "-c, --category: category name contains text",
            "-m, --min-balance: balance is at least this amount",
            "-x, --max-balance: balance is at most this amount",
            "-a, --all: include closed accounts",
        ])
}
