//! Command parsers
//!
//! Parsing a line is a walk down the grammar: the root dispatch matches the
//! command word, the noun dispatch matches what the command acts on, and a
//! leaf parser accumulates that command's arguments.
//!
//! Every step resolves the next token against the patterns still admissible
//! there. A step either consumes the token and carries on, or stops with the
//! ranked alternatives as suggestions.

pub mod bare;
pub mod delete_account;
pub mod help;
pub mod list_account;
pub mod new_account;

use super::context::ParseContext;
use super::grammar::{CommandId, Grammar, NounId};
use super::resolve::resolve;
use super::suggestion::{AutoSuggestion, ParseOutcome};
use super::token::{display_names, TokenPattern};
use crate::session::Session;
use bare::Bare;

/// Commands that act on a noun
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    New,
    List,
    Delete,
}

/// Dispatch a tokenized line on its command word
pub(crate) fn parse_root(tokens: &[String], grammar: &Grammar, session: &Session) -> ParseOutcome {
    let Some(first) = tokens.first() else {
        return ParseOutcome::invalid(display_names(grammar.commands()));
    };

    let candidates: Vec<_> = grammar.commands().iter().collect();
    let resolution = resolve(first, &candidates);
    let Some(command) = resolution.exact else {
        return unmatched(first, &resolution.ranked);
    };

    let ctx = ParseContext::new(tokens, session);
    match command.id() {
        CommandId::New => parse_noun(ctx, grammar, Verb::New),
        CommandId::List => parse_noun(ctx, grammar, Verb::List),
        CommandId::Delete => parse_noun(ctx, grammar, Verb::Delete),
        CommandId::Help => help::parse(ctx, grammar),
        CommandId::Exit => bare::parse(ctx, grammar, Bare::Exit),
        CommandId::Version => bare::parse(ctx, grammar, Bare::Version),
    }
}

fn parse_noun(mut ctx: ParseContext<'_>, grammar: &Grammar, verb: Verb) -> ParseOutcome {
    let candidates: Vec<_> = grammar.nouns().iter().collect();

    let Some(token) = ctx.next_token() else {
        return ParseOutcome::invalid(display_names(candidates));
    };

    let resolution = resolve(token, &candidates);
    let Some(noun) = resolution.exact else {
        return unmatched(token, &resolution.ranked);
    };
    ctx.advance();

    match (verb, noun.id()) {
        (Verb::New, NounId::Account) => new_account::parse(ctx, grammar),
        (Verb::List, NounId::Account) => list_account::parse(ctx, grammar),
        (Verb::Delete, NounId::Account) => delete_account::parse(ctx, grammar),
    }
}

/// Arguments a leaf parser has already consumed
#[derive(Debug)]
pub(crate) struct Consumed<I>(Vec<I>);

impl<I: Copy + PartialEq> Consumed<I> {
    pub(crate) fn new() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn insert(&mut self, id: I) {
        if !self.contains(id) {
            self.0.push(id);
        }
    }

    pub(crate) fn contains(&self, id: I) -> bool {
        self.0.contains(&id)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Patterns a leaf parser accepts next, in declaration order.
///
/// Arguments are offered until consumed. The help flag is offered only while
/// nothing has been consumed.
pub(crate) fn admissible<'g, I: Copy + PartialEq>(
    table: &'g [TokenPattern<I>],
    help: I,
    consumed: &Consumed<I>,
) -> Vec<&'g TokenPattern<I>> {
    table
        .iter()
        .filter(|t| {
            if t.id() == help {
                consumed.is_empty()
            } else {
                !consumed.contains(t.id())
            }
        })
        .collect()
}

/// Invalid outcome for a token that no admissible pattern matches.
///
/// Each candidate is suggested in the spelling closest to what was typed, so
/// a front end can complete the token in place.
pub(crate) fn unmatched<I: Copy>(typed: &str, ranked: &[&TokenPattern<I>]) -> ParseOutcome {
    ParseOutcome::invalid(
        ranked
            .iter()
            .map(|t| t.best_match(typed).to_string())
            .collect(),
    )
}

/// Consume an option token and return its value.
///
/// The value is the text after `=` when the token embeds one, otherwise the
/// following token. With no value available, the suggestion is the value
/// placeholder, e.g. `<STR>`.
pub(crate) fn take_value<'a, I: Copy>(
    ctx: &mut ParseContext<'a>,
    option: &TokenPattern<I>,
) -> Result<&'a str, AutoSuggestion> {
    let placeholder = || {
        let name = option
            .value_kind()
            .map(|kind| kind.placeholder())
            .unwrap_or_else(|| option.display_name().to_string());
        AutoSuggestion::invalid(vec![name])
    };

    let Some(token) = ctx.next_token() else {
        return Err(placeholder());
    };
    ctx.advance();

    if let Some((_, value)) = token.split_once('=') {
        if !value.is_empty() {
            return Ok(value);
        }
    }

    let value = ctx.next_token().ok_or_else(placeholder)?;
    ctx.advance();
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::parse::parse_expression;
    use crate::parse::token::ValueKind;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_empty_line_suggests_every_command() {
        let grammar = Grammar::new().unwrap();
        let session = Session::new(Settings::default());

        for line in ["", "   "] {
            let outcome = parse_expression(line, &grammar, &session);
            assert!(outcome.action.is_none());
            assert!(!outcome.is_valid());
            assert_eq!(
                outcome.suggestion.next_args,
                vec!["new", "list", "delete", "help", "exit", "version"]
            );
        }
    }

    #[test]
    fn test_unknown_command_suggests_every_command() {
        let grammar = Grammar::new().unwrap();
        let session = Session::new(Settings::default());

        let outcome = parse_expression("frobnicate", &grammar, &session);
        assert!(!outcome.is_valid());
        assert_eq!(outcome.suggestion.next_args.len(), 6);
    }

    #[test]
    fn test_partial_command() {
        let grammar = Grammar::new().unwrap();
        let session = Session::new(Settings::default());

        let outcome = parse_expression("ver", &grammar, &session);
        assert!(outcome.action.is_none());
        assert_eq!(outcome.suggestion.next_args, vec!["version"]);
    }

    #[test]
    fn test_partial_command_suggests_typed_spelling() {
        let grammar = Grammar::new().unwrap();
        let session = Session::new(Settings::default());

        let outcome = parse_expression("cre", &grammar, &session);
        assert_eq!(outcome.suggestion.next_args, vec!["create"]);

        let outcome = parse_expression("rem", &grammar, &session);
        assert_eq!(outcome.suggestion.next_args, vec!["remove"]);

        let outcome = parse_expression("new ac", &grammar, &session);
        assert_eq!(outcome.suggestion.next_args, vec!["account"]);

        let outcome = parse_expression("", &grammar, &session);
        assert_eq!(
            outcome.suggestion.next_args,
            vec!["new", "list", "delete", "help", "exit", "version"]
        );
    }

    #[test]
    fn test_missing_noun() {
        let grammar = Grammar::new().unwrap();
        let session = Session::new(Settings::default());

        let outcome = parse_expression("new", &grammar, &session);
        assert!(!outcome.is_valid());
        assert_eq!(outcome.suggestion.next_args, vec!["account"]);

        let outcome = parse_expression("list acc", &grammar, &session);
        assert!(!outcome.is_valid());
        assert_eq!(outcome.suggestion.next_args, vec!["account"]);
    }

    #[test]
    fn test_admissible() {
        let table = vec![
            TokenPattern::argument(0, "name", ValueKind::Name).unwrap(),
            TokenPattern::flag(1, "x", "extra"),
            TokenPattern::flag(2, "h", "help"),
        ];
        let mut consumed = Consumed::new();

        let names = display_names(admissible(&table, 2, &consumed));
        assert_eq!(names, vec!["<name>", "--extra", "--help"]);

        consumed.insert(1);
        let names = display_names(admissible(&table, 2, &consumed));
        assert_eq!(names, vec!["<name>"]);
    }

    #[test]
    fn test_take_value_embedded() {
        let session = Session::new(Settings::default());
        let option =
            TokenPattern::optional_argument((), "c", "category", ValueKind::Text).unwrap();
        let line = tokens(&["-c=Food", "next"]);
        let mut ctx = ParseContext::starting_at(&line, &session, 0);

        assert_eq!(take_value(&mut ctx, &option), Ok("Food"));
        assert_eq!(ctx.next_token(), Some("next"));
    }

    #[test]
    fn test_take_value_from_next_token() {
        let session = Session::new(Settings::default());
        let option =
            TokenPattern::optional_argument((), "c", "category", ValueKind::Text).unwrap();

        for first in ["-c", "-c="] {
            let line = tokens(&[first, "Food"]);
            let mut ctx = ParseContext::starting_at(&line, &session, 0);

            assert_eq!(take_value(&mut ctx, &option), Ok("Food"));
            assert_eq!(ctx.next_token(), None);
        }
    }

    #[test]
    fn test_take_value_missing() {
        let session = Session::new(Settings::default());
        let option =
            TokenPattern::optional_argument((), "b", "balance", ValueKind::Amount).unwrap();
        let line = tokens(&["--balance"]);
        let mut ctx = ParseContext::starting_at(&line, &session, 0);

        assert_eq!(
            take_value(&mut ctx, &option),
            Err(AutoSuggestion::invalid(vec!["<AMOUNT>".to_string()]))
        );
    }

    #[test]
    fn test_take_value_without_token() {
        let session = Session::new(Settings::default());
        let option = TokenPattern::flag((), "o", "option");
        let mut ctx = ParseContext::starting_at(&[], &session, 0);

        assert_eq!(
            take_value(&mut ctx, &option),
            Err(AutoSuggestion::invalid(vec!["--option".to_string()]))
        );
    }
}
