//! `new account <name> [-d=<description>] [-c=<category>] [-b=<balance>]`

use super::{admissible, take_value, unmatched, Consumed};
use crate::actions::{Action, CreateAccount, HelpContent};
use crate::error::ShellResult;
use crate::models::Money;
use crate::parse::context::ParseContext;
use crate::parse::grammar::Grammar;
use crate::parse::resolve::resolve;
use crate::parse::suggestion::ParseOutcome;
use crate::parse::token::{display_names, TokenPattern, ValueKind};
use crate::parse::values::{item_name_value, money_value};

pub(crate) const SYNTAX: &str =
    "new account <name> [-d=<description>] [-c=<category>] [-b=<starting-balance>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewAccountArg {
    Name,
    Description,
    Category,
    StartingBalance,
    Help,
}

pub(crate) fn arguments() -> ShellResult<Vec<TokenPattern<NewAccountArg>>> {
    Ok(vec![
        TokenPattern::argument(NewAccountArg::Name, "name", ValueKind::Name)?,
        TokenPattern::optional_argument(
            NewAccountArg::Description,
            "d",
            "description",
            ValueKind::Text,
        )?,
        TokenPattern::optional_argument(NewAccountArg::Category, "c", "category", ValueKind::Text)?,
        TokenPattern::optional_argument(
            NewAccountArg::StartingBalance,
            "b",
            "balance",
            ValueKind::Amount,
        )?,
        TokenPattern::flag(NewAccountArg::Help, "h", "help"),
    ])
}

pub(crate) fn parse(mut ctx: ParseContext<'_>, grammar: &Grammar) -> ParseOutcome {
    let table = &grammar.new_account;
    let mut action = CreateAccount::default();
    let mut consumed = Consumed::new();

    loop {
        let next = admissible(table, NewAccountArg::Help, &consumed);

        let Some(token) = ctx.next_token() else {
            let next_args = display_names(next);
            return if action.is_usable() {
                ParseOutcome::complete(Action::CreateAccount(action), next_args)
            } else {
                ParseOutcome::invalid(next_args)
            };
        };

        let resolution = resolve(token, &next);
        let Some(matched) = resolution.exact else {
            return unmatched(token, &resolution.ranked);
        };

        match matched.id() {
            NewAccountArg::Name => {
                action.name = item_name_value(token);
                ctx.advance();
            }
            NewAccountArg::Description => match take_value(&mut ctx, matched) {
                Ok(value) => action.description = item_name_value(value),
                Err(suggestion) => return ParseOutcome::incomplete(suggestion),
            },
            NewAccountArg::Category => match take_value(&mut ctx, matched) {
                Ok(value) => action.category_name = item_name_value(value),
                Err(suggestion) => return ParseOutcome::incomplete(suggestion),
            },
            NewAccountArg::StartingBalance => match take_value(&mut ctx, matched) {
                Ok(value) => action.starting_balance = money_value(value, &grammar.amount),
                Err(suggestion) => return ParseOutcome::incomplete(suggestion),
            },
            NewAccountArg::Help => return ParseOutcome::terminal(Action::Help(help(&ctx))),
        }
        consumed.insert(matched.id());
    }
}

fn help(ctx: &ParseContext<'_>) -> HelpContent {
    let settings = ctx.session().settings();
    let example = Money::from_cents(25_000).format_with(&settings.currency_symbol, "");

    HelpContent::new()
        .header("Create New Account Command")
        .rule('═')
        .header("Description")
        .paragraph("Create a new account, optionally filed under a category.")
        .rule('-')
        .header(format!("Syntax: {}", SYNTAX))
        .list([
            "<name>: name of the new account (required)".to_string(),
            "-d, --description: free-text description".to_string(),
            "-c, --category: category to file the account under, created if new".to_string(),
            format!("-b, --balance: starting balance, e.g. {}", example),
        ])
        .rule('-')
        .paragraph(format!(
            "Example: new account \"Rainy Day\" -c=Savings -b={}",
            example
        ))
}

#[cfg(test)]
mod tests {
    use crate::actions::{Action, CreateAccount};
    use crate::config::Settings;
    use crate::models::Money;
    use crate::parse::{parse_expression, Grammar, ParseOutcome};
    use crate::session::Session;

    fn parse(line: &str) -> ParseOutcome {
        let grammar = Grammar::new().unwrap();
        let session = Session::new(Settings::default());
        parse_expression(line, &grammar, &session)
    }

    fn created(outcome: &ParseOutcome) -> &CreateAccount {
        match &outcome.action {
            Some(Action::CreateAccount(action)) => action,
            other => panic!("expected create action, got {:?}", other),
        }
    }

    #[test]
    fn test_name_required() {
        let outcome = parse("new account");

        assert!(outcome.action.is_none());
        assert!(!outcome.is_valid());
        assert_eq!(
            outcome.suggestion.next_args,
            vec![
                "<name>",
                "--description=<STR>",
                "--category=<STR>",
                "--balance=<AMOUNT>",
                "--help"
            ]
        );
    }

    #[test]
    fn test_name_only() {
        let outcome = parse("new account Groceries");

        assert!(outcome.is_valid());
        assert_eq!(
            created(&outcome),
            &CreateAccount {
                name: "Groceries".into(),
                description: String::new(),
                category_name: String::new(),
                starting_balance: Money::zero(),
            }
        );
        assert_eq!(
            outcome.suggestion.next_args,
            vec![
                "--description=<STR>",
                "--category=<STR>",
                "--balance=<AMOUNT>"
            ]
        );
    }

    #[test]
    fn test_plain_balance() {
        let outcome = parse("new account Groceries -b=123.45");

        assert!(outcome.is_valid());
        assert_eq!(created(&outcome).starting_balance, Money::from_cents(12345));
    }

    #[test]
    fn test_all_arguments() {
        let outcome = parse(
            r#"new account "My Savings" -d='rainy day fund' --category="Long Term" -b=$123.45"#,
        );

        assert!(outcome.is_valid());
        assert!(outcome.suggestion.next_args.is_empty());
        assert_eq!(
            created(&outcome),
            &CreateAccount {
                name: "My Savings".into(),
                description: "rainy day fund".into(),
                category_name: "Long Term".into(),
                starting_balance: Money::from_cents(12345),
            }
        );
    }

    #[test]
    fn test_value_as_next_token() {
        let outcome = parse("create acct Checking --balance 50 -c Bank");

        let action = created(&outcome);
        assert_eq!(action.starting_balance, Money::from_cents(5000));
        assert_eq!(action.category_name, "Bank");
        assert_eq!(
            outcome.suggestion.next_args,
            vec!["--description=<STR>"]
        );
    }

    #[test]
    fn test_unparseable_amount_is_zero() {
        let outcome = parse("new account Checking -b lots");

        assert!(outcome.is_valid());
        assert_eq!(created(&outcome).starting_balance, Money::zero());
    }

    #[test]
    fn test_missing_value() {
        let outcome = parse("new account name -d=");
        assert!(outcome.action.is_none());
        assert!(!outcome.is_valid());
        assert_eq!(outcome.suggestion.next_args, vec!["<STR>"]);

        let outcome = parse("new account name -b");
        assert_eq!(outcome.suggestion.next_args, vec!["<AMOUNT>"]);
    }

    #[test]
    fn test_help_only_before_arguments() {
        let outcome = parse("new account --help");
        assert!(outcome.is_valid());
        assert!(outcome.suggestion.next_args.is_empty());
        assert!(matches!(outcome.action, Some(Action::Help(_))));

        let outcome = parse("new account Groceries --help");
        assert!(outcome.action.is_none());
        assert!(!outcome.is_valid());
        assert!(!outcome.suggestion.next_args.contains(&"--help".to_string()));
    }

    #[test]
    fn test_help_ignores_remaining_tokens() {
        let outcome = parse("new account -h these are ignored");
        assert!(matches!(outcome.action, Some(Action::Help(_))));
    }

    #[test]
    fn test_argument_not_repeated() {
        let outcome = parse("new account Checking -d one -d two");

        assert!(outcome.action.is_none());
        assert_eq!(outcome.suggestion.next_args, vec!["-c", "-b"]);
    }

    #[test]
    fn test_partial_flag() {
        let outcome = parse("new account Checking --cat");

        assert!(outcome.action.is_none());
        assert_eq!(
            outcome.suggestion.next_args,
            vec!["--description", "--balance", "--category"]
        );

        let outcome = parse("new account Checking -c=Food -d");
        assert_eq!(outcome.suggestion.next_args, vec!["<STR>"]);
    }
}
