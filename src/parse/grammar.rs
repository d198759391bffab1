//! Grammar tables
//!
//! Every token pattern the parsers match against, built once and shared by
//! reference.

use regex::Regex;

use super::commands::bare::{self, BareArg};
use super::commands::delete_account::{self, DeleteAccountArg};
use super::commands::help::{self, HelpArg};
use super::commands::list_account::{self, ListAccountArg};
use super::commands::new_account::{self, NewAccountArg};
use super::token::TokenPattern;
use super::values::amount_regex;
use crate::error::ShellResult;

/// Root command words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandId {
    New,
    List,
    Delete,
    Help,
    Exit,
    Version,
}

/// What a command acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NounId {
    Account,
}

#[derive(Debug)]
pub struct Grammar {
    commands: Vec<TokenPattern<CommandId>>,
    nouns: Vec<TokenPattern<NounId>>,
    pub(crate) new_account: Vec<TokenPattern<NewAccountArg>>,
    pub(crate) list_account: Vec<TokenPattern<ListAccountArg>>,
    pub(crate) delete_account: Vec<TokenPattern<DeleteAccountArg>>,
    pub(crate) help: Vec<TokenPattern<HelpArg>>,
    pub(crate) bare: Vec<TokenPattern<BareArg>>,
    /// Extracts the numeric part of amount values
    pub(crate) amount: Regex,
}

impl Grammar {
    pub fn new() -> ShellResult<Self> {
        Ok(Self {
            commands: vec![
                TokenPattern::literal(CommandId::New, &["new", "create", "add"]),
                TokenPattern::literal(CommandId::List, &["list", "ls"]),
                TokenPattern::literal(CommandId::Delete, &["delete", "del", "remove", "rm"]),
                TokenPattern::literal(CommandId::Help, &["help"]),
                TokenPattern::literal(CommandId::Exit, &["exit", "quit"]),
                TokenPattern::literal(CommandId::Version, &["version"]),
            ],
            nouns: vec![TokenPattern::literal(NounId::Account, &["account", "acct"])],
            new_account: new_account::arguments()?,
            list_account: list_account::arguments()?,
            delete_account: delete_account::arguments()?,
            help: help::arguments(),
            bare: bare::arguments(),
            amount: amount_regex()?,
        })
    }

    /// Root command patterns, in suggestion order
    pub fn commands(&self) -> &[TokenPattern<CommandId>] {
        &self.commands
    }

    pub fn nouns(&self) -> &[TokenPattern<NounId>] {
        &self.nouns
    }
}
