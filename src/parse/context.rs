//! Cursor over the tokens of one input line

use crate::session::Session;

/// Parsing state shared by every command parser.
///
/// The cursor starts at 1 because the root command word has been consumed by
/// the time any command-specific parser runs.
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    tokens: &'a [String],
    cursor: usize,
    session: &'a Session,
}

impl<'a> ParseContext<'a> {
    pub fn new(tokens: &'a [String], session: &'a Session) -> Self {
        Self::starting_at(tokens, session, 1)
    }

    /// A context whose cursor sits on `cursor`
    pub fn starting_at(tokens: &'a [String], session: &'a Session, cursor: usize) -> Self {
        Self {
            tokens,
            cursor,
            session,
        }
    }

    /// The token under the cursor, or `None` at end of input
    pub fn next_token(&self) -> Option<&'a str> {
        self.tokens.get(self.cursor).map(String::as_str)
    }

    /// Move past the token under the cursor
    pub fn advance(&mut self) {
        self.cursor += 1;
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn tokens(&self) -> &'a [String] {
        self.tokens
    }

    pub fn session(&self) -> &'a Session {
        self.session
    }
}
