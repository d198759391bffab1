//! Quote-aware word splitting
//!
//! Input is split on whitespace. A span opened by `"` or `'` runs to the
//! matching quote and is kept whole, whitespace included, with the quote
//! characters removed. Quoted spans glue onto adjacent unquoted text, so
//! `-d='two words'` is the single token `-d=two words`.
//!
//! Escaped quotes are not supported. A quote left open at the end of the line
//! captures the rest of the line, which keeps suggestions working while the
//! user is still typing the closing quote.

/// Split a raw input line into tokens
pub fn tokenize(line: &str) -> Vec<String> {
    Tokenizer::new(line).collect()
}

struct Tokenizer<'a> {
    input: &'a str,
    /// Byte index of the next unread character
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn skip_blanks(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    /// Reads a quoted span. The cursor must sit on the opening quote.
    fn parse_quoted(&mut self, quote: char) -> &'a str {
        self.pos += quote.len_utf8();
        let rest = &self.input[self.pos..];

        match rest.find(quote) {
            Some(offset) => {
                self.pos += offset + quote.len_utf8();
                &rest[..offset]
            }
            None => {
                self.pos = self.input.len();
                rest
            }
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.skip_blanks();
        self.peek()?;

        let mut token = String::new();
        while let Some(ch) = self.peek() {
            match ch {
                c if c.is_whitespace() => break,
                '"' | '\'' => {
                    let quoted = self.parse_quoted(ch);
                    token.push_str(quoted);
                }
                _ => {
                    token.push(ch);
                    self.pos += ch.len_utf8();
                }
            }
        }

        Some(token)
    }
}
