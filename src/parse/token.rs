//! Token patterns
//!
//! A [`TokenPattern`] describes one word the grammar accepts at some position:
//! a command keyword, a noun, a flag, a positional value or an option that
//! carries a value. Each pattern has one or more [`Rule`]s; a typed token
//! matches the pattern when any rule matches it fully.

use regex::Regex;

use super::resolve::shared_prefix_len;
use super::values::AMOUNT_PATTERN;
use crate::error::ShellResult;

/// Kind of value a positional argument or option accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// An item name such as an account or category name
    Name,
    /// Free text
    Text,
    /// A money amount
    Amount,
}

impl ValueKind {
    /// Tag shown in display names and placeholders
    pub fn tag(self) -> &'static str {
        match self {
            Self::Name => "NAME",
            Self::Text => "STR",
            Self::Amount => "AMOUNT",
        }
    }

    /// Unanchored regex source for values of this kind
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Name => r"[A-Za-z0-9][\w .&'-]*",
            Self::Text => r".+",
            Self::Amount => AMOUNT_PATTERN,
        }
    }

    /// Placeholder suggested while the value is still missing, e.g. `<STR>`
    pub fn placeholder(self) -> String {
        format!("<{}>", self.tag())
    }
}

/// One way of spelling a token
#[derive(Debug, Clone)]
pub enum Rule {
    /// Exact keyword, compared case-insensitively
    Literal(String),
    /// Anchored regex, with the literal text every match starts with
    Pattern { prefix: String, regex: Regex },
}

impl Rule {
    /// Literal text every match of this rule starts with
    pub fn literal_prefix(&self) -> &str {
        match self {
            Self::Literal(text) => text,
            Self::Pattern { prefix, .. } => prefix,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// Whether `candidate` matches this rule in its entirety
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Self::Literal(text) => text.eq_ignore_ascii_case(candidate),
            Self::Pattern { regex, .. } => regex.is_match(candidate),
        }
    }
}

/// A recognizable token kind, identified by a per-table id
#[derive(Debug, Clone)]
pub struct TokenPattern<I> {
    id: I,
    display_name: String,
    rules: Vec<Rule>,
    value: Option<ValueKind>,
}

impl<I: Copy> TokenPattern<I> {
    /// A keyword with one or more spellings. The first spelling is displayed.
    pub fn literal(id: I, spellings: &[&str]) -> Self {
        Self {
            id,
            display_name: spellings.first().copied().unwrap_or_default().to_string(),
            rules: spellings
                .iter()
                .map(|s| Rule::Literal(s.to_string()))
                .collect(),
            value: None,
        }
    }

    /// A boolean switch spelled `-<short>` or `--<long>`
    pub fn flag(id: I, short: &str, long: &str) -> Self {
        Self {
            id,
            display_name: format!("--{}", long),
            rules: vec![
                Rule::Literal(format!("-{}", short)),
                Rule::Literal(format!("--{}", long)),
            ],
            value: None,
        }
    }

    /// A positional value, displayed as `<label>` with words joined by dashes
    pub fn argument(id: I, label: &str, kind: ValueKind) -> ShellResult<Self> {
        let regex = Regex::new(&format!("^(?:{})$", kind.pattern()))?;

        Ok(Self {
            id,
            display_name: argument_display_name(label),
            rules: vec![Rule::Pattern {
                prefix: String::new(),
                regex,
            }],
            value: Some(kind),
        })
    }

    /// An option carrying a value.
    ///
    /// Accepts `-<short>` and `--<long>`, each optionally followed by `=` and
    /// a value of the given kind. The value may also arrive as the next token.
    pub fn optional_argument(id: I, short: &str, long: &str, kind: ValueKind) -> ShellResult<Self> {
        let rules = [format!("-{}", short), format!("--{}", long)]
            .into_iter()
            .map(|prefix| {
                let source = format!(
                    "^(?i:{})(?:=(?:{})?)?$",
                    regex::escape(&prefix),
                    kind.pattern()
                );
                Ok(Rule::Pattern {
                    regex: Regex::new(&source)?,
                    prefix,
                })
            })
            .collect::<ShellResult<Vec<_>>>()?;

        Ok(Self {
            id,
            display_name: format!("--{}={}", long, kind.placeholder()),
            rules,
            value: Some(kind),
        })
    }

    pub fn id(&self) -> I {
        self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Kind of value this pattern carries, if any
    pub fn value_kind(&self) -> Option<ValueKind> {
        self.value
    }

    /// Whether `candidate` fully matches any of the rules
    pub fn matches(&self, candidate: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(candidate))
    }

    /// Spelling of this pattern closest to `typed`, for inline completion.
    ///
    /// The literal prefix sharing the most leading characters with `typed`
    /// wins, earlier rules first on ties. With nothing shared, the display
    /// name is used.
    pub fn best_match(&self, typed: &str) -> &str {
        let mut best = &self.display_name[..];
        let mut best_len = 0;

        for prefix in self.rules.iter().map(Rule::literal_prefix) {
            let shared = shared_prefix_len(typed, prefix);
            if shared > best_len {
                best = prefix;
                best_len = shared;
            }
        }

        best
    }

    /// Literal prefixes of every rule, in declaration order
    pub fn literal_prefixes(&self) -> Vec<&str> {
        self.rules.iter().map(Rule::literal_prefix).collect()
    }

    /// Longest prefix shared by every rule's literal prefix
    pub fn literal_prefix(&self) -> &str {
        let mut prefixes = self.rules.iter().map(Rule::literal_prefix);
        let Some(first) = prefixes.next() else {
            return "";
        };

        prefixes.fold(first, |common, next| {
            let shared = common
                .char_indices()
                .zip(next.chars())
                .take_while(|((_, a), b)| a == b)
                .last()
                .map(|((i, a), _)| i + a.len_utf8())
                .unwrap_or(0);
            &common[..shared]
        })
    }
}

/// Display names of a sequence of patterns, in order
pub fn display_names<'g, I: Copy + 'g>(
    patterns: impl IntoIterator<Item = &'g TokenPattern<I>>,
) -> Vec<String> {
    patterns
        .into_iter()
        .map(|p| p.display_name().to_string())
        .collect()
}

fn argument_display_name(label: &str) -> String {
    let words: Vec<&str> = label
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    format!("<{}>", words.join("-"))
}
