//! Structured help text
//!
//! Help is built as a list of typed items so that each front-end can decide
//! how to draw headers, rules and lists.

use serde::{Deserialize, Serialize};

/// One block of help output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum HelpItem {
    Header(String),
    /// Horizontal rule drawn with the given character
    Rule(char),
    Paragraph(String),
    /// Bulleted list
    List(Vec<String>),
}

/// Help output for a command
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HelpContent {
    items: Vec<HelpItem>,
}

impl HelpContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, text: impl Into<String>) -> Self {
        self.items.push(HelpItem::Header(text.into()));
        self
    }

    pub fn rule(mut self, ch: char) -> Self {
        self.items.push(HelpItem::Rule(ch));
        self
    }

    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.items.push(HelpItem::Paragraph(text.into()));
        self
    }

    pub fn list<S: Into<String>>(mut self, entries: impl IntoIterator<Item = S>) -> Self {
        self.items
            .push(HelpItem::List(entries.into_iter().map(Into::into).collect()));
        self
    }

    pub fn items(&self) -> &[HelpItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
