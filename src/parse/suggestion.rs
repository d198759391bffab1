//! Auto-suggestion results

use serde::Serialize;

use crate::actions::Action;

/// What the user may type next, and whether the line can run as it stands
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AutoSuggestion {
    pub is_valid_as_is: bool,
    /// Display names of admissible next tokens, best candidates first
    pub next_args: Vec<String>,
}

impl AutoSuggestion {
    pub fn valid(next_args: Vec<String>) -> Self {
        Self {
            is_valid_as_is: true,
            next_args,
        }
    }

    pub fn invalid(next_args: Vec<String>) -> Self {
        Self {
            is_valid_as_is: false,
            next_args,
        }
    }
}

/// Outcome of parsing one input line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOutcome {
    /// The action the line describes, when it is complete enough to run
    pub action: Option<Action>,
    pub suggestion: AutoSuggestion,
}

impl ParseOutcome {
    /// No runnable action yet
    pub fn invalid(next_args: Vec<String>) -> Self {
        Self::incomplete(AutoSuggestion::invalid(next_args))
    }

    pub fn incomplete(suggestion: AutoSuggestion) -> Self {
        Self {
            action: None,
            suggestion,
        }
    }

    /// A runnable action, possibly with further optional arguments
    pub fn complete(action: Action, next_args: Vec<String>) -> Self {
        Self {
            action: Some(action),
            suggestion: AutoSuggestion::valid(next_args),
        }
    }

    /// A runnable action that accepts nothing further
    pub fn terminal(action: Action) -> Self {
        Self::complete(action, Vec::new())
    }

    pub fn is_valid(&self) -> bool {
        self.suggestion.is_valid_as_is
    }
}
