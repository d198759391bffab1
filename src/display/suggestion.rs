//! Suggestion line shown after an incomplete or partial command

use crate::parse::AutoSuggestion;

/// Format suggestions as `next: a | b | c`, or nothing if there are none
pub fn format_suggestion(suggestion: &AutoSuggestion) -> Option<String> {
    if suggestion.next_args.is_empty() {
        return None;
    }

    Some(format!("next: {}", suggestion.next_args.join(" | ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_suggestion() {
        let suggestion =
            AutoSuggestion::invalid(vec!["<name>".to_string(), "--help".to_string()]);
        assert_eq!(
            format_suggestion(&suggestion).as_deref(),
            Some("next: <name> | --help")
        );
    }

    #[test]
    fn test_no_suggestions() {
        assert!(format_suggestion(&AutoSuggestion::valid(Vec::new())).is_none());
    }
}
