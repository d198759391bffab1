//! Matching a typed token against the admissible token patterns
//!
//! Resolution produces the exact match, if any, together with the candidates
//! the typed text could still become. Candidates are ranked by how much of
//! their literal prefix the typed text already shares, fewest first; ties keep
//! declaration order.

use super::token::{Rule, TokenPattern};

/// Result of resolving one typed token
#[derive(Debug)]
pub struct Resolution<'g, I> {
    /// First candidate that matches the typed text completely
    pub exact: Option<&'g TokenPattern<I>>,
    /// Candidates the typed text could be completed to
    pub ranked: Vec<&'g TokenPattern<I>>,
}

/// Resolve `typed` against `candidates`.
///
/// When no candidate is compatible with the typed text, `ranked` holds every
/// candidate in declaration order. This also covers empty input.
pub fn resolve<'g, I: Copy>(typed: &str, candidates: &[&'g TokenPattern<I>]) -> Resolution<'g, I> {
    let mut exact = None;
    let mut scored = Vec::new();

    for &candidate in candidates {
        if exact.is_none() && candidate.matches(typed) {
            exact = Some(candidate);
        }

        let score = candidate
            .rules()
            .iter()
            .filter_map(|rule| completion_score(rule, typed))
            .max();
        if let Some(score) = score {
            scored.push((score, candidate));
        }
    }

    let ranked = if scored.is_empty() {
        candidates.to_vec()
    } else {
        scored.sort_by_key(|(score, _)| *score);
        scored.into_iter().map(|(_, candidate)| candidate).collect()
    };

    Resolution { exact, ranked }
}

/// Number of leading bytes two strings share, ignoring ASCII case
pub fn shared_prefix_len(a: &str, b: &str) -> usize {
    a.bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x.eq_ignore_ascii_case(y))
        .count()
}

/// How well `typed` fits `rule` as a partial entry, or `None` if it cannot
fn completion_score(rule: &Rule, typed: &str) -> Option<usize> {
    let prefix = rule.literal_prefix();

    // Positional values have no literal part to complete
    if prefix.is_empty() {
        return rule.matches(typed).then_some(0);
    }

    let shared = shared_prefix_len(typed, prefix);
    (shared > 0).then_some(shared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::token::{display_names, ValueKind};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Word {
        New,
        List,
        Delete,
        Help,
    }

    fn roots() -> Vec<TokenPattern<Word>> {
        vec![
            TokenPattern::literal(Word::New, &["new", "create", "add"]),
            TokenPattern::literal(Word::List, &["list", "ls"]),
            TokenPattern::literal(Word::Delete, &["delete", "del", "remove", "rm"]),
            TokenPattern::literal(Word::Help, &["help"]),
        ]
    }

    #[test]
    fn test_shared_prefix_len() {
        assert_eq!(shared_prefix_len("hel", "help"), 3);
        assert_eq!(shared_prefix_len("HEL", "help"), 3);
        assert_eq!(shared_prefix_len("x", "help"), 0);
        assert_eq!(shared_prefix_len("", "help"), 0);
    }

    #[test]
    fn test_exact_match() {
        let table = roots();
        let candidates: Vec<_> = table.iter().collect();

        let resolution = resolve("rm", &candidates);
        assert_eq!(resolution.exact.map(|t| t.id()), Some(Word::Delete));

        let resolution = resolve("LIST", &candidates);
        assert_eq!(resolution.exact.map(|t| t.id()), Some(Word::List));
    }

    #[test]
    fn test_partial_match() {
        let table = roots();
        let candidates: Vec<_> = table.iter().collect();

        let resolution = resolve("hel", &candidates);
        assert!(resolution.exact.is_none());
        assert_eq!(display_names(resolution.ranked), vec!["help"]);

        let resolution = resolve("l", &candidates);
        assert_eq!(display_names(resolution.ranked), vec!["list"]);
    }

    #[test]
    fn test_overtyped_literal_still_ranked() {
        let table = roots();
        let candidates: Vec<_> = table.iter().collect();

        let resolution = resolve("helpme", &candidates);
        assert!(resolution.exact.is_none());
        assert_eq!(display_names(resolution.ranked), vec!["help"]);
    }

    #[test]
    fn test_exact_among_similar_literals() {
        let table = vec![
            TokenPattern::literal(1, &["fun"]),
            TokenPattern::literal(2, &["fan"]),
            TokenPattern::literal(3, &["fact"]),
            TokenPattern::optional_argument(4, "a", "arg", ValueKind::Text).unwrap(),
        ];
        let candidates: Vec<_> = table.iter().collect();

        let resolution = resolve("fact", &candidates);
        assert_eq!(resolution.exact.map(|t| t.id()), Some(3));

        let ranked: Vec<i32> = resolution.ranked.iter().map(|t| t.id()).collect();
        assert_eq!(ranked, vec![1, 2, 3]);
    }

    #[test]
    fn test_flag_listed_once() {
        let table = vec![TokenPattern::flag(1, "t", "test")];
        let candidates: Vec<_> = table.iter().collect();

        let resolution = resolve("--te", &candidates);
        assert!(resolution.exact.is_none());
        assert_eq!(display_names(resolution.ranked), vec!["--test"]);
    }

    #[test]
    fn test_unrecognized_returns_full_set() {
        let table = roots();
        let candidates: Vec<_> = table.iter().collect();

        for typed in ["xyz", ""] {
            let resolution = resolve(typed, &candidates);
            assert!(resolution.exact.is_none());
            assert_eq!(resolution.ranked.len(), table.len());
        }
    }

    #[test]
    fn test_ranked_ascending_by_shared_length() {
        let table = vec![
            TokenPattern::optional_argument(0, "d", "description", ValueKind::Text).unwrap(),
            TokenPattern::flag(1, "x", "hard"),
            TokenPattern::flag(2, "h", "help"),
        ];
        let candidates: Vec<_> = table.iter().collect();

        let resolution = resolve("--h", &candidates);
        assert!(resolution.exact.is_none());
        assert_eq!(
            display_names(resolution.ranked),
            vec!["--description=<STR>", "--hard", "--help"]
        );
    }

    #[test]
    fn test_positional_values() {
        let table = vec![
            TokenPattern::argument(0, "name", ValueKind::Name).unwrap(),
            TokenPattern::optional_argument(1, "c", "category", ValueKind::Name).unwrap(),
        ];
        let candidates: Vec<_> = table.iter().collect();

        let resolution = resolve("Groceries", &candidates);
        assert_eq!(resolution.exact.map(|t| t.id()), Some(0));
        assert_eq!(display_names(resolution.ranked), vec!["<name>"]);

        let resolution = resolve("--category=Fo", &candidates);
        assert_eq!(resolution.exact.map(|t| t.id()), Some(1));
    }

    #[test]
    fn test_exact_match_is_ranked() {
        let table = roots();
        let candidates: Vec<_> = table.iter().collect();

        for spelling in ["new", "create", "add", "ls", "del", "help"] {
            let resolution = resolve(spelling, &candidates);
            let exact = resolution.exact.unwrap();
            assert!(resolution.ranked.iter().any(|t| t.id() == exact.id()));
        }
    }
}
