/// Hostname matching for the three replace modes
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How the `from` pattern is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    #[default]
    Exact,
    Wildcard,
    Regexp,
}

impl MatchMode {
    pub const ALL: [MatchMode; 3] = [MatchMode::Exact, MatchMode::Wildcard, MatchMode::Regexp];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::Exact => "exact",
            MatchMode::Wildcard => "wildcard",
            MatchMode::Regexp => "regexp",
        }
    }

    pub fn parse(value: &str) -> Option<MatchMode> {
        MatchMode::ALL.into_iter().find(|mode| mode.as_str() == value)
    }
}

/// A compiled hostname predicate
///
/// Built once per run from `(pattern, mode)`; matching never fails.
#[derive(Debug, Clone)]
pub enum Matcher {
    Never,
    Exact(String),
    Contains(String),
    EndsWith(String),
    StartsWith(String),
    Regex(Regex),
}

impl Matcher {
    /// Compile a predicate. Only `regexp` mode can fail, and it fails here
    /// rather than per hostname.
    pub fn new(pattern: &str, mode: MatchMode) -> Result<Matcher> {
        if pattern.is_empty() {
            return Ok(Matcher::Never);
        }

        let matcher = match mode {
            MatchMode::Exact => Matcher::Exact(pattern.to_string()),
            MatchMode::Wildcard => wildcard(pattern),
            MatchMode::Regexp => Matcher::Regex(Regex::new(pattern)?),
        };

        Ok(matcher)
    }

    pub fn matches(&self, hostname: &str) -> bool {
        match self {
            Matcher::Never => false,
            Matcher::Exact(pattern) => hostname == pattern,
            Matcher::Contains(mid) => hostname.contains(mid.as_str()),
            Matcher::EndsWith(tail) => hostname.ends_with(tail.as_str()),
            Matcher::StartsWith(head) => hostname.starts_with(head.as_str()),
            Matcher::Regex(re) => re.is_match(hostname),
        }
    }
}

// '*' is only special as the first and/or last character
fn wildcard(pattern: &str) -> Matcher {
    let leading = pattern.starts_with('*');
    let trailing = pattern.ends_with('*');

    match (leading, trailing) {
        (true, true) => {
            // a lone "*" leaves an empty middle, which every hostname contains
            let mid = if pattern.len() >= 2 { &pattern[1..pattern.len() - 1] } else { "" };
            Matcher::Contains(mid.to_string())
        }
        (true, false) => Matcher::EndsWith(pattern[1..].to_string()),
        (false, true) => Matcher::StartsWith(pattern[..pattern.len() - 1].to_string()),
        (false, false) => Matcher::Exact(pattern.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(host: &str, pattern: &str, mode: MatchMode) -> bool {
        Matcher::new(pattern, mode).unwrap().matches(host)
    }

    #[test]
    fn test_exact_is_plain_equality() {
        assert!(matches("old.example.com", "old.example.com", MatchMode::Exact));
        assert!(!matches("www.old.example.com", "old.example.com", MatchMode::Exact));
        assert!(!matches("OLD.example.com", "old.example.com", MatchMode::Exact));
    }

    #[test]
    fn test_exact_does_not_expand_stars() {
        assert!(!matches("foo.test.com", "*.test.com", MatchMode::Exact));
        assert!(matches("*.test.com", "*.test.com", MatchMode::Exact));
    }

    #[test]
    fn test_empty_pattern_never_matches() {
        for mode in MatchMode::ALL {
            let matcher = Matcher::new("", mode).unwrap();
            assert!(!matcher.matches(""));
            assert!(!matcher.matches("example.com"));
        }
    }

    #[test]
    fn test_wildcard_contains() {
        assert!(matches("api.example.com", "*example*", MatchMode::Wildcard));
        assert!(matches("example", "*example*", MatchMode::Wildcard));
        assert!(!matches("exampl.com", "*example*", MatchMode::Wildcard));
    }

    #[test]
    fn test_wildcard_suffix_is_literal() {
        assert!(matches("foo.test.com", "*.test.com", MatchMode::Wildcard));
        assert!(!matches("bar.test.org", "*.test.com", MatchMode::Wildcard));
        assert!(!matches("footest.com", "*.test.com", MatchMode::Wildcard));
        // no dot boundary: "*test.com" also catches "footest.com"
        assert!(matches("footest.com", "*test.com", MatchMode::Wildcard));
    }

    #[test]
    fn test_wildcard_prefix() {
        assert!(matches("intranet.corp", "intranet*", MatchMode::Wildcard));
        assert!(!matches("old-intranet.corp", "intranet*", MatchMode::Wildcard));
    }

    #[test]
    fn test_wildcard_without_star_is_exact() {
        assert!(matches("example.com", "example.com", MatchMode::Wildcard));
        assert!(!matches("www.example.com", "example.com", MatchMode::Wildcard));
    }

    #[test]
    fn test_wildcard_interior_star_is_literal() {
        assert!(!matches("foo.example.com", "foo.*.com", MatchMode::Wildcard));
        assert!(matches("foo.*.com", "foo.*.com", MatchMode::Wildcard));
    }

    #[test]
    fn test_lone_star_matches_everything() {
        assert!(matches("example.com", "*", MatchMode::Wildcard));
        assert!(matches("", "*", MatchMode::Wildcard));
        assert!(matches("example.com", "**", MatchMode::Wildcard));
    }

    #[test]
    fn test_regexp_is_unanchored() {
        assert!(matches("foo.test.com", r"^(foo|bar)\.test\.", MatchMode::Regexp));
        assert!(!matches("baz.test.com", r"^(foo|bar)\.test\.", MatchMode::Regexp));
        assert!(matches("a.b.example.org", r"example", MatchMode::Regexp));
    }

    #[test]
    fn test_invalid_regexp_fails_at_construction() {
        let result = Matcher::new("(unclosed", MatchMode::Regexp);
        assert!(matches!(result, Err(crate::error::ReplaceError::Pattern(_))));
    }

    #[test]
    fn test_invalid_regexp_is_fine_in_other_modes() {
        assert!(Matcher::new("(unclosed", MatchMode::Exact).is_ok());
        assert!(Matcher::new("(unclosed*", MatchMode::Wildcard).is_ok());
    }

    #[test]
    fn test_same_input_gives_same_predicate() {
        let a = Matcher::new("*.example.com", MatchMode::Wildcard).unwrap();
        let b = Matcher::new("*.example.com", MatchMode::Wildcard).unwrap();
        for host in ["a.example.com", "example.com", "b.example.org", ""] {
            assert_eq!(a.matches(host), b.matches(host));
        }
    }

    #[test]
    fn test_mode_serialization() {
        assert_eq!(serde_json::to_string(&MatchMode::Regexp).unwrap(), "\"regexp\"");
        let mode: MatchMode = serde_json::from_str("\"wildcard\"").unwrap();
        assert_eq!(mode, MatchMode::Wildcard);
        assert!(serde_json::from_str::<MatchMode>("\"glob\"").is_err());
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(MatchMode::parse("exact"), Some(MatchMode::Exact));
        assert_eq!(MatchMode::parse("regexp"), Some(MatchMode::Regexp));
        assert_eq!(MatchMode::parse("Exact"), None);
    }
}
