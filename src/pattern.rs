/*!
 * Name pattern matching
 *
 * A bare pattern matches any name containing it. A pattern wrapped in the
 * strict delimiter (`^build^`) matches only the exact name `build`.
 */

/// Delimiter that marks a pattern as strict
pub const STRICT_DELIMITER: char = '^';

/// A parsed filter pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Exact equality with the delimiters stripped
    Strict(String),
    /// Substring containment
    Partial(String),
}

impl Pattern {
    /// Parse a raw pattern string
    pub fn parse(raw: &str) -> Self {
        if raw.len() >= 2 && raw.starts_with(STRICT_DELIMITER) && raw.ends_with(STRICT_DELIMITER) {
            let inner = &raw[STRICT_DELIMITER.len_utf8()..raw.len() - STRICT_DELIMITER.len_utf8()];
            Self::Strict(inner.to_string())
        } else {
            Self::Partial(raw.to_string())
        }
    }

    /// Check whether a name matches this pattern
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Strict(exact) => name == exact,
            Self::Partial(needle) => name.contains(needle.as_str()),
        }
    }
}

/// Check if a name matches a raw pattern string
pub fn pattern_matches(name: &str, pattern: &str) -> bool {
    Pattern::parse(pattern).matches(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse() {
        assert_eq!(Pattern::parse("^build^"), Pattern::Strict("build".into()));
        assert_eq!(Pattern::parse("build"), Pattern::Partial("build".into()));
        assert_eq!(Pattern::parse("^build"), Pattern::Partial("^build".into()));
        assert_eq!(Pattern::parse("^"), Pattern::Partial("^".into()));
        assert_eq!(Pattern::parse("^^"), Pattern::Strict(String::new()));
    }

    #[test]
    fn test_strict_vs_partial() {
        assert!(pattern_matches("build", "^build^"));
        assert!(!pattern_matches("build.rs", "^build^"));
        assert!(pattern_matches("build.rs", "build"));
        assert!(pattern_matches("prebuild", "build"));
        assert!(!pattern_matches("src", "build"));
    }

    #[test]
    fn test_empty_strict_matches_only_empty_name() {
        assert!(pattern_matches("", "^^"));
        assert!(!pattern_matches("a", "^^"));
    }

    #[test]
    fn test_empty_partial_matches_everything() {
        assert!(pattern_matches("anything", ""));
    }

    proptest! {
        #[test]
        fn strict_is_equality(name in "[a-z._]{0,6}", inner in "[a-z._]{0,6}") {
            let pattern = format!("^{}^", inner);
            prop_assert_eq!(pattern_matches(&name, &pattern), name == inner);
        }

        #[test]
        fn partial_is_containment(name in "[a-z._]{0,8}", needle in "[a-z._]{0,3}") {
            prop_assert_eq!(pattern_matches(&name, &needle), name.contains(&needle));
        }
    }
}
