//! String content checks
//!
//! Checks comparing the text against a caller-supplied string or pattern.

use regex::Regex;

use crate::foundation::StatusCode;

// ============================================================================
// EQUAL
// ============================================================================

crate::validator! {
    /// Validates that a string is exactly equal to an expected value.
    #[derive(PartialEq, Eq, Hash)]
    pub Equal { expected: String };
    rule(self, input) { input == self.expected }
    status { StatusCode::NotEqual }
    new(expected: impl Into<String>) { Self { expected: expected.into() } }
    fn equal(expected: impl Into<String>);
}

// ============================================================================
// CONTAINS
// ============================================================================

crate::validator! {
    /// Validates that a string contains a substring.
    #[derive(PartialEq, Eq, Hash)]
    pub Contains { substring: String };
    rule(self, input) { input.contains(self.substring.as_str()) }
    status { StatusCode::NotContains }
    new(substring: impl Into<String>) { Self { substring: substring.into() } }
    fn contains(substring: impl Into<String>);
}

// ============================================================================
// REGEX
// ============================================================================

crate::validator! {
    /// Validates that a regular expression matches somewhere in the string.
    ///
    /// Anchor the pattern with `^...$` to require a full match.
    pub MatchesRegex { pattern: Regex };
    rule(self, input) { self.pattern.is_match(input) }
    status { StatusCode::RegExFail }
    fn matches_regex(pattern: Regex);
}

impl MatchesRegex {
    /// Compiles `pattern` and wraps it.
    pub fn parse(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::new(Regex::new(pattern)?))
    }
}
