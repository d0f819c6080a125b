//! Special-character checks
//!
//! [`SpecialChar`] requires at least one character from the fixed special set,
//! [`OmitChar`] forbids a set of characters (the special set by default).

use std::iter;

use crate::foundation::{StatusCode, Statuses, Validate};

/// The fixed special-character set.
pub const SPECIAL_CHARS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// Returns true if `c` belongs to [`SPECIAL_CHARS`].
#[must_use]
pub fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}

// ============================================================================
// SPECIAL CHAR
// ============================================================================

crate::validator! {
    /// Validates that a string contains at least one special character.
    pub SpecialChar;
    rule(input) { input.chars().any(is_special) }
    status { StatusCode::NoSpecChar }
    fn special_char();
}

// ============================================================================
// CHAR SET
// ============================================================================

/// A set of forbidden characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CharSet {
    /// The fixed [`SPECIAL_CHARS`] set.
    #[default]
    Special,
    /// Caller-supplied characters, in registration order. May repeat.
    Explicit(Vec<char>),
}

impl CharSet {
    /// Builds an explicit set. An empty input falls back to [`CharSet::Special`].
    pub fn explicit(chars: impl IntoIterator<Item = char>) -> Self {
        let chars: Vec<char> = chars.into_iter().collect();
        if chars.is_empty() {
            Self::Special
        } else {
            Self::Explicit(chars)
        }
    }

    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        match self {
            Self::Special => is_special(c),
            Self::Explicit(chars) => chars.contains(&c),
        }
    }

    /// Counts how many `InvalidChar` reports `input` earns.
    ///
    /// The special set reports at most once. An explicit set reports once per
    /// member found in the text, so a member listed twice counts twice.
    fn violations(&self, input: &str) -> usize {
        match self {
            Self::Special => usize::from(input.chars().any(is_special)),
            Self::Explicit(chars) => chars.iter().filter(|c| input.contains(**c)).count(),
        }
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::explicit(iter)
    }
}

// ============================================================================
// OMIT CHAR
// ============================================================================

/// Validates that a string contains none of a set of forbidden characters.
///
/// # Examples
///
/// ```rust
/// use sentinel_validator::foundation::{StatusCode, Statuses, Validate};
/// use sentinel_validator::validators::OmitChar;
///
/// let check = OmitChar::chars(['a', 'b', 'z']);
/// let mut statuses = Statuses::new();
/// check.report("abc", &mut statuses);
/// assert_eq!(statuses.as_slice(), &[StatusCode::InvalidChar, StatusCode::InvalidChar]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct OmitChar {
    /// Characters that must not appear.
    pub forbidden: CharSet,
}

impl OmitChar {
    #[must_use]
    pub fn new(forbidden: CharSet) -> Self {
        Self { forbidden }
    }

    /// Forbids the fixed special-character set.
    #[must_use]
    pub fn special() -> Self {
        Self::new(CharSet::Special)
    }

    /// Forbids the given characters.
    pub fn chars(chars: impl IntoIterator<Item = char>) -> Self {
        Self::new(CharSet::explicit(chars))
    }
}

impl Validate for OmitChar {
    fn validate(&self, input: &str) -> Result<(), StatusCode> {
        if self.forbidden.violations(input) == 0 {
            Ok(())
        } else {
            Err(StatusCode::InvalidChar)
        }
    }

    fn report(&self, input: &str, statuses: &mut Statuses) {
        let count = self.forbidden.violations(input);
        statuses.extend(iter::repeat_n(StatusCode::InvalidChar, count));
    }
}

/// Creates a check forbidding the special-character set.
#[must_use]
pub fn omit_special() -> OmitChar {
    OmitChar::special()
}

/// Creates a check forbidding the given characters.
pub fn omit_chars(chars: impl IntoIterator<Item = char>) -> OmitChar {
    OmitChar::chars(chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(check: &OmitChar, input: &str) -> Statuses {
        let mut statuses = Statuses::new();
        check.report(input, &mut statuses);
        statuses
    }

    #[test]
    fn test_special_set_contents() {
        for c in "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?".chars() {
            assert!(is_special(c), "{c:?}");
        }
        assert!(!is_special('a'));
        assert!(!is_special(' '));
        assert!(!is_special('~'));
        assert!(!is_special('`'));
    }

    #[test]
    fn test_special_char() {
        assert!(special_char().validate("pass!").is_ok());
        assert_eq!(special_char().validate("pass"), Err(StatusCode::NoSpecChar));
        assert_eq!(special_char().validate(""), Err(StatusCode::NoSpecChar));
    }

    #[test]
    fn test_omit_special_reports_once() {
        let check = omit_special();
        assert_eq!(report(&check, "a!b@c#").as_slice(), &[StatusCode::InvalidChar]);
        assert!(report(&check, "abc").is_empty());
    }

    #[test]
    fn test_omit_explicit_reports_per_member() {
        let check = omit_chars(['x', 'y']);
        assert_eq!(
            report(&check, "xxyy").as_slice(),
            &[StatusCode::InvalidChar, StatusCode::InvalidChar]
        );
        assert_eq!(report(&check, "x").as_slice(), &[StatusCode::InvalidChar]);
        assert!(check.validate("abc").is_ok());
    }

    #[test]
    fn test_omit_explicit_duplicate_members_count_twice() {
        let check = omit_chars(['x', 'x']);
        assert_eq!(report(&check, "x").len(), 2);
    }

    #[test]
    fn test_empty_explicit_set_falls_back_to_special() {
        assert_eq!(CharSet::explicit([]), CharSet::Special);
        assert_eq!(omit_chars(Vec::new()), omit_special());
    }

    #[test]
    fn test_validate_matches_report() {
        let check = omit_chars(['!']);
        assert_eq!(check.validate("hi!"), Err(StatusCode::InvalidChar));
        assert!(check.validate("hi@").is_ok());
    }

    #[test]
    fn test_char_set_membership() {
        assert!(CharSet::Special.contains('?'));
        assert!(!CharSet::Special.contains('a'));

        let set = CharSet::explicit(['a', ' ']);
        assert!(set.contains(' '));
        assert!(!set.contains('!'));
    }
}
