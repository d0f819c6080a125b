//! String length checks
//!
//! Length is measured in Unicode scalar values (chars). Bounds are signed so
//! that a configuration such as `min_length(-1)` is representable; a negative
//! minimum always passes and a negative maximum always fails.

use crate::foundation::StatusCode;

/// Measures the length of a string in chars, saturating at `i64::MAX`.
#[inline]
fn measure(input: &str) -> i64 {
    i64::try_from(input.chars().count()).unwrap_or(i64::MAX)
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: i64 };
    rule(self, input) { measure(input) >= self.min }
    status { StatusCode::TooShort }
    fn min_length(min: i64);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: i64 };
    rule(self, input) { measure(input) <= self.max }
    status { StatusCode::TooLong }
    fn max_length(max: i64);
}

// ============================================================================
// TESTS
// ============================================================================
