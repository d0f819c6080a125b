//! Character-class checks
//!
//! Each check passes when every character of the text belongs to its class.
//! Empty text passes all of them.

use crate::foundation::StatusCode;

// ============================================================================
// ALPHA
// ============================================================================

crate::validator! {
    /// Validates that a string contains only ASCII letters.
    pub Alpha;
    rule(input) { input.chars().all(|c| c.is_ascii_alphabetic()) }
    status { StatusCode::NotAlpha }
    fn alpha();
}

// ============================================================================
// NUM
// ============================================================================

crate::validator! {
    /// Validates that a string contains only ASCII digits.
    pub Num;
    rule(input) { input.chars().all(|c| c.is_ascii_digit()) }
    status { StatusCode::NotNum }
    fn num();
}

// ============================================================================
// ALPHA NUM
// ============================================================================

crate::validator! {
    /// Validates that a string contains only ASCII letters and digits.
    pub AlphaNum;
    rule(input) { input.chars().all(|c| c.is_ascii_alphanumeric()) }
    status { StatusCode::NotAlphaNum }
    fn alpha_num();
}
