//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation machine:
//!
//! - **Enumerations**: [`RuleKind`], [`StatusCode`]
//! - **Traits**: [`Validate`]
//! - **Errors**: [`Error`] for structural problems with targets
//!
//! Failed checks and misconfigured rules are not errors. Both are reported
//! through the same channel, an ordered [`Statuses`] list, which holds exactly
//! `[Ok]` when nothing went wrong.

pub mod error;
pub mod kind;
pub mod status;
pub mod traits;

pub use error::{Error, Result};
pub use kind::{Arity, ParseRuleKindError, RuleKind};
pub use status::{StatusCategory, StatusCode, Statuses, is_passing};
pub use traits::Validate;

// ============================================================================
// UTILITIES
// ============================================================================

/// Runs every check against `input` and returns the aggregated statuses.
///
/// Checks run in order. When none of them report anything the result is `[Ok]`.
///
/// # Examples
///
/// ```rust
/// use sentinel_validator::foundation::{StatusCode, Validate, validate_with_all};
/// use sentinel_validator::validators::{min_length, special_char};
///
/// let checks: [&dyn Validate; 2] = [&min_length(3), &special_char()];
/// let statuses = validate_with_all("ab", &checks);
/// assert_eq!(statuses.as_slice(), &[StatusCode::TooShort, StatusCode::NoSpecChar]);
/// ```
pub fn validate_with_all<V>(input: &str, validators: &[V]) -> Statuses
where
    V: Validate,
{
    let mut statuses = Statuses::new();
    for validator in validators {
        validator.report(input, &mut statuses);
    }
    if statuses.is_empty() {
        statuses.push(StatusCode::Ok);
    }
    statuses
}

// ============================================================================
// TESTS
// ============================================================================
