//! Core traits for the validation system

use super::{StatusCode, Statuses};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every text check implements.
///
/// A check either passes or reports the status code describing why the text
/// does not satisfy it.
///
/// # Examples
///
/// ```rust
/// use sentinel_validator::foundation::{StatusCode, Validate};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     fn validate(&self, input: &str) -> Result<(), StatusCode> {
///         if input.contains(' ') {
///             Err(StatusCode::InvalidChar)
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.validate("abc").is_ok());
/// assert_eq!(NoSpaces.validate("a b"), Err(StatusCode::InvalidChar));
/// ```
pub trait Validate {
    /// Checks `input`, returning the failure code if it does not pass.
    fn validate(&self, input: &str) -> Result<(), StatusCode>;

    /// Appends the statuses this check contributes for `input`.
    ///
    /// The default pushes at most one code. Checks that can report the same
    /// failure several times in one run override this.
    fn report(&self, input: &str, statuses: &mut Statuses) {
        if let Err(status) = self.validate(input) {
            statuses.push(status);
        }
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    fn validate(&self, input: &str) -> Result<(), StatusCode> {
        (**self).validate(input)
    }

    fn report(&self, input: &str, statuses: &mut Statuses) {
        (**self).report(input, statuses);
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn validate(&self, input: &str) -> Result<(), StatusCode> {
        (**self).validate(input)
    }

    fn report(&self, input: &str, statuses: &mut Statuses) {
        (**self).report(input, statuses);
    }
}
