//! Caller-supplied predicate checks

use std::fmt;
use std::sync::Arc;

use crate::foundation::StatusCode;

/// A caller-supplied boolean test.
///
/// Nullary predicates ignore the text (they usually read some other state),
/// unary predicates receive it. Both are shared behind `Arc`, so cloning a
/// predicate is cheap and clones call the same closure.
#[derive(Clone)]
pub enum Predicate {
    /// `Fn() -> bool`
    Nullary(Arc<dyn Fn() -> bool + Send + Sync>),
    /// `Fn(&str) -> bool`
    Unary(Arc<dyn Fn(&str) -> bool + Send + Sync>),
}

impl Predicate {
    pub fn nullary(f: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        Self::Nullary(Arc::new(f))
    }

    pub fn unary(f: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self::Unary(Arc::new(f))
    }

    /// Evaluates the predicate against `input`.
    #[must_use]
    pub fn test(&self, input: &str) -> bool {
        match self {
            Self::Nullary(f) => f(),
            Self::Unary(f) => f(input),
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nullary(_) => f.write_str("Predicate::Nullary(..)"),
            Self::Unary(_) => f.write_str("Predicate::Unary(..)"),
        }
    }
}

// ============================================================================
// FUNC
// ============================================================================

crate::validator! {
    /// Validates that a predicate returns true.
    pub Func { predicate: Predicate };
    rule(self, input) { self.predicate.test(input) }
    status { StatusCode::FuncFail }
    fn func(predicate: Predicate);
}

impl Func {
    /// Wraps a predicate over the text.
    pub fn from_fn(f: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self::new(Predicate::unary(f))
    }
}
