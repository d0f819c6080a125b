//! Untyped rule arguments.
//!
//! Rules registered through [`RuleSet::add_rule`](crate::RuleSet::add_rule)
//! carry a list of [`Arg`]s whose shape is only checked when the rule is
//! evaluated. A wrong shape becomes the kind's `Bad*Args` status.

use regex::Regex;

use crate::validators::Predicate;

/// One argument of a dynamically registered rule.
#[derive(Debug, Clone)]
pub enum Arg {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Char(char),
    Chars(Vec<char>),
    Pattern(Regex),
    Predicate(Predicate),
    /// A value with no rule meaning, kept as its textual rendering.
    Opaque(String),
}

impl Arg {
    /// Wraps a predicate over the text.
    pub fn predicate(f: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self::Predicate(Predicate::unary(f))
    }

    /// Wraps a predicate that ignores the text.
    pub fn nullary(f: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        Self::Predicate(Predicate::nullary(f))
    }

    /// Short name of the argument's shape, for diagnostics.
    #[must_use]
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Char(_) => "char",
            Self::Chars(_) => "char list",
            Self::Pattern(_) => "pattern",
            Self::Predicate(_) => "predicate",
            Self::Opaque(_) => "opaque",
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<i32> for Arg {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Arg {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<usize> for Arg {
    fn from(value: usize) -> Self {
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for Arg {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<Vec<char>> for Arg {
    fn from(value: Vec<char>) -> Self {
        Self::Chars(value)
    }
}

impl From<&[char]> for Arg {
    fn from(value: &[char]) -> Self {
        Self::Chars(value.to_vec())
    }
}

impl From<Regex> for Arg {
    fn from(value: Regex) -> Self {
        Self::Pattern(value)
    }
}

impl From<Predicate> for Arg {
    fn from(value: Predicate) -> Self {
        Self::Predicate(value)
    }
}
