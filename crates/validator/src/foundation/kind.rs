//! Rule kinds and their argument shapes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::StatusCode;

// ============================================================================
// RULE KIND
// ============================================================================

/// The closed set of text checks a rule set can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum RuleKind {
    /// Only ASCII letters.
    Alpha,
    /// Only ASCII digits.
    Num,
    /// Only ASCII letters and digits.
    AlphaNum,
    /// Equal to a given string.
    Equal,
    /// Contains a given string.
    Contains,
    /// Contains at least one special character.
    SpecialChar,
    /// At least a minimum number of characters.
    MinLength,
    /// At most a maximum number of characters.
    MaxLength,
    /// Contains none of a set of forbidden characters.
    OmitChar,
    /// Matches a regular expression.
    #[serde(rename = "regex")]
    RegEx,
    /// A caller-supplied predicate returns true.
    Func,
}

/// The argument shape a [`RuleKind`] expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// No arguments; any given are ignored.
    None,
    /// One string.
    Text,
    /// One integer.
    Integer,
    /// Optional forbidden characters: a list, positional chars, or nothing.
    CharSet,
    /// One compiled regular expression.
    Pattern,
    /// One predicate, nullary or over the text.
    Predicate,
}

impl Arity {
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::None => "no arguments",
            Self::Text => "1 string",
            Self::Integer => "1 integer",
            Self::CharSet => "optional characters (defaults to the special set)",
            Self::Pattern => "1 regular expression",
            Self::Predicate => "1 predicate",
        }
    }
}

impl RuleKind {
    /// Every rule kind, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Alpha,
        Self::Num,
        Self::AlphaNum,
        Self::Equal,
        Self::Contains,
        Self::SpecialChar,
        Self::MinLength,
        Self::MaxLength,
        Self::OmitChar,
        Self::RegEx,
        Self::Func,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Num => "num",
            Self::AlphaNum => "alpha_num",
            Self::Equal => "equal",
            Self::Contains => "contains",
            Self::SpecialChar => "special_char",
            Self::MinLength => "min_length",
            Self::MaxLength => "max_length",
            Self::OmitChar => "omit_char",
            Self::RegEx => "regex",
            Self::Func => "func",
        }
    }

    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::Alpha | Self::Num | Self::AlphaNum | Self::SpecialChar => Arity::None,
            Self::Equal | Self::Contains => Arity::Text,
            Self::MinLength | Self::MaxLength => Arity::Integer,
            Self::OmitChar => Arity::CharSet,
            Self::RegEx => Arity::Pattern,
            Self::Func => Arity::Predicate,
        }
    }

    /// The code reported when text fails this check.
    #[must_use]
    pub const fn failure_status(self) -> StatusCode {
        match self {
            Self::Alpha => StatusCode::NotAlpha,
            Self::Num => StatusCode::NotNum,
            Self::AlphaNum => StatusCode::NotAlphaNum,
            Self::Equal => StatusCode::NotEqual,
            Self::Contains => StatusCode::NotContains,
            Self::SpecialChar => StatusCode::NoSpecChar,
            Self::MinLength => StatusCode::TooShort,
            Self::MaxLength => StatusCode::TooLong,
            Self::OmitChar => StatusCode::InvalidChar,
            Self::RegEx => StatusCode::RegExFail,
            Self::Func => StatusCode::FuncFail,
        }
    }

    /// The code reported when arguments have the wrong shape.
    ///
    /// `None` for kinds that take no arguments and therefore cannot be misconfigured.
    #[must_use]
    pub const fn bad_args_status(self) -> Option<StatusCode> {
        match self {
            Self::Alpha | Self::Num | Self::AlphaNum | Self::SpecialChar => None,
            Self::Equal => Some(StatusCode::BadEqualArgs),
            Self::Contains => Some(StatusCode::BadContainsArgs),
            Self::MinLength => Some(StatusCode::BadMinArgs),
            Self::MaxLength => Some(StatusCode::BadMaxArgs),
            Self::OmitChar => Some(StatusCode::BadCharArgs),
            Self::RegEx => Some(StatusCode::BadRegExArgs),
            Self::Func => Some(StatusCode::BadFuncArgs),
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PARSING
// ============================================================================

/// Returned when a string names no rule kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule kind `{0}`")]
pub struct ParseRuleKindError(pub String);

impl FromStr for RuleKind {
    type Err = ParseRuleKindError;

    /// Accepts snake_case names as well as the underscore spellings
    /// `Alpha_Num`, `Spec_Char`, `Min_Length`, `Max_Length`, `Omit_Char`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let kind = match normalized.as_str() {
            "alpha" => Self::Alpha,
            "num" | "numeric" => Self::Num,
            "alphanum" | "alphanumeric" => Self::AlphaNum,
            "equal" | "equals" => Self::Equal,
            "contains" => Self::Contains,
            "specialchar" | "specchar" => Self::SpecialChar,
            "minlength" | "min" => Self::MinLength,
            "maxlength" | "max" => Self::MaxLength,
            "omitchar" => Self::OmitChar,
            "regex" => Self::RegEx,
            "func" => Self::Func,
            _ => return Err(ParseRuleKindError(s.to_string())),
        };
        Ok(kind)
    }
}

impl TryFrom<String> for RuleKind {
    type Error = ParseRuleKindError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
