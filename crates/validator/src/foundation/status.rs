//! Status codes produced by a validation run.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::RuleKind;

/// The ordered status list produced by one validation run.
///
/// Runs usually produce one or two codes, so the list stays inline.
pub type Statuses = SmallVec<[StatusCode; 4]>;

// ============================================================================
// STATUS CODE
// ============================================================================

/// Result marker for a validation run.
///
/// `Ok` appears in a status list if and only if no other code was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCode {
    /// Every rule passed.
    Ok,
    NotAlpha,
    NotNum,
    NotAlphaNum,
    NotEqual,
    NotContains,
    BadEqualArgs,
    BadContainsArgs,
    NoSpecChar,
    TooShort,
    BadMinArgs,
    TooLong,
    BadMaxArgs,
    InvalidChar,
    BadCharArgs,
    #[serde(rename = "regex_fail")]
    RegExFail,
    #[serde(rename = "bad_regex_args")]
    BadRegExArgs,
    FuncFail,
    BadFuncArgs,
}

/// Broad classification of a [`StatusCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    /// The run passed.
    Passed,
    /// A rule was evaluated and the text did not satisfy it.
    Failure,
    /// A rule was registered with arguments of the wrong shape.
    BadArgs,
}

impl StatusCode {
    /// Every status code, in declaration order.
    pub const ALL: [Self; 19] = [
        Self::Ok,
        Self::NotAlpha,
        Self::NotNum,
        Self::NotAlphaNum,
        Self::NotEqual,
        Self::NotContains,
        Self::BadEqualArgs,
        Self::BadContainsArgs,
        Self::NoSpecChar,
        Self::TooShort,
        Self::BadMinArgs,
        Self::TooLong,
        Self::BadMaxArgs,
        Self::InvalidChar,
        Self::BadCharArgs,
        Self::RegExFail,
        Self::BadRegExArgs,
        Self::FuncFail,
        Self::BadFuncArgs,
    ];

    /// Display name of the code, e.g. `Too_Short`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::NotAlpha => "Not_Alpha",
            Self::NotNum => "Not_Num",
            Self::NotAlphaNum => "Not_Alpha_Num",
            Self::NotEqual => "Not_Equal",
            Self::NotContains => "Not_Contains",
            Self::BadEqualArgs => "Bad_Equal_Args",
            Self::BadContainsArgs => "Bad_Contains_Args",
            Self::NoSpecChar => "No_Spec_Char",
            Self::TooShort => "Too_Short",
            Self::BadMinArgs => "Bad_Min_Args",
            Self::TooLong => "Too_Long",
            Self::BadMaxArgs => "Bad_Max_Args",
            Self::InvalidChar => "Invalid_Char",
            Self::BadCharArgs => "Bad_Char_Args",
            Self::RegExFail => "RegEx_Fail",
            Self::BadRegExArgs => "Bad_RegEx_Args",
            Self::FuncFail => "Func_Fail",
            Self::BadFuncArgs => "Bad_Func_Args",
        }
    }

    #[must_use]
    pub const fn category(self) -> StatusCategory {
        match self {
            Self::Ok => StatusCategory::Passed,
            Self::BadEqualArgs
            | Self::BadContainsArgs
            | Self::BadMinArgs
            | Self::BadMaxArgs
            | Self::BadCharArgs
            | Self::BadRegExArgs
            | Self::BadFuncArgs => StatusCategory::BadArgs,
            _ => StatusCategory::Failure,
        }
    }

    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Returns true for semantic failures (the text did not satisfy a rule).
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self.category(), StatusCategory::Failure)
    }

    /// Returns true for the `Bad*Args` configuration codes.
    #[must_use]
    pub const fn is_bad_args(self) -> bool {
        matches!(self.category(), StatusCategory::BadArgs)
    }

    /// The rule kind that produces this code, or `None` for `Ok`.
    #[must_use]
    pub const fn kind(self) -> Option<RuleKind> {
        Some(match self {
            Self::Ok => return None,
            Self::NotAlpha => RuleKind::Alpha,
            Self::NotNum => RuleKind::Num,
            Self::NotAlphaNum => RuleKind::AlphaNum,
            Self::NotEqual | Self::BadEqualArgs => RuleKind::Equal,
            Self::NotContains | Self::BadContainsArgs => RuleKind::Contains,
            Self::NoSpecChar => RuleKind::SpecialChar,
            Self::TooShort | Self::BadMinArgs => RuleKind::MinLength,
            Self::TooLong | Self::BadMaxArgs => RuleKind::MaxLength,
            Self::InvalidChar | Self::BadCharArgs => RuleKind::OmitChar,
            Self::RegExFail | Self::BadRegExArgs => RuleKind::RegEx,
            Self::FuncFail | Self::BadFuncArgs => RuleKind::Func,
        })
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true when `statuses` is exactly `[Ok]`.
#[must_use]
pub fn is_passing(statuses: &[StatusCode]) -> bool {
    matches!(statuses, [StatusCode::Ok])
}
