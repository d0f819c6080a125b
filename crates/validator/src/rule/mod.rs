//! Rules: a rule kind together with its arguments.
//!
//! [`Rule`] is the typed form: each variant wraps the check it runs, so a
//! rule built through its constructors can never be misconfigured. The untyped
//! form, a [`RuleKind`] plus a list of [`Arg`]s, is what a
//! [`RuleSet`](crate::RuleSet) stores; [`Rule::resolve`] turns it back into a
//! typed rule or the kind's `Bad*Args` status.

mod arg;

pub use arg::Arg;

use regex::Regex;

use crate::foundation::{RuleKind, StatusCode, Statuses, Validate};
use crate::validators::{
    Alpha, AlphaNum, CharSet, Contains, Equal, Func, MatchesRegex, MaxLength, MinLength, Num,
    OmitChar, Predicate, SpecialChar,
};

/// A fully typed rule.
#[derive(Debug, Clone)]
pub enum Rule {
    Alpha(Alpha),
    Num(Num),
    AlphaNum(AlphaNum),
    Equal(Equal),
    Contains(Contains),
    SpecialChar(SpecialChar),
    MinLength(MinLength),
    MaxLength(MaxLength),
    OmitChar(OmitChar),
    RegEx(MatchesRegex),
    Func(Func),
}

impl Rule {
    #[must_use]
    pub const fn alpha() -> Self {
        Self::Alpha(Alpha)
    }

    #[must_use]
    pub const fn num() -> Self {
        Self::Num(Num)
    }

    #[must_use]
    pub const fn alpha_num() -> Self {
        Self::AlphaNum(AlphaNum)
    }

    pub fn equal(expected: impl Into<String>) -> Self {
        Self::Equal(Equal::new(expected))
    }

    pub fn contains(substring: impl Into<String>) -> Self {
        Self::Contains(Contains::new(substring))
    }

    #[must_use]
    pub const fn special_char() -> Self {
        Self::SpecialChar(SpecialChar)
    }

    #[must_use]
    pub const fn min_length(min: i64) -> Self {
        Self::MinLength(MinLength { min })
    }

    #[must_use]
    pub const fn max_length(max: i64) -> Self {
        Self::MaxLength(MaxLength { max })
    }

    /// Forbids the fixed special-character set.
    #[must_use]
    pub fn omit_special() -> Self {
        Self::OmitChar(OmitChar::special())
    }

    /// Forbids the given characters.
    pub fn omit_chars(chars: impl IntoIterator<Item = char>) -> Self {
        Self::OmitChar(OmitChar::chars(chars))
    }

    #[must_use]
    pub fn regex(pattern: Regex) -> Self {
        Self::RegEx(MatchesRegex::new(pattern))
    }

    /// Requires `f(text)` to return true.
    pub fn func(f: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self::Func(Func::from_fn(f))
    }

    /// Requires `f()` to return true, regardless of the text.
    pub fn func_nullary(f: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        Self::Func(Func::new(Predicate::nullary(f)))
    }

    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        match self {
            Self::Alpha(_) => RuleKind::Alpha,
            Self::Num(_) => RuleKind::Num,
            Self::AlphaNum(_) => RuleKind::AlphaNum,
            Self::Equal(_) => RuleKind::Equal,
            Self::Contains(_) => RuleKind::Contains,
            Self::SpecialChar(_) => RuleKind::SpecialChar,
            Self::MinLength(_) => RuleKind::MinLength,
            Self::MaxLength(_) => RuleKind::MaxLength,
            Self::OmitChar(_) => RuleKind::OmitChar,
            Self::RegEx(_) => RuleKind::RegEx,
            Self::Func(_) => RuleKind::Func,
        }
    }

    /// Lowers the rule into its kind and argument list.
    ///
    /// `Rule::resolve` on the result yields an equivalent rule.
    #[must_use]
    pub fn into_parts(self) -> (RuleKind, Vec<Arg>) {
        let kind = self.kind();
        let args = match self {
            Self::Alpha(_) | Self::Num(_) | Self::AlphaNum(_) | Self::SpecialChar(_) => Vec::new(),
            Self::Equal(check) => vec![Arg::Str(check.expected)],
            Self::Contains(check) => vec![Arg::Str(check.substring)],
            Self::MinLength(check) => vec![Arg::Int(check.min)],
            Self::MaxLength(check) => vec![Arg::Int(check.max)],
            Self::OmitChar(check) => match check.forbidden {
                CharSet::Special => Vec::new(),
                CharSet::Explicit(chars) => vec![Arg::Chars(chars)],
            },
            Self::RegEx(check) => vec![Arg::Pattern(check.pattern)],
            Self::Func(check) => vec![Arg::Predicate(check.predicate)],
        };
        (kind, args)
    }

    /// Builds a typed rule from a kind and untyped arguments.
    ///
    /// Single-argument kinds only look at the first argument; kinds without
    /// arguments ignore them entirely.
    ///
    /// # Errors
    ///
    /// Returns the kind's `Bad*Args` status when the arguments have the wrong shape.
    pub fn resolve(kind: RuleKind, args: &[Arg]) -> Result<Self, StatusCode> {
        let first = args.first();
        match kind {
            RuleKind::Alpha => Ok(Self::alpha()),
            RuleKind::Num => Ok(Self::num()),
            RuleKind::AlphaNum => Ok(Self::alpha_num()),
            RuleKind::SpecialChar => Ok(Self::special_char()),
            RuleKind::Equal => match first {
                Some(Arg::Str(expected)) => Ok(Self::equal(expected.as_str())),
                _ => Err(StatusCode::BadEqualArgs),
            },
            RuleKind::Contains => match first {
                Some(Arg::Str(substring)) => Ok(Self::contains(substring.as_str())),
                _ => Err(StatusCode::BadContainsArgs),
            },
            RuleKind::MinLength => match first {
                Some(Arg::Int(min)) => Ok(Self::min_length(*min)),
                _ => Err(StatusCode::BadMinArgs),
            },
            RuleKind::MaxLength => match first {
                Some(Arg::Int(max)) => Ok(Self::max_length(*max)),
                _ => Err(StatusCode::BadMaxArgs),
            },
            RuleKind::OmitChar => resolve_char_set(args)
                .map(|set| Self::OmitChar(OmitChar::new(set)))
                .ok_or(StatusCode::BadCharArgs),
            RuleKind::RegEx => match first {
                Some(Arg::Pattern(pattern)) => Ok(Self::regex(pattern.clone())),
                _ => Err(StatusCode::BadRegExArgs),
            },
            RuleKind::Func => match first {
                Some(Arg::Predicate(predicate)) => Ok(Self::Func(Func::new(predicate.clone()))),
                _ => Err(StatusCode::BadFuncArgs),
            },
        }
    }
}

/// Forbidden characters for `OmitChar`: nothing, a char list, or chars
/// passed one per argument. Anything else is a bad argument.
fn resolve_char_set(args: &[Arg]) -> Option<CharSet> {
    match args.first() {
        None => Some(CharSet::Special),
        Some(Arg::Chars(chars)) => Some(CharSet::explicit(chars.iter().copied())),
        Some(Arg::Char(_)) => args
            .iter()
            .map(|arg| match arg {
                Arg::Char(c) => Some(*c),
                _ => None,
            })
            .collect::<Option<CharSet>>(),
        Some(_) => None,
    }
}

impl Validate for Rule {
    fn validate(&self, input: &str) -> Result<(), StatusCode> {
        match self {
            Self::Alpha(check) => check.validate(input),
            Self::Num(check) => check.validate(input),
            Self::AlphaNum(check) => check.validate(input),
            Self::Equal(check) => check.validate(input),
            Self::Contains(check) => check.validate(input),
            Self::SpecialChar(check) => check.validate(input),
            Self::MinLength(check) => check.validate(input),
            Self::MaxLength(check) => check.validate(input),
            Self::OmitChar(check) => check.validate(input),
            Self::RegEx(check) => check.validate(input),
            Self::Func(check) => check.validate(input),
        }
    }

    fn report(&self, input: &str, statuses: &mut Statuses) {
        match self {
            Self::OmitChar(check) => check.report(input, statuses),
            other => {
                if let Err(status) = other.validate(input) {
                    statuses.push(status);
                }
            }
        }
    }
}
