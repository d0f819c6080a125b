//! Built-in checks
//!
//! One check per [`RuleKind`](crate::foundation::RuleKind):
//!
//! - **Character classes**: [`Alpha`], [`Num`], [`AlphaNum`]
//! - **Content**: [`Equal`], [`Contains`], [`MatchesRegex`]
//! - **Special characters**: [`SpecialChar`], [`OmitChar`]
//! - **Length**: [`MinLength`], [`MaxLength`]
//! - **Custom**: [`Func`]
//!
//! # Examples
//!
//! ```rust
//! use sentinel_validator::prelude::*;
//!
//! assert!(alpha_num().validate("abc123").is_ok());
//! assert_eq!(min_length(5).validate("hi"), Err(StatusCode::TooShort));
//! ```

pub mod charset;
pub mod content;
pub mod custom;
pub mod length;
pub mod special;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use charset::{Alpha, AlphaNum, Num, alpha, alpha_num, num};
pub use content::{Contains, Equal, MatchesRegex, contains, equal, matches_regex};
pub use custom::{Func, Predicate, func};
pub use length::{MaxLength, MinLength, max_length, min_length};
pub use special::{
    CharSet, OmitChar, SPECIAL_CHARS, SpecialChar, is_special, omit_chars, omit_special,
    special_char,
};
