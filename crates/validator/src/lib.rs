//! # sentinel-validator
//!
//! A rule-based text validation machine.
//!
//! Each validation target owns a [`RuleSet`]: an ordered collection of rules,
//! at most one per [`RuleKind`]. Evaluating a rule set against the target's
//! current text yields an ordered list of [`StatusCode`]s that is exactly
//! `[Ok]` when every rule passed. Feedback bindings fire caller actions when a
//! given status is present in (or absent from) that list. A [`Registry`] keeps
//! one rule set per target and evaluates all of them against a [`TextSource`].
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use sentinel_validator::prelude::*;
//!
//! let mut registry = Registry::new();
//! registry
//!     .add("password", Rule::min_length(8))
//!     .add("password", Rule::special_char())
//!     .add_kind("pin", RuleKind::Num);
//!
//! let form = HashMap::from([("password", "hunter2"), ("pin", "12a4")]);
//! let report = registry.validate_all(&form, false).unwrap();
//!
//! assert_eq!(
//!     report[0].1.as_slice(),
//!     &[StatusCode::TooShort, StatusCode::NoSpecChar]
//! );
//! assert_eq!(report[1].1.as_slice(), &[StatusCode::NotNum]);
//! ```
//!
//! ## Typed and untyped rules
//!
//! [`Rule`] values built through their constructors are always well formed.
//! Rules can also be registered as a kind plus untyped [`Arg`]s, which is how
//! [`RegistryConfig`] loads JSON and TOML files. Badly shaped arguments never
//! panic: they are reported as the kind's `Bad*Args` status.
//!
//! ## Creating checks
//!
//! Every built-in check is generated by the [`validator!`] macro, which can
//! also be used for ad-hoc checks combined through
//! [`validate_with_all`](foundation::validate_with_all).

pub mod config;
pub mod feedback;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod registry;
pub mod rule;
pub mod rule_set;
pub mod source;
pub mod validators;

pub use config::{ConfigError, RegistryConfig, RuleConfig, TargetConfig};
pub use feedback::{FeedbackAction, FeedbackRegistry, Polarity};
pub use foundation::{Error, Result, RuleKind, StatusCode, Statuses, Validate, is_passing};
pub use registry::Registry;
pub use rule::{Arg, Rule};
pub use rule_set::RuleSet;
pub use source::{FnSource, TextSource};
