//! Prelude module for convenient imports.
//!
//! Provides a single `use sentinel_validator::prelude::*;` import that brings
//! in the engine types, the status vocabulary and the built-in check factories.
//!
//! # Examples
//!
//! ```rust
//! use sentinel_validator::prelude::*;
//!
//! let mut rules = RuleSet::new();
//! rules.add(Rule::alpha_num()).add(Rule::max_length(8));
//! assert!(is_passing(&rules.validate("abc123")));
//!
//! assert!(special_char().validate("a!").is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits, enumerations, errors
// ============================================================================

pub use crate::foundation::{
    Arity, Error, RuleKind, StatusCategory, StatusCode, Statuses, Validate, is_passing,
    validate_with_all,
};

// ============================================================================
// ENGINE: Rules, rule sets, registry, feedback
// ============================================================================

pub use crate::feedback::Polarity;
pub use crate::registry::Registry;
pub use crate::rule::{Arg, Rule};
pub use crate::rule_set::RuleSet;
pub use crate::source::{TextSource, from_fn};

// ============================================================================
// CONFIGURATION
// ============================================================================

pub use crate::config::{ConfigError, RegistryConfig};

// ============================================================================
// VALIDATORS: All built-in checks
// ============================================================================

pub use crate::validators::*;
