//! Rule sets described in JSON or TOML.
//!
//! ```toml
//! [[targets]]
//! name = "username"
//! rules = [
//!   { kind = "min_length", args = [3] },
//!   { kind = "alpha_num" },
//! ]
//! ```
//!
//! Every rule goes through the untyped registration path, so a configured
//! rule with badly shaped arguments reports its `Bad*Args` status at
//! evaluation time instead of failing the load. Only malformed documents and
//! unknown rule kinds are load errors.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::foundation::RuleKind;
use crate::registry::Registry;
use crate::rule::Arg;

/// Errors raised while loading a rule configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON rule configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML rule configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported rule configuration format: {} (expected .json or .toml)", .0.display())]
    UnsupportedFormat(PathBuf),
}

// ============================================================================
// MODEL
// ============================================================================

/// Top-level rule configuration: one entry per target, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub targets: Vec<TargetConfig>,
}

/// The rules registered for one target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub name: String,
    pub rules: Vec<RuleConfig>,
}

/// One rule: its kind and raw arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub kind: RuleKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Value>,
}

impl RegistryConfig {
    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input or unknown rule kinds.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] for malformed input or unknown rule kinds.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Reads a `.json` or `.toml` file; the extension picks the format.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] for other extensions,
    /// [`ConfigError::Io`] if the file cannot be read, and a parse error
    /// otherwise.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let input = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), ?format, "loading rule configuration");
        match format {
            Format::Json => Self::from_json_str(&input),
            Format::Toml => Self::from_toml_str(&input),
        }
    }

    /// Builds a registry keyed by target name.
    ///
    /// A target listed without rules still gets an (empty) rule set. Listing
    /// the same kind twice for a target keeps the last arguments.
    #[must_use]
    pub fn build(&self) -> Registry<String> {
        let mut registry = Registry::new();
        for target in &self.targets {
            let rules = registry.rule_set_or_default(target.name.clone());
            for rule in &target.rules {
                let args = rule.args.iter().map(|value| value_to_arg(rule.kind, value));
                rules.add_rule(rule.kind, args);
            }
        }
        debug!(targets = registry.len(), "built registry from configuration");
        registry
    }
}

#[derive(Debug, Clone, Copy)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

// ============================================================================
// VALUE CONVERSION
// ============================================================================

/// Converts one raw configuration value into a rule argument for `kind`.
fn value_to_arg(kind: RuleKind, value: &Value) -> Arg {
    match value {
        Value::String(s) => match kind {
            RuleKind::RegEx => match Regex::new(s) {
                Ok(pattern) => Arg::Pattern(pattern),
                Err(error) => {
                    warn!(pattern = %s, %error, "invalid regular expression in configuration");
                    Arg::Str(s.clone())
                }
            },
            RuleKind::OmitChar => single_char(s).map_or_else(|| Arg::Str(s.clone()), Arg::Char),
            _ => Arg::Str(s.clone()),
        },
        Value::Number(n) => n
            .as_i64()
            .map(Arg::Int)
            .or_else(|| n.as_f64().map(Arg::Float))
            .unwrap_or_else(|| Arg::Opaque(n.to_string())),
        Value::Bool(b) => Arg::Bool(*b),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().and_then(single_char))
            .collect::<Option<Vec<char>>>()
            .map_or_else(|| Arg::Opaque(value.to_string()), Arg::Chars),
        Value::Null | Value::Object(_) => Arg::Opaque(value.to_string()),
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::foundation::StatusCode;

    #[test]
    fn test_toml_model() {
        let config = RegistryConfig::from_toml_str(
            r#"
            [[targets]]
            name = "username"
            rules = [
              { kind = "min_length", args = [3] },
              { kind = "alpha_num" },
            ]
            "#,
        )
        .unwrap();

        assert_eq!(
            config,
            RegistryConfig {
                targets: vec![TargetConfig {
                    name: "username".into(),
                    rules: vec![
                        RuleConfig {
                            kind: RuleKind::MinLength,
                            args: vec![json!(3)],
                        },
                        RuleConfig {
                            kind: RuleKind::AlphaNum,
                            args: vec![],
                        },
                    ],
                }],
            }
        );
    }

    #[test]
    fn test_unknown_kind_is_an_error() {
        let err = RegistryConfig::from_json_str(
            r#"{ "targets": [{ "name": "x", "rules": [{ "kind": "palindrome" }] }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().contains("palindrome"), "{err}");
    }

    #[test]
    fn test_value_conversion() {
        assert!(matches!(value_to_arg(RuleKind::Equal, &json!("a")), Arg::Str(s) if s == "a"));
        assert!(matches!(value_to_arg(RuleKind::MinLength, &json!(4)), Arg::Int(4)));
        assert!(matches!(value_to_arg(RuleKind::MinLength, &json!(4.5)), Arg::Float(_)));
        assert!(matches!(value_to_arg(RuleKind::Equal, &json!(true)), Arg::Bool(true)));
        assert!(matches!(value_to_arg(RuleKind::OmitChar, &json!("!")), Arg::Char('!')));
        assert!(matches!(value_to_arg(RuleKind::Equal, &json!("!")), Arg::Str(_)));
        assert!(matches!(
            value_to_arg(RuleKind::OmitChar, &json!(["a", "b"])),
            Arg::Chars(c) if c == ['a', 'b']
        ));
        assert!(matches!(value_to_arg(RuleKind::OmitChar, &json!(["ab"])), Arg::Opaque(_)));
        assert!(matches!(value_to_arg(RuleKind::RegEx, &json!("^a")), Arg::Pattern(_)));
        assert!(matches!(value_to_arg(RuleKind::RegEx, &json!("(")), Arg::Str(_)));
        assert!(matches!(value_to_arg(RuleKind::Func, &json!({})), Arg::Opaque(_)));
    }

    #[test]
    fn test_build_reports_bad_args_at_evaluation() {
        let config = RegistryConfig::from_json_str(
            r#"{
                "targets": [
                    { "name": "pattern", "rules": [{ "kind": "regex", "args": ["("] }] },
                    { "name": "hook", "rules": [{ "kind": "func" }] },
                    { "name": "empty" }
                ]
            }"#,
        )
        .unwrap();
        let mut registry = config.build();
        assert_eq!(registry.len(), 3);

        let source = crate::source::from_fn(|_: &String| Some("text"));
        let report = registry.validate_all(&source, false).unwrap();
        let statuses: Vec<&[StatusCode]> = report.iter().map(|(_, s)| s.as_slice()).collect();
        assert_eq!(
            statuses,
            [
                &[StatusCode::BadRegExArgs][..],
                &[StatusCode::BadFuncArgs][..],
                &[StatusCode::Ok][..],
            ]
        );
    }

    #[test]
    fn test_unsupported_extension() {
        let err = RegistryConfig::from_path("rules.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }
}
