//! Check command implementation.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use sentinel_validator::{RegistryConfig, StatusCode, is_passing};
use serde::Serialize;
use serde_json::Value;

use super::{EXIT_FAILED, EXIT_PASSED};
use crate::OutputFormat;

/// Outcome for one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetReport {
    pub target: String,
    pub statuses: Vec<StatusCode>,
    pub passed: bool,
}

/// Runs the check command.
pub fn run(
    rules: &Path,
    values: Option<&Path>,
    assignments: Vec<(String, String)>,
    format: OutputFormat,
) -> Result<ExitCode> {
    let config = RegistryConfig::from_path(rules)
        .with_context(|| format!("failed to load rules: {}", rules.display()))?;
    let mut registry = config.build();

    let mut texts = match values {
        Some(path) => load_values(path)?,
        None => HashMap::new(),
    };
    texts.extend(assignments);

    tracing::info!(targets = registry.len(), texts = texts.len(), "checking");

    let reports: Vec<TargetReport> = registry
        .validate_all(&texts, false)?
        .into_iter()
        .map(|(target, statuses)| TargetReport {
            passed: is_passing(&statuses),
            statuses: statuses.to_vec(),
            target,
        })
        .collect();

    match format {
        OutputFormat::Text => print!("{}", render_text(&reports)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }

    let code = if reports.iter().all(|r| r.passed) {
        EXIT_PASSED
    } else {
        EXIT_FAILED
    };
    Ok(ExitCode::from(code))
}

/// One `target: Status, Status` line per target.
pub fn render_text(reports: &[TargetReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let statuses: Vec<&str> = report.statuses.iter().map(|s| s.as_str()).collect();
        let _ = writeln!(out, "{}: {}", report.target, statuses.join(", "));
    }
    out
}

/// Reads a flat `name -> text` map from a `.json` or `.toml` file.
///
/// Numbers and booleans are accepted and used in their textual form.
fn load_values(path: &Path) -> Result<HashMap<String, String>> {
    let input = fs::read_to_string(path)
        .with_context(|| format!("failed to read values: {}", path.display()))?;

    let raw: HashMap<String, Value> = match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => serde_json::from_str(&input)
            .with_context(|| format!("invalid JSON values: {}", path.display()))?,
        Some(ext) if ext.eq_ignore_ascii_case("toml") => toml::from_str(&input)
            .with_context(|| format!("invalid TOML values: {}", path.display()))?,
        _ => bail!("unsupported values format: {} (expected .json or .toml)", path.display()),
    };

    raw.into_iter()
        .map(|(name, value)| {
            let text = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                other => bail!("value for `{name}` must be a string, got {other}"),
            };
            Ok((name, text))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    fn report(target: &str, statuses: &[StatusCode]) -> TargetReport {
        TargetReport {
            target: target.to_string(),
            statuses: statuses.to_vec(),
            passed: is_passing(statuses),
        }
    }

    #[test]
    fn test_render_text() {
        let reports = [
            report("username", &[StatusCode::Ok]),
            report("password", &[StatusCode::TooShort, StatusCode::NoSpecChar]),
        ];
        insta::assert_snapshot!(render_text(&reports), @r"
        username: OK
        password: Too_Short, No_Spec_Char
        ");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value([report("pin", &[StatusCode::NotNum])]).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "target": "pin", "statuses": ["not_num"], "passed": false }])
        );
    }

    #[test]
    fn test_load_values() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "username = \"alice\"\npin = 1234\nagree = true").unwrap();

        let values = load_values(file.path()).unwrap();
        assert_eq!(values["username"], "alice");
        assert_eq!(values["pin"], "1234");
        assert_eq!(values["agree"], "true");
    }

    #[test]
    fn test_load_values_extension_ignores_case() {
        let mut file = tempfile::Builder::new().suffix(".JSON").tempfile().unwrap();
        write!(file, r#"{{ "pin": "1234" }}"#).unwrap();

        let values = load_values(file.path()).unwrap();
        assert_eq!(values["pin"], "1234");
    }

    #[test]
    fn test_load_values_rejects_nested() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{ "user": {{ "name": "x" }} }}"#).unwrap();

        let err = load_values(file.path()).unwrap_err();
        assert!(err.to_string().contains("`user`"), "{err}");
    }
}
