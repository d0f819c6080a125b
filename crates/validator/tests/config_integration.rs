//! Loading rule configurations from disk.

use std::collections::HashMap;
use std::io::Write;

use pretty_assertions::assert_eq;
use sentinel_validator::prelude::*;
use tempfile::NamedTempFile;

const RULES_TOML: &str = r#"
[[targets]]
name = "username"
rules = [
  { kind = "min_length", args = [3] },
  { kind = "alpha_num" },
]

[[targets]]
name = "password"
rules = [
  { kind = "min_length", args = [8] },
  { kind = "special_char" },
  { kind = "regex", args = ["[0-9]"] },
  { kind = "omit_char", args = [" ", "\t"] },
]
"#;

const RULES_JSON: &str = r#"{
  "targets": [
    { "name": "username", "rules": [
      { "kind": "min_length", "args": [3] },
      { "kind": "alpha_num" }
    ] },
    { "name": "password", "rules": [
      { "kind": "min_length", "args": [8] },
      { "kind": "special_char" },
      { "kind": "regex", "args": ["[0-9]"] },
      { "kind": "omit_char", "args": [" ", "\t"] }
    ] }
  ]
}"#;

fn write_temp(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn evaluate(
    config: &RegistryConfig,
    username: &str,
    password: &str,
) -> Vec<(String, Vec<StatusCode>)> {
    let mut registry = config.build();
    let values: HashMap<String, String> = HashMap::from([
        ("username".to_string(), username.to_string()),
        ("password".to_string(), password.to_string()),
    ]);
    registry
        .validate_all(&values, false)
        .unwrap()
        .into_iter()
        .map(|(name, statuses)| (name, statuses.to_vec()))
        .collect()
}

#[test]
fn toml_and_json_files_load_the_same_rules() {
    let toml_file = write_temp(".toml", RULES_TOML);
    let json_file = write_temp(".json", RULES_JSON);

    let from_toml = RegistryConfig::from_path(toml_file.path()).unwrap();
    let from_json = RegistryConfig::from_path(json_file.path()).unwrap();
    assert_eq!(from_toml, from_json);
}

#[test]
fn config_built_registry_matches_api_built() {
    let config = RegistryConfig::from_toml_str(RULES_TOML).unwrap();

    let mut api = Registry::new();
    api.add("username".to_string(), Rule::min_length(3))
        .add("username".to_string(), Rule::alpha_num())
        .add("password".to_string(), Rule::min_length(8))
        .add("password".to_string(), Rule::special_char())
        .add("password".to_string(), Rule::regex(regex::Regex::new("[0-9]").unwrap()))
        .add("password".to_string(), Rule::omit_chars([' ', '\t']));

    for (username, password) in [("al", "short"), ("alice", "hunter 2!"), ("bob_1", "p@ssw0rd")] {
        let values: HashMap<String, String> = HashMap::from([
            ("username".to_string(), username.to_string()),
            ("password".to_string(), password.to_string()),
        ]);
        let expected: Vec<(String, Vec<StatusCode>)> = api
            .validate_all(&values, false)
            .unwrap()
            .into_iter()
            .map(|(name, statuses)| (name, statuses.to_vec()))
            .collect();
        assert_eq!(evaluate(&config, username, password), expected);
    }
}

#[test]
fn password_report() {
    let config = RegistryConfig::from_toml_str(RULES_TOML).unwrap();
    assert_eq!(
        evaluate(&config, "al", "hunter 2"),
        vec![
            ("username".to_string(), vec![StatusCode::TooShort]),
            (
                "password".to_string(),
                vec![StatusCode::NoSpecChar, StatusCode::InvalidChar]
            ),
        ]
    );
}

#[test]
fn invalid_regex_is_reported_not_rejected() {
    let input = r#"{ "targets": [{ "name": "code", "rules": [
        { "kind": "regex", "args": ["[unclosed"] }
    ] }] }"#;
    let config = RegistryConfig::from_json_str(input).unwrap();
    let mut registry = config.build();
    let values = HashMap::from([("code".to_string(), "abc".to_string())]);
    let report = registry.validate_all(&values, false).unwrap();
    assert_eq!(report[0].1.as_slice(), &[StatusCode::BadRegExArgs]);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RegistryConfig::from_path(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }), "{err}");
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let file = write_temp(".toml", "[[targets]\nname = ");
    let err = RegistryConfig::from_path(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)), "{err}");
}
