//! End-to-end validation scenarios through the public API.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use regex::Regex;
use rstest::rstest;
use sentinel_validator::prelude::*;

fn run(text: &str, rules: impl IntoIterator<Item = Rule>) -> Vec<StatusCode> {
    let mut set = RuleSet::new();
    for rule in rules {
        set.add(rule);
    }
    set.validate(text).to_vec()
}

// ============================================================================
// SINGLE RULES
// ============================================================================

#[rstest]
#[case::alpha_rejects_digits("abc123", Rule::alpha(), &[StatusCode::NotAlpha])]
#[case::alpha_num_accepts("abc123", Rule::alpha_num(), &[StatusCode::Ok])]
#[case::num_rejects_sign("-12", Rule::num(), &[StatusCode::NotNum])]
#[case::empty_is_alpha("", Rule::alpha(), &[StatusCode::Ok])]
#[case::too_short("hi", Rule::min_length(5), &[StatusCode::TooShort])]
#[case::too_long("hi", Rule::max_length(1), &[StatusCode::TooLong])]
#[case::length_counts_chars("héllo", Rule::max_length(5), &[StatusCode::Ok])]
#[case::negative_min_passes("", Rule::min_length(-1), &[StatusCode::Ok])]
#[case::negative_max_fails("", Rule::max_length(-1), &[StatusCode::TooLong])]
#[case::special_present("pass!", Rule::special_char(), &[StatusCode::Ok])]
#[case::special_missing("pass", Rule::special_char(), &[StatusCode::NoSpecChar])]
#[case::omit_special_once("a!b?", Rule::omit_special(), &[StatusCode::InvalidChar])]
#[case::equal("secret", Rule::equal("secret"), &[StatusCode::Ok])]
#[case::not_equal("Secret", Rule::equal("secret"), &[StatusCode::NotEqual])]
#[case::contains("user@host", Rule::contains("@"), &[StatusCode::Ok])]
#[case::not_contains("userhost", Rule::contains("@"), &[StatusCode::NotContains])]
#[case::func_fails("abc", Rule::func(|s| s.ends_with('!')), &[StatusCode::FuncFail])]
#[case::nullary_func("abc", Rule::func_nullary(|| true), &[StatusCode::Ok])]
fn single_rule(#[case] text: &str, #[case] rule: Rule, #[case] expected: &[StatusCode]) {
    assert_eq!(run(text, [rule]), expected);
}

#[test]
fn regex_rule_uses_search_semantics() {
    let digit = Regex::new("[0-9]").unwrap();
    assert_eq!(run("abc1", [Rule::regex(digit.clone())]), [StatusCode::Ok]);
    assert_eq!(run("abc", [Rule::regex(digit)]), [StatusCode::RegExFail]);
}

#[test]
fn explicit_omit_set_reports_each_member() {
    assert_eq!(
        run("a-b_c", [Rule::omit_chars(['-', '_', '-', 'z'])]),
        [
            StatusCode::InvalidChar,
            StatusCode::InvalidChar,
            StatusCode::InvalidChar
        ]
    );
}

// ============================================================================
// AGGREGATION
// ============================================================================

#[test]
fn failures_accumulate_without_ok() {
    let statuses = run("ab", [Rule::min_length(3), Rule::special_char()]);
    assert_eq!(statuses, [StatusCode::TooShort, StatusCode::NoSpecChar]);
}

#[rstest]
#[case::equal(RuleKind::Equal, Arg::from(1), StatusCode::BadEqualArgs)]
#[case::contains(RuleKind::Contains, Arg::from(1.5), StatusCode::BadContainsArgs)]
#[case::min(RuleKind::MinLength, Arg::from("3"), StatusCode::BadMinArgs)]
#[case::max(RuleKind::MaxLength, Arg::from('3'), StatusCode::BadMaxArgs)]
#[case::omit(RuleKind::OmitChar, Arg::from("-_"), StatusCode::BadCharArgs)]
#[case::regex(RuleKind::RegEx, Arg::from("[0-9]"), StatusCode::BadRegExArgs)]
#[case::func(RuleKind::Func, Arg::from(false), StatusCode::BadFuncArgs)]
fn misconfigured_rules(#[case] kind: RuleKind, #[case] arg: Arg, #[case] expected: StatusCode) {
    let mut set = RuleSet::new();
    set.add_rule(kind, [arg]).add(Rule::alpha_num());
    assert_eq!(set.validate("x").as_slice(), &[expected]);
}

#[test]
fn untyped_rules_match_typed_ones() {
    let mut typed = RuleSet::new();
    typed
        .add(Rule::min_length(4))
        .add(Rule::omit_chars(['!', '?']))
        .add(Rule::regex(Regex::new("^a").unwrap()));

    let mut untyped = RuleSet::new();
    untyped
        .add_rule(RuleKind::MinLength, [4])
        .add_rule(RuleKind::OmitChar, ['!', '?'])
        .add_rule(RuleKind::RegEx, [Regex::new("^a").unwrap()]);

    for text in ["a", "abcd", "b!?", "abc?"] {
        assert_eq!(typed.validate(text), untyped.validate(text), "{text}");
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

#[test]
fn signup_form() {
    let log = Rc::new(RefCell::new(Vec::new()));

    let mut registry = Registry::new();
    registry
        .add("username", Rule::min_length(3))
        .add("username", Rule::alpha_num())
        .add("password", Rule::min_length(8))
        .add("password", Rule::special_char())
        .add("password", Rule::omit_chars([' ']));

    let l = Rc::clone(&log);
    registry.add_feedback("password", StatusCode::NoSpecChar, true, move || {
        l.borrow_mut().push("add a symbol");
    });
    let l = Rc::clone(&log);
    registry.add_feedback("username", StatusCode::Ok, true, move || {
        l.borrow_mut().push("username ok");
    });

    let form = HashMap::from([("username", "alice"), ("password", "hunter 2")]);
    let report = registry.validate_all(&form, true).unwrap();

    assert_eq!(report[0].0, "username");
    assert_eq!(report[0].1.as_slice(), &[StatusCode::Ok]);
    assert_eq!(report[1].0, "password");
    assert_eq!(
        report[1].1.as_slice(),
        &[StatusCode::NoSpecChar, StatusCode::InvalidChar]
    );
    assert_eq!(*log.borrow(), ["username ok", "add a symbol"]);
}

#[test]
fn texts_are_read_at_evaluation_time() {
    let text = Rc::new(RefCell::new(String::from("ab")));

    let mut registry = Registry::new();
    registry.add("field", Rule::min_length(3));

    let shared = Rc::clone(&text);
    let source = from_fn(move |_: &&str| Some(shared.borrow().clone()));

    let first = registry.validate_all(&source, false).unwrap();
    assert_eq!(first[0].1.as_slice(), &[StatusCode::TooShort]);

    text.borrow_mut().push('c');
    let second = registry.validate_all(&source, false).unwrap();
    assert_eq!(second[0].1.as_slice(), &[StatusCode::Ok]);
}

#[test]
fn unavailable_target_is_an_error() {
    let mut registry = Registry::new();
    registry.add("present", Rule::alpha()).add("missing", Rule::alpha());

    let form = HashMap::from([("present", "abc")]);
    let err = registry.validate_all(&form, false).unwrap_err();
    assert_eq!(err.to_string(), "no text available for target \"missing\"");
}
