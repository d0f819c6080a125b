//! List rules command implementation.

use std::fmt::Write as _;

use sentinel_validator::RuleKind;

/// Renders the rule kind table.
pub fn render() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<14} {:<48} {:<14} Bad arguments", "Kind", "Arguments", "Failure");
    let _ = writeln!(out, "{}", "-".repeat(92));

    for kind in RuleKind::ALL {
        let bad_args = kind
            .bad_args_status()
            .map_or_else(|| "-".to_string(), |status| status.to_string());
        let _ = writeln!(
            out,
            "{:<14} {:<48} {:<14} {}",
            kind.as_str(),
            kind.arity().describe(),
            kind.failure_status().as_str(),
            bad_args
        );
    }
    out
}

/// Runs the rules command.
pub fn run() {
    print!("{}", render());
}
