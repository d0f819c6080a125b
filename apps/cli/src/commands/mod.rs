//! Subcommand implementations.

pub mod check;
pub mod rules;

/// Every target passed.
pub const EXIT_PASSED: u8 = 0;
/// At least one target reported a status other than `OK`.
pub const EXIT_FAILED: u8 = 1;
/// Bad invocation, unreadable files or a target without text.
pub const EXIT_USAGE: u8 = 2;
