//! Stable exit codes for planlint CLI commands.

/// Command succeeded; plan has no errors (and no warnings when they are denied).
pub const OK: i32 = 0;
/// Lint found errors, or warnings while `deny_warnings` is set.
pub const LINT_FAILED: i32 = 1;
/// Command failed due to unreadable/invalid input, registry, config, or usage.
pub const INVALID: i32 = 2;
