//! Stable exit codes for formcheck CLI commands.

/// Command succeeded; for `check`, every check passed.
pub const OK: i32 = 0;
/// Command failed: bad config, unknown rule, bad rule parameter, or I/O error.
pub const INVALID: i32 = 1;
/// `formcheck check` rejected the form (a check failed).
pub const REJECTED: i32 = 2;
