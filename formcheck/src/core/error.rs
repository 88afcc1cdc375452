//! Wiring errors raised by rules and the validator.
//!
//! A failing check is not an error: it is reported as `Some(message)` from
//! [`Validator::start`](crate::core::validator::Validator::start). The variants
//! here describe mistakes in how checks were set up.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// Rule name not present in the registry at evaluation time.
    #[error("unknown rule '{0}'")]
    UnknownRule(String),

    /// Rule needs a parameter the rule spec did not supply.
    #[error("rule '{rule}' requires parameter #{index}")]
    MissingParam { rule: String, index: usize },

    /// Parameter present but not parseable by the rule.
    #[error("rule '{rule}' got invalid parameter '{param}': {reason}")]
    InvalidParam {
        rule: String,
        param: String,
        reason: String,
    },
}
