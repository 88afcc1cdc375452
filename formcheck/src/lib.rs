//! Strategy-based form validation.
//!
//! Validation rules are named strategies held in a
//! [`StrategyRegistry`](core::registry::StrategyRegistry). A
//! [`Validator`](core::validator::Validator) binds checks (value accessor, rule
//! spec, message) and runs them in order, stopping at the first failure.
//!
//! - **[`core`]**: Pure logic (rules, registry, validator, bonus strategies).
//!   No I/O.
//! - **[`io`]**: Config and form-value files.
//!
//! [`form`] supplies deferred field accessors and [`check`] wires config, form,
//! and validator together for the CLI.

pub mod check;
pub mod core;
pub mod exit_codes;
pub mod form;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
