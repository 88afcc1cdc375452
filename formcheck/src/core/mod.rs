//! Deterministic, pure logic: rules, the strategy registry, and the validator.
//!
//! Core modules must be free of I/O side effects. Values to validate arrive
//! through caller-supplied accessors.

pub mod bonus;
pub mod error;
pub mod registry;
pub mod rule_spec;
pub mod rules;
pub mod validator;
