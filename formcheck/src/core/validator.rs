//! Ordered, short-circuiting validator.
//!
//! Checks are registered with [`Validator::add`] and run by
//! [`Validator::start`] in registration order. The first failing check's
//! message is returned; nothing after it is evaluated.

use std::fmt;

use tracing::{debug, warn};

use crate::core::error::CheckError;
use crate::core::registry::StrategyRegistry;
use crate::core::rule_spec::RuleSpec;

/// Reads the value to check at evaluation time.
pub type ValueAccessor<'a> = Box<dyn Fn() -> String + 'a>;

/// One registered check, waiting for `start()`.
struct Check<'a> {
    accessor: ValueAccessor<'a>,
    spec: RuleSpec,
    error_msg: String,
}

impl Check<'_> {
    fn run(&self, registry: &StrategyRegistry) -> Result<Option<String>, CheckError> {
        let rule = registry.get(&self.spec.name)?;
        let value = (self.accessor)();
        rule(&value, &self.spec.params, &self.error_msg)
    }
}

/// A sequence of checks bound to a [`StrategyRegistry`].
pub struct Validator<'a> {
    registry: &'a StrategyRegistry,
    checks: Vec<Check<'a>>,
}

impl<'a> Validator<'a> {
    pub fn new(registry: &'a StrategyRegistry) -> Self {
        Self {
            registry,
            checks: Vec::new(),
        }
    }

    /// Register a check.
    ///
    /// `rule` is `name` or `name:param...`. The rule is not resolved here:
    /// an unknown name surfaces from [`start`](Self::start).
    pub fn add<F>(&mut self, accessor: F, rule: &str, error_msg: impl Into<String>)
    where
        F: Fn() -> String + 'a,
    {
        self.checks.push(Check {
            accessor: Box::new(accessor),
            spec: RuleSpec::parse(rule),
            error_msg: error_msg.into(),
        });
    }

    /// Run every check in order.
    ///
    /// Returns `Ok(Some(msg))` for the first failure, `Ok(None)` if all pass.
    /// A rule that reports an empty message counts as a pass.
    pub fn start(&self) -> Result<Option<String>, CheckError> {
        for (index, check) in self.checks.iter().enumerate() {
            let rule = check.spec.name.as_str();
            match check.run(self.registry)? {
                Some(msg) if !msg.is_empty() => {
                    debug!(index, rule, remaining = self.checks.len() - index - 1, "check failed; stopping");
                    return Ok(Some(msg));
                }
                Some(_) => {
                    warn!(index, rule, "check failed with empty message; treated as pass");
                }
                None => debug!(index, rule, "check passed"),
            }
        }
        debug!(checks = self.checks.len(), "all checks passed");
        Ok(None)
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl fmt::Debug for Validator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let specs: Vec<&RuleSpec> = self.checks.iter().map(|check| &check.spec).collect();
        f.debug_struct("Validator").field("checks", &specs).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{counting_rule, registration_form, registration_validator};
    use std::cell::{Cell, RefCell};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn empty_validator_passes() {
        let registry = StrategyRegistry::builtin();
        let validator = Validator::new(&registry);
        assert!(validator.is_empty());
        assert_eq!(validator.start(), Ok(None));
    }

    /// Username is checked first, so its message wins over the password's.
    #[test]
    fn registration_reports_empty_username_first() {
        let registry = StrategyRegistry::builtin();
        let form = registration_form("", "abc", "13800000000");
        let validator = registration_validator(&registry, &form);
        assert_eq!(validator.start(), Ok(Some("empty".to_string())));
    }

    #[test]
    fn registration_reports_short_password() {
        let registry = StrategyRegistry::builtin();
        let form = registration_form("bob", "abc", "13800000000");
        let validator = registration_validator(&registry, &form);
        assert_eq!(validator.start(), Ok(Some("short".to_string())));
    }

    #[test]
    fn registration_reports_bad_phone() {
        let registry = StrategyRegistry::builtin();
        let form = registration_form("bob", "abcdef", "138");
        let validator = registration_validator(&registry, &form);
        assert_eq!(validator.start(), Ok(Some("badphone".to_string())));
    }

    #[test]
    fn registration_passes_with_valid_input() {
        let registry = StrategyRegistry::builtin();
        let form = registration_form("bob", "abcdef", "13800000000");
        let validator = registration_validator(&registry, &form);
        assert_eq!(validator.len(), 3);
        assert_eq!(validator.start(), Ok(None));
    }

    /// Checks after the first failure read no value and run no rule.
    #[test]
    fn start_short_circuits_on_first_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut registry = StrategyRegistry::builtin();
        registry.register("counted", counting_rule(Arc::clone(&calls)));

        let reads = Cell::new(0);
        let read = |value: &'static str| {
            let reads = &reads;
            move || {
                reads.set(reads.get() + 1);
                value.to_string()
            }
        };

        let mut validator = Validator::new(&registry);
        validator.add(read("ok"), "counted", "first");
        validator.add(read(""), "isNonEmpty", "second");
        validator.add(read("ok"), "counted", "third");
        validator.add(read(""), "isNonEmpty", "fourth");

        assert_eq!(validator.start(), Ok(Some("second".to_string())));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(reads.get(), 2);
    }

    #[test]
    fn unknown_rule_fails_at_start_not_add() {
        let registry = StrategyRegistry::builtin();
        let mut validator = Validator::new(&registry);
        validator.add(|| "x".to_string(), "isEmail", "bad email");
        assert_eq!(validator.len(), 1);
        assert_eq!(
            validator.start(),
            Err(CheckError::UnknownRule("isEmail".to_string()))
        );
    }

    /// A failure before the unknown rule is reported; the unknown rule is never reached.
    #[test]
    fn unknown_rule_after_failure_is_not_reached() {
        let registry = StrategyRegistry::builtin();
        let mut validator = Validator::new(&registry);
        validator.add(String::new, "isNonEmpty", "empty");
        validator.add(|| "x".to_string(), "isEmail", "bad email");
        assert_eq!(validator.start(), Ok(Some("empty".to_string())));
    }

    #[test]
    fn accessor_reads_value_at_start_time() {
        let registry = StrategyRegistry::builtin();
        let value = RefCell::new(String::new());
        let mut validator = Validator::new(&registry);
        validator.add(|| value.borrow().clone(), "isNonEmpty", "empty");

        assert_eq!(validator.start(), Ok(Some("empty".to_string())));
        *value.borrow_mut() = "filled".to_string();
        assert_eq!(validator.start(), Ok(None));
    }

    #[test]
    fn rule_params_are_passed_through() {
        let registry = StrategyRegistry::builtin();
        let mut validator = Validator::new(&registry);
        validator.add(|| "abcdefghi".to_string(), "minLength:10", "need 10");
        assert_eq!(validator.start(), Ok(Some("need 10".to_string())));
    }

    #[test]
    fn bad_param_surfaces_as_error() {
        let registry = StrategyRegistry::builtin();
        let mut validator = Validator::new(&registry);
        validator.add(|| "abc".to_string(), "minLength", "short");
        assert_eq!(
            validator.start(),
            Err(CheckError::MissingParam {
                rule: "minLength".to_string(),
                index: 0,
            })
        );
    }

    #[test]
    fn empty_message_counts_as_pass() {
        let registry = StrategyRegistry::builtin();
        let mut validator = Validator::new(&registry);
        validator.add(String::new, "isNonEmpty", "");
        validator.add(|| "ab".to_string(), "minLength:3", "short");
        assert_eq!(validator.start(), Ok(Some("short".to_string())));
    }
}
