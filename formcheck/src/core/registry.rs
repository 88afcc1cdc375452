//! Strategy registry: rule name -> rule function.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::core::error::CheckError;
use crate::core::rules;

/// A rule strategy: `(value, params, error_msg) -> Ok(Some(error_msg))` on failure.
pub type Rule =
    Arc<dyn Fn(&str, &[String], &str) -> Result<Option<String>, CheckError> + Send + Sync>;

/// Named rule strategies consulted by [`Validator`](crate::core::validator::Validator).
///
/// The registry is an ordinary value: build it once, then lend it to any
/// number of validators. Names are kept sorted so listings are stable.
#[derive(Clone)]
pub struct StrategyRegistry {
    rules: BTreeMap<String, Rule>,
}

impl StrategyRegistry {
    /// Registry with no rules.
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Registry preloaded with `isNonEmpty`, `minLength`, and `isMobile`.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(rules::IS_NON_EMPTY, rules::is_non_empty);
        registry.register(rules::MIN_LENGTH, rules::min_length);
        registry.register(rules::IS_MOBILE, rules::is_mobile);
        registry
    }

    /// Add a rule, replacing any existing rule with the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, rule: F)
    where
        F: Fn(&str, &[String], &str) -> Result<Option<String>, CheckError> + Send + Sync + 'static,
    {
        self.rules.insert(name.into(), Arc::new(rule));
    }

    /// Register a rule that fails when the value does not match `pattern`.
    pub fn register_pattern(
        &mut self,
        name: impl Into<String>,
        pattern: &str,
    ) -> Result<(), regex::Error> {
        let re = Regex::new(pattern)?;
        self.register(name, move |value: &str, _params: &[String], error_msg: &str| {
            Ok(rules::matches_pattern(&re, value, error_msg))
        });
        Ok(())
    }

    /// Look up a rule by name.
    pub fn get(&self, name: &str) -> Result<&Rule, CheckError> {
        self.rules
            .get(name)
            .ok_or_else(|| CheckError::UnknownRule(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("rules", &self.rules.keys().collect::<Vec<_>>())
            .finish()
    }
}
