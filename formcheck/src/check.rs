//! Orchestration for `formcheck check`: config + form values -> outcome.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::registry::StrategyRegistry;
use crate::core::validator::Validator;
use crate::form::Form;
use crate::io::config::{FormConfig, load_config};
use crate::io::form_store::{load_form, parse_assignment};

/// Whether a submission may proceed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every check passed.
    Accepted,
    /// A check failed; `message` is the first failing check's message.
    Rejected { message: String },
}

impl SubmitOutcome {
    /// `true` when the submission should go ahead.
    pub fn proceeds(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl From<Option<String>> for SubmitOutcome {
    fn from(result: Option<String>) -> Self {
        match result {
            Some(message) => Self::Rejected { message },
            None => Self::Accepted,
        }
    }
}

/// Built-in rules plus the config's `[patterns]`.
pub fn build_registry(config: &FormConfig) -> Result<StrategyRegistry> {
    let mut registry = StrategyRegistry::builtin();
    for (name, pattern) in &config.patterns {
        registry
            .register_pattern(name.as_str(), pattern)
            .with_context(|| format!("register pattern rule '{name}'"))?;
        debug!(rule = %name, "pattern rule registered");
    }
    Ok(registry)
}

/// Register each configured check against the form field it names.
pub fn build_validator<'a>(
    registry: &'a StrategyRegistry,
    config: &FormConfig,
    form: &'a Form,
) -> Validator<'a> {
    let mut validator = Validator::new(registry);
    for check in &config.checks {
        validator.add(form.field(&check.field), &check.rule, check.message.as_str());
    }
    validator
}

/// Run the configured checks against an in-memory form.
pub fn run_checks(config: &FormConfig, form: &Form) -> Result<SubmitOutcome> {
    let registry = build_registry(config)?;
    let validator = build_validator(&registry, config, form);
    let result = validator.start().context("run checks")?;
    Ok(SubmitOutcome::from(result))
}

/// Load config and form values from disk, apply `NAME=VALUE` overrides, and run.
pub fn check_files(config_path: &Path, form_path: &Path, overrides: &[String]) -> Result<SubmitOutcome> {
    let config = load_config(config_path).context("load config")?;
    let form = if form_path.exists() {
        load_form(form_path).context("load form values")?
    } else {
        debug!(path = %form_path.display(), "form file missing; starting empty");
        Form::new()
    };
    for raw in overrides {
        let (name, value) = parse_assignment(raw)?;
        form.set(name, value);
    }

    let outcome = run_checks(&config, &form)?;
    info!(checks = config.checks.len(), accepted = outcome.proceeds(), "checks finished");
    Ok(outcome)
}
