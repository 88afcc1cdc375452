//! Test-only helpers for building forms, validators, and instrumented rules.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core::error::CheckError;
use crate::core::registry::StrategyRegistry;
use crate::core::validator::Validator;
use crate::form::Form;

/// Sign-up form with the three fields used across tests.
pub fn registration_form(user_name: &str, password: &str, phone_number: &str) -> Form {
    let form = Form::new();
    form.set("userName", user_name);
    form.set("password", password);
    form.set("phoneNumber", phone_number);
    form
}

/// `isNonEmpty(userName)`, `minLength:6(password)`, `isMobile(phoneNumber)`
/// with the short messages `empty`, `short`, `badphone`.
pub fn registration_validator<'a>(registry: &'a StrategyRegistry, form: &'a Form) -> Validator<'a> {
    let mut validator = Validator::new(registry);
    validator.add(form.field("userName"), "isNonEmpty", "empty");
    validator.add(form.field("password"), "minLength:6", "short");
    validator.add(form.field("phoneNumber"), "isMobile", "badphone");
    validator
}

/// Rule that always passes and bumps `calls` each time it runs.
pub fn counting_rule(
    calls: Arc<AtomicUsize>,
) -> impl Fn(&str, &[String], &str) -> Result<Option<String>, CheckError> + Send + Sync + 'static {
    move |_value: &str, _params: &[String], _error_msg: &str| {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(None)
    }
}
