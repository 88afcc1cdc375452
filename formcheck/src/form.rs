//! In-memory form with deferred field accessors.
//!
//! A [`Form`] stands in for the submitting page: it holds named string fields
//! and hands out closures that read a field's value when they are called.
//! Edits made after a check is registered are seen by that check.

use std::cell::RefCell;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    fields: RefCell<BTreeMap<String, String>>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: BTreeMap<String, String>) -> Self {
        Self {
            fields: RefCell::new(values),
        }
    }

    /// Set or replace a field value.
    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.borrow_mut().insert(name.into(), value.into());
    }

    /// Current value of `name`; a missing field reads as `""`.
    pub fn get(&self, name: &str) -> String {
        self.fields.borrow().get(name).cloned().unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.borrow().contains_key(name)
    }

    /// Accessor for `name`, evaluated on each call.
    pub fn field<'a>(&'a self, name: &str) -> impl Fn() -> String + use<'a> {
        let name = name.to_string();
        move || self.get(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_reads_empty() {
        let form = Form::new();
        assert_eq!(form.get("userName"), "");
        assert!(!form.contains("userName"));
    }

    #[test]
    fn accessor_sees_later_edits() {
        let form = Form::new();
        form.set("userName", "alice");
        let user = form.field("userName");
        assert_eq!(user(), "alice");
        form.set("userName", "bob");
        assert_eq!(user(), "bob");
    }

    #[test]
    fn from_values_keeps_fields() {
        let values = BTreeMap::from([("phoneNumber".to_string(), "13800000000".to_string())]);
        let form = Form::from_values(values);
        assert_eq!(form.get("phoneNumber"), "13800000000");
    }
}
