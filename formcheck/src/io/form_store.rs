//! Field values stored as a flat JSON object (`form.json`).

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use crate::form::Form;

/// Load a `{ "field": "value", ... }` document into a [`Form`].
pub fn load_form(path: &Path) -> Result<Form> {
    debug!(path = %path.display(), "loading form values");
    let contents =
        fs::read_to_string(path).with_context(|| format!("read form {}", path.display()))?;
    let values: BTreeMap<String, String> = serde_json::from_str(&contents)
        .with_context(|| format!("parse form {} (expected a JSON object of strings)", path.display()))?;
    debug!(fields = values.len(), "form values loaded");
    Ok(Form::from_values(values))
}

/// Write field values as pretty JSON with a trailing newline.
pub fn write_form(path: &Path, values: &BTreeMap<String, String>) -> Result<()> {
    let mut buf = serde_json::to_string_pretty(values).context("serialize form json")?;
    buf.push('\n');
    fs::write(path, buf).with_context(|| format!("write form {}", path.display()))
}

/// Parse a `NAME=VALUE` override. The value may be empty or contain `=`.
pub fn parse_assignment(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected NAME=VALUE, got '{raw}'"))?;
    if name.trim().is_empty() {
        return Err(anyhow!("empty field name in '{raw}'"));
    }
    Ok((name.trim().to_string(), value.to_string()))
}
