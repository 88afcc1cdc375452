//! Check list configuration (`formcheck.toml`).

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ordered checks plus optional extra regex rules (TOML).
///
/// ```toml
/// [patterns]
/// isZipCode = "^[0-9]{6}$"
///
/// [[checks]]
/// field = "userName"
/// rule = "isNonEmpty"
/// message = "user name must not be empty"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FormConfig {
    /// Extra rules by name: the value must match the regex.
    pub patterns: BTreeMap<String, String>,

    /// Checks in evaluation order.
    pub checks: Vec<CheckConfig>,
}

/// One `[[checks]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckConfig {
    /// Form field whose value is checked.
    pub field: String,
    /// Rule spec: `name` or `name:param...`.
    pub rule: String,
    /// Message reported when the check fails.
    pub message: String,
}

impl CheckConfig {
    pub fn new(field: &str, rule: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            rule: rule.to_string(),
            message: message.to_string(),
        }
    }
}

impl FormConfig {
    /// Structural checks only. Rule names are resolved when checks run.
    pub fn validate(&self) -> Result<()> {
        for (name, pattern) in &self.patterns {
            if name.trim().is_empty() {
                return Err(anyhow!("patterns: rule name must not be empty"));
            }
            if name.contains(':') {
                return Err(anyhow!("patterns.{name}: rule name must not contain ':'"));
            }
            Regex::new(pattern).with_context(|| format!("patterns.{name}: invalid regex"))?;
        }
        for (index, check) in self.checks.iter().enumerate() {
            if check.field.trim().is_empty() {
                return Err(anyhow!("checks[{index}]: field must not be empty"));
            }
            if check.rule.trim().is_empty() {
                return Err(anyhow!("checks[{index}]: rule must not be empty"));
            }
            if check.message.is_empty() {
                return Err(anyhow!("checks[{index}]: message must not be empty"));
            }
        }
        Ok(())
    }
}

/// Load and validate config from a TOML file.
pub fn load_config(path: &Path) -> Result<FormConfig> {
    debug!(path = %path.display(), "loading config");
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FormConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(checks = cfg.checks.len(), patterns = cfg.patterns.len(), "config loaded");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &FormConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
