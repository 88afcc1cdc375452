//! Bootstrap sample `formcheck.toml` and `form.json` files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use tracing::info;

use super::config::{CheckConfig, FormConfig, write_config};
use super::form_store::write_form;

pub const CONFIG_FILE: &str = "formcheck.toml";
pub const FORM_FILE: &str = "form.json";

/// Canonical file locations for a project root.
#[derive(Debug, Clone)]
pub struct FormPaths {
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub form_path: PathBuf,
}

impl FormPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            config_path: root.join(CONFIG_FILE),
            form_path: root.join(FORM_FILE),
            root,
        }
    }
}

/// Options for `init_samples`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite existing files.
    pub force: bool,
}

/// Write the sample registration form config and values into `root`.
///
/// Fails if either file exists unless `options.force` is set.
pub fn init_samples(root: &Path, options: &InitOptions) -> Result<FormPaths> {
    let paths = FormPaths::new(root);
    for path in [&paths.config_path, &paths.form_path] {
        if path.exists() && !options.force {
            return Err(anyhow!(
                "formcheck init: {} already exists (use --force to overwrite)",
                path.display()
            ));
        }
    }

    write_config(&paths.config_path, &registration_config())?;
    write_form(&paths.form_path, &registration_values())?;
    info!(root = %root.display(), "sample files written");
    Ok(paths)
}

/// Three checks on a sign-up form: user name, password, phone number.
pub fn registration_config() -> FormConfig {
    FormConfig {
        patterns: BTreeMap::new(),
        checks: vec![
            CheckConfig::new("userName", "isNonEmpty", "user name must not be empty"),
            CheckConfig::new(
                "password",
                "minLength:6",
                "password must be at least 6 characters",
            ),
            CheckConfig::new("phoneNumber", "isMobile", "phone number format is invalid"),
        ],
    }
}

fn registration_values() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("userName".to_string(), String::new()),
        ("password".to_string(), String::new()),
        ("phoneNumber".to_string(), String::new()),
    ])
}
