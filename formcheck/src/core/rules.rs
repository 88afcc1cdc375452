//! Built-in rule strategies.
//!
//! Every rule has the same shape: `(value, params, error_msg)`. It returns
//! `Ok(None)` when the value passes and `Ok(Some(error_msg))` when it fails.
//! `Err` is reserved for bad parameters.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::error::CheckError;

pub const IS_NON_EMPTY: &str = "isNonEmpty";
pub const MIN_LENGTH: &str = "minLength";
pub const IS_MOBILE: &str = "isMobile";

/// `1`, then one of `3`/`5`/`8`, then nine digits (11 digits total).
static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^1[358][0-9]{9}$").expect("mobile pattern compiles"));

/// Fails iff `value` is the empty string.
pub fn is_non_empty(
    value: &str,
    _params: &[String],
    error_msg: &str,
) -> Result<Option<String>, CheckError> {
    Ok(fail_if(value.is_empty(), error_msg))
}

/// Fails iff `value` has fewer characters than `params[0]`.
pub fn min_length(
    value: &str,
    params: &[String],
    error_msg: &str,
) -> Result<Option<String>, CheckError> {
    let raw = required_param(MIN_LENGTH, params, 0)?;
    let length = raw.trim().parse::<usize>().map_err(|err| {
        CheckError::InvalidParam {
            rule: MIN_LENGTH.to_string(),
            param: raw.to_string(),
            reason: err.to_string(),
        }
    })?;
    Ok(fail_if(value.chars().count() < length, error_msg))
}

/// Fails iff `value` is not an 11-digit mobile number starting `13`, `15`, or `18`.
pub fn is_mobile(
    value: &str,
    _params: &[String],
    error_msg: &str,
) -> Result<Option<String>, CheckError> {
    Ok(fail_if(!MOBILE_RE.is_match(value), error_msg))
}

/// Fails iff `value` does not match `pattern`.
pub fn matches_pattern(pattern: &Regex, value: &str, error_msg: &str) -> Option<String> {
    fail_if(!pattern.is_match(value), error_msg)
}

fn required_param<'a>(rule: &str, params: &'a [String], index: usize) -> Result<&'a str, CheckError> {
    params
        .get(index)
        .map(String::as_str)
        .ok_or_else(|| CheckError::MissingParam {
            rule: rule.to_string(),
            index,
        })
}

fn fail_if(failed: bool, error_msg: &str) -> Option<String> {
    failed.then(|| error_msg.to_string())
}
