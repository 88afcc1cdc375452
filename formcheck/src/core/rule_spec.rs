//! Parsing of `name` / `name:param1:param2` rule specs.

/// A rule name plus its positional string parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    pub name: String,
    pub params: Vec<String>,
}

impl RuleSpec {
    /// Split on `:`. The first segment is the rule name, the rest are params.
    ///
    /// Parsing never fails; whether the name exists and the params make
    /// sense is decided when the check runs.
    pub fn parse(spec: &str) -> Self {
        let mut parts = spec.split(':');
        let name = parts.next().unwrap_or_default().to_string();
        let params = parts.map(str::to_string).collect();
        Self { name, params }
    }
}
