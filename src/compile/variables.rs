//! `{{variable}}` references in compiled documentation.

use crate::yaml::{field, scalar_to_string};
use regex::{Captures, Regex};
use serde_yaml::Value;
use std::sync::LazyLock;

static CONFIG_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("Invalid config variable regex"));

/// Distinct `{{name}}` references, in order of first occurrence.
pub fn extract_config_variables(markdown: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in CONFIG_VAR.captures_iter(markdown) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// The value a variable would be substituted with at install time: the
/// field's `result`, else its `default`. `None` if neither is present.
pub fn resolve_variable(config: &Value, name: &str) -> Option<String> {
    let entry = field(config, name)?;
    field(entry, "result")
        .or_else(|| field(entry, "default"))
        .map(scalar_to_string)
}

/// Replace every resolvable `{{name}}` with its configured value. Unknown
/// references are left untouched.
pub fn substitute_config_variables(markdown: &str, config: &Value) -> String {
    CONFIG_VAR
        .replace_all(markdown, |caps: &Captures| {
            resolve_variable(config, &caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
