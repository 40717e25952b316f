//! Install configuration (`_module-installer/install-config.yaml`).
//!
//! The validator reads this file as a raw YAML tree so it can report every
//! missing field instead of stopping at the first deserialization error. The
//! typed pieces here are the ones several components share.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fmt;

use crate::yaml::{field, str_field};

/// Identity keys required at the top level.
pub const IDENTITY_FIELDS: &[&str] = &["module_name", "module_code", "module_version"];

/// Keys every interactive configuration field must carry.
pub const FIELD_KEYS: &[&str] = &["prompt", "default", "result"];

/// Key holding the option list of a choice field.
pub const SINGLE_SELECT: &str = "single-select";

/// Interactive configuration fields, in validation order.
pub const CONFIG_FIELDS: &[&str] = &[
    "data_room_path",
    "output_location",
    "knowledge_base_path",
    "template_preference",
    "inconsistency_sensitivity",
];

/// Fields whose value is picked from a `single-select` list.
pub const CHOICE_FIELDS: &[&str] = &["template_preference", "inconsistency_sensitivity"];

/// How aggressively document inconsistencies are flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sensitivity {
    /// Flag only material contradictions.
    Relaxed,
    /// Flag contradictions and suspicious gaps (default).
    #[default]
    Standard,
    /// Flag every discrepancy.
    Strict,
}

impl Sensitivity {
    pub const ALL: [Sensitivity; 3] = [
        Sensitivity::Relaxed,
        Sensitivity::Standard,
        Sensitivity::Strict,
    ];

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "relaxed" => Some(Self::Relaxed),
            "standard" => Some(Self::Standard),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sensitivity::Relaxed => "relaxed",
            Sensitivity::Standard => "standard",
            Sensitivity::Strict => "strict",
        }
    }
}

impl fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `value` of every option in a field's `single-select` list, in order.
///
/// Returns `None` when the field has no `single-select` sequence. Options
/// without a string `value` are skipped.
pub fn select_values(config_field: &Value) -> Option<Vec<&str>> {
    let options = field(config_field, SINGLE_SELECT)?.as_sequence()?;
    Some(
        options
            .iter()
            .filter_map(|opt| str_field(opt, "value"))
            .collect(),
    )
}

/// The `code` of every entry in the `agents` or `workflows` list.
///
/// Returns `None` when the key is absent or not a sequence.
pub fn entry_codes<'a>(config: &'a Value, key: &str) -> Option<Vec<&'a str>> {
    let entries = config.get(key)?.as_sequence()?;
    Some(entries.iter().filter_map(|e| str_field(e, "code")).collect())
}

/// 1-based positions of `agents` or `workflows` entries that carry no
/// string `code`. Empty when the key is absent or not a sequence.
pub fn uncoded_entries(config: &Value, key: &str) -> Vec<usize> {
    config
        .get(key)
        .and_then(Value::as_sequence)
        .map(|entries| {
            entries
                .iter()
                .enumerate()
                .filter(|(_, e)| str_field(e, "code").is_none())
                .map(|(i, _)| i + 1)
                .collect()
        })
        .unwrap_or_default()
}
