//! YAML loading and required-field checks.
//!
//! This is the leaf utility every validator builds on. Loading never panics
//! and never writes to the source file; callers fold a [`CheckError`] into
//! their report as a single error line and move on to the next file.
//!
//! # Presence
//!
//! A key counts as present unless it is absent, `null`, `false`, `0`, or the
//! empty string. Empty sequences and mappings are present; checks that care
//! about emptiness test it separately.

use crate::error::CheckError;
use crate::report::ValidationReport;
use serde::de::DeserializeOwned;
use serde_yaml::Value;
use std::path::Path;

/// Read and parse a YAML file.
///
/// `context` names the file in error messages (usually its display name, such
/// as `finance-analyst.agent.yaml` or `data-room-audit/workflow.yaml`).
pub fn load_yaml(path: &Path, context: &str) -> Result<Value, CheckError> {
    let content = std::fs::read_to_string(path).map_err(|source| CheckError::Read {
        context: context.to_string(),
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded yaml");

    parse_yaml(&content, context)
}

/// Parse YAML text.
pub fn parse_yaml(content: &str, context: &str) -> Result<Value, CheckError> {
    serde_yaml::from_str(content).map_err(|source| CheckError::Parse {
        context: context.to_string(),
        source,
    })
}

/// Convert a parsed value into a typed record.
pub fn into_record<T: DeserializeOwned>(value: Value, context: &str) -> Result<T, CheckError> {
    serde_yaml::from_value(value).map_err(|e| CheckError::Shape {
        context: context.to_string(),
        message: e.to_string(),
    })
}

/// Whether a value counts as present.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(_) | Value::Mapping(_) => true,
        Value::Tagged(tagged) => is_present(&tagged.value),
    }
}

/// Look up a top-level key, treating non-present values as absent.
pub fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| is_present(v))
}

/// Look up a top-level key as a string.
pub fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    field(value, key).and_then(Value::as_str)
}

/// The required keys that are not present. Non-mappings miss every key.
pub fn missing_fields<'f>(value: &Value, fields: &[&'f str]) -> Vec<&'f str> {
    fields
        .iter()
        .copied()
        .filter(|f| field(value, f).is_none())
        .collect()
}

/// Record one error per missing required key.
///
/// Error lines read `"<context>: Missing required field '<field>'"`.
/// Returns `true` when every field is present.
pub fn check_required(
    value: &Value,
    fields: &[&str],
    context: &str,
    report: &mut ValidationReport,
) -> bool {
    let missing = missing_fields(value, fields);
    for f in &missing {
        report.error(format!("{}: Missing required field '{}'", context, f));
    }
    missing.is_empty()
}

/// Render a scalar the way it reads in the YAML source: strings verbatim,
/// numbers and booleans in their plain form. Collections fall back to
/// compact YAML.
pub fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => serde_yaml::to_string(value)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Render a value on one line for Markdown output. `null` is empty and a
/// sequence reads as its items joined with `, `.
pub fn inline_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Sequence(items) => items
            .iter()
            .map(inline_text)
            .filter(|item| !item.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Tagged(tagged) => inline_text(&tagged.value),
        other => scalar_to_string(other),
    }
}

/// Bullet items for a list-like value: one per sequence entry, a single item
/// for a lone scalar, none for `null`. Empty entries are dropped.
pub fn text_items(value: &Value) -> Vec<String> {
    match value {
        Value::Sequence(items) => items
            .iter()
            .map(inline_text)
            .filter(|item| !item.is_empty())
            .collect(),
        Value::Tagged(tagged) => text_items(&tagged.value),
        other => Some(inline_text(other))
            .filter(|item| !item.is_empty())
            .into_iter()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn yaml(src: &str) -> Value {
        serde_yaml::from_str(src).unwrap()
    }

    #[test]
    fn presence_follows_yaml_truthiness() {
        let doc = yaml(
            r#"
text: hello
empty_text: ""
zero: 0
number: 3
disabled: false
enabled: true
nothing: null
list: []
map: {}
"#,
        );
        assert!(field(&doc, "text").is_some());
        assert!(field(&doc, "empty_text").is_none());
        assert!(field(&doc, "zero").is_none());
        assert!(field(&doc, "number").is_some());
        assert!(field(&doc, "disabled").is_none());
        assert!(field(&doc, "enabled").is_some());
        assert!(field(&doc, "nothing").is_none());
        assert!(field(&doc, "list").is_some());
        assert!(field(&doc, "map").is_some());
        assert!(field(&doc, "absent").is_none());
    }

    #[test]
    fn missing_field_yields_exactly_one_error_with_context_and_name() {
        let doc = yaml("name: Finance Analyst\nrole: Valuation\n");
        let mut report = ValidationReport::new();

        let ok = check_required(
            &doc,
            &["name", "role", "code"],
            "finance-analyst.agent.yaml",
            &mut report,
        );

        assert!(!ok);
        assert_eq!(
            report.errors,
            vec!["finance-analyst.agent.yaml: Missing required field 'code'"]
        );
    }

    #[test]
    fn complete_record_yields_no_errors() {
        let doc = yaml("name: x\ncode: y\ndescription: z\n");
        let mut report = ValidationReport::new();

        assert!(check_required(
            &doc,
            &["name", "code", "description"],
            "wf",
            &mut report
        ));
        assert!(report.errors.is_empty());
    }

    #[test]
    fn non_mapping_misses_every_field() {
        let doc = yaml("- just\n- a list\n");
        assert_eq!(missing_fields(&doc, &["name", "code"]), vec!["name", "code"]);
    }

    #[test]
    fn load_reports_parse_failure_with_context() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.yaml");
        std::fs::write(&path, "name: [unterminated\n").unwrap();

        let err = load_yaml(&path, "broken.yaml").unwrap_err();
        assert!(matches!(err, CheckError::Parse { .. }));
        assert!(err.to_string().starts_with("broken.yaml parse error: "));
    }

    #[test]
    fn load_reports_unreadable_file_with_context() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.yaml");

        let err = load_yaml(&path, "missing.yaml").unwrap_err();
        assert!(matches!(err, CheckError::Read { .. }));
        assert!(err.to_string().starts_with("missing.yaml: failed to read"));
    }

    #[test]
    fn load_does_not_touch_the_source() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ok.yaml");
        let source = "# comment kept\nname: Vault\n";
        std::fs::write(&path, source).unwrap();

        let value = load_yaml(&path, "ok.yaml").unwrap();

        assert_eq!(str_field(&value, "name"), Some("Vault"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), source);
    }

    #[test]
    fn scalars_render_plainly() {
        assert_eq!(scalar_to_string(&yaml("true")), "true");
        assert_eq!(scalar_to_string(&yaml("42")), "42");
        assert_eq!(scalar_to_string(&yaml("strict")), "strict");
    }

    #[test]
    fn inline_text_flattens_lists() {
        assert_eq!(inline_text(&yaml("~")), "");
        assert_eq!(inline_text(&yaml("12.5")), "12.5");
        assert_eq!(
            inline_text(&yaml("[Financial statements, Management accounts]")),
            "Financial statements, Management accounts"
        );
    }

    #[test]
    fn text_items_accepts_lists_and_lone_scalars() {
        assert_eq!(text_items(&yaml("[Valuation, '', 3]")), vec!["Valuation", "3"]);
        assert_eq!(text_items(&yaml("Valuation")), vec!["Valuation"]);
        assert!(text_items(&yaml("[]")).is_empty());
        assert!(text_items(&yaml("~")).is_empty());
    }
}
