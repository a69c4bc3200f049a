//! Filters available to templates.
//!
//! `to_rst` and `to_md` convert Ansible markup. The remaining filters mirror
//! the Ansible core data filters that role templates commonly rely on.

use minijinja::value::{Value, ValueKind};
use minijinja::{Environment, Error, ErrorKind};
use regex::Regex;
use serde::Serialize;

use crate::markup;

/// Names of all registered filters, for help output.
pub const FILTER_NAMES: [&str; 8] = [
    "to_rst",
    "to_md",
    "bool",
    "to_json",
    "to_nice_json",
    "to_yaml",
    "to_nice_yaml",
    "regex_replace",
];

/// Register all filters on `env`.
pub fn register(env: &mut Environment<'_>) {
    env.add_filter("to_rst", to_rst);
    env.add_filter("to_md", to_md);
    // Replaces the engine's truthiness filter with Ansible's YAML 1.1 rules.
    env.add_filter("bool", ansible_bool);
    env.add_filter("to_json", to_json);
    env.add_filter("to_nice_json", to_nice_json);
    // serde_yaml only emits block style, so both names produce the same text.
    env.add_filter("to_yaml", to_yaml);
    env.add_filter("to_nice_yaml", to_yaml);
    env.add_filter("regex_replace", regex_replace);
}

pub fn to_rst(value: Value) -> Result<String, Error> {
    convert_markup(&value, "to_rst", markup::to_rst)
}

pub fn to_md(value: Value) -> Result<String, Error> {
    convert_markup(&value, "to_md", markup::to_md)
}

/// Ansible descriptions are either a string or a list of paragraphs.
fn convert_markup(value: &Value, filter: &str, convert: fn(&str) -> String) -> Result<String, Error> {
    if let Some(text) = value.as_str() {
        return Ok(convert(text));
    }

    match value.kind() {
        ValueKind::None => Ok(String::new()),
        ValueKind::Seq => {
            let mut paragraphs = Vec::new();
            for item in value.try_iter()? {
                let text = item.as_str().ok_or_else(|| {
                    Error::new(
                        ErrorKind::InvalidOperation,
                        format!("{} expects a list of strings, found a {} item", filter, item.kind()),
                    )
                })?;
                paragraphs.push(convert(text));
            }
            Ok(paragraphs.join("\n\n"))
        }
        kind => Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("{} expects a string or a list of strings, found {}", filter, kind),
        )),
    }
}

/// Ansible's `bool` filter. Spec files are YAML 1.1 for Ansible, so plain
/// `yes`, `no`, `on` and `off` load as strings here but mean booleans.
pub fn ansible_bool(value: Value) -> bool {
    if let Some(text) = value.as_str() {
        return matches!(
            text.trim().to_ascii_lowercase().as_str(),
            "yes" | "on" | "1" | "true"
        );
    }

    match value.kind() {
        ValueKind::Bool => value.is_true(),
        ValueKind::Number => value.as_i64() == Some(1) || f64::try_from(value).ok() == Some(1.0),
        _ => false,
    }
}

pub fn to_json(value: Value) -> Result<String, Error> {
    serde_json::to_string(&value).map_err(|e| serialization_error("JSON", e))
}

/// Pretty JSON with the four-space indent Ansible uses.
pub fn to_nice_json(value: Value) -> Result<String, Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| serialization_error("JSON", e))?;
    String::from_utf8(buf).map_err(|e| serialization_error("JSON", e))
}

pub fn to_yaml(value: Value) -> Result<String, Error> {
    serde_yaml::to_string(&value).map_err(|e| serialization_error("YAML", e))
}

/// Replace all matches of `pattern`. Python style back-references (`\1`) in
/// `replacement` are accepted alongside the regex crate's `${1}`.
pub fn regex_replace(value: &str, pattern: &str, replacement: Option<&str>) -> Result<String, Error> {
    let regex = Regex::new(pattern).map_err(|e| {
        Error::new(
            ErrorKind::InvalidOperation,
            format!("invalid regular expression {:?}", pattern),
        )
        .with_source(e)
    })?;
    let replacement = translate_backrefs(replacement.unwrap_or(""));
    Ok(regex.replace_all(value, replacement.as_str()).into_owned())
}

fn translate_backrefs(replacement: &str) -> String {
    let mut out = String::with_capacity(replacement.len());
    let mut chars = replacement.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' if chars.peek().is_some_and(|c| c.is_ascii_digit()) => {
                out.push_str("${");
                while let Some(digit) = chars.next_if(|c| c.is_ascii_digit()) {
                    out.push(digit);
                }
                out.push('}');
            }
            '\\' if chars.peek() == Some(&'\\') => {
                chars.next();
                out.push('\\');
            }
            '$' => out.push_str("$$"),
            other => out.push(other),
        }
    }
    out
}

fn serialization_error<E>(format: &str, err: E) -> Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    Error::new(
        ErrorKind::InvalidOperation,
        format!("cannot serialize value to {}", format),
    )
    .with_source(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rst_accepts_paragraph_list() {
        let value = Value::from(vec!["First C(a).", "Second."]);
        assert_eq!(to_rst(value).unwrap(), "First ``a``.\n\nSecond.");
    }

    #[test]
    fn test_to_md_none_is_empty() {
        assert_eq!(to_md(Value::from(())).unwrap(), "");
    }

    #[test]
    fn test_markup_rejects_numbers() {
        let err = to_md(Value::from(42)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    }

    #[test]
    fn test_ansible_bool() {
        for truthy in ["yes", "Yes", "on", "true", "True", "1"] {
            assert!(ansible_bool(Value::from(truthy)), "{}", truthy);
        }
        for falsy in ["no", "off", "false", "0", "", "maybe"] {
            assert!(!ansible_bool(Value::from(falsy)), "{}", falsy);
        }
        assert!(ansible_bool(Value::from(true)));
        assert!(!ansible_bool(Value::from(false)));
        assert!(ansible_bool(Value::from(1)));
        assert!(!ansible_bool(Value::from(2)));
        assert!(!ansible_bool(Value::from(())));
    }

    #[test]
    fn test_to_json() {
        let value = Value::from_serialize(serde_json::json!({"port": 80, "tls": true}));
        assert_eq!(to_json(value).unwrap(), r#"{"port":80,"tls":true}"#);
    }

    #[test]
    fn test_to_nice_json_indent() {
        let value = Value::from_serialize(serde_json::json!({"a": [1]}));
        assert_eq!(to_nice_json(value).unwrap(), "{\n    \"a\": [\n        1\n    ]\n}");
    }

    #[test]
    fn test_to_yaml() {
        let value = Value::from_serialize(serde_json::json!({"name": "web"}));
        assert_eq!(to_yaml(value).unwrap(), "name: web\n");
    }

    #[test]
    fn test_regex_replace_backrefs() {
        let out = regex_replace("role_web_server", r"^role_(\w+)$", Some(r"\1 ($)")).unwrap();
        assert_eq!(out, "web_server ($)");
    }

    #[test]
    fn test_regex_replace_invalid_pattern() {
        assert!(regex_replace("x", "(", None).is_err());
    }
}
