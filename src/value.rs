//! The typed value stored under each settings key.

use std::fmt;

use serde::Serialize;

/// One typed setting value.
///
/// `Strings` and `List` are never empty when they come out of a
/// [`SettingsBuilder`](crate::SettingsBuilder). `List` holds arbitrary typed
/// items and is only produced programmatically; the file parser emits
/// `Strings` for bracketed values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Integer(i32),
    Boolean(bool),
    String(String),
    Strings(Vec<String>),
    List(Vec<toml::Value>),
}

impl SettingValue {
    /// Short human-readable name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            SettingValue::Integer(_) => "integer",
            SettingValue::Boolean(_) => "boolean",
            SettingValue::String(_) => "string",
            SettingValue::Strings(_) => "string array",
            SettingValue::List(_) => "list",
        }
    }

    pub(crate) fn is_empty_sequence(&self) -> bool {
        match self {
            SettingValue::Strings(items) => items.is_empty(),
            SettingValue::List(items) => items.is_empty(),
            SettingValue::Integer(_) | SettingValue::Boolean(_) | SettingValue::String(_) => false,
        }
    }
}

/// Textual form: scalars print plainly, sequences are joined with `,`.
impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Integer(i) => write!(f, "{i}"),
            SettingValue::Boolean(b) => write!(f, "{b}"),
            SettingValue::String(s) => f.write_str(s),
            SettingValue::Strings(items) => f.write_str(&items.join(",")),
            SettingValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    f.write_str(&format_item(item))?;
                }
                Ok(())
            }
        }
    }
}

/// Format a list item. Strings are unquoted, everything else uses its TOML literal form.
fn format_item(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

impl From<i32> for SettingValue {
    fn from(value: i32) -> Self {
        SettingValue::Integer(value)
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Boolean(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::String(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::String(value)
    }
}

impl From<Vec<String>> for SettingValue {
    fn from(value: Vec<String>) -> Self {
        SettingValue::Strings(value)
    }
}

impl From<Vec<&str>> for SettingValue {
    fn from(value: Vec<&str>) -> Self {
        SettingValue::Strings(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for SettingValue {
    fn from(value: &[&str]) -> Self {
        SettingValue::Strings(value.iter().map(|s| s.to_string()).collect())
    }
}

impl From<Vec<toml::Value>> for SettingValue {
    fn from(value: Vec<toml::Value>) -> Self {
        SettingValue::List(value)
    }
}
