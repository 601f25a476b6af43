//! The settings store and its typed accessors.
//!
//! Accessors come in two flavours:
//!
//! - **Strict** (`get*`) return a [`Result`] and surface [`SettingsError`]
//!   immediately.
//! - **Lenient** (`find*`) swallow any error and return `None`.
//!
//! Values are coerced where it is unambiguous: an integer can be read as a
//! string, a numeric string as an integer, and `"yes"`/`"no"` style strings as
//! booleans. Anything else is a [`SettingsError::TypeMismatch`].

use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Result, SettingsError};
use crate::value::SettingValue;

const TRUTHY: [&str; 5] = ["yes", "y", "1", "true", "t"];
const FALSY: [&str; 5] = ["no", "n", "0", "false", "f"];

/// A read-only view over typed configuration values keyed by name.
///
/// Only a [`SettingsBuilder`](crate::SettingsBuilder) can add values. Keys
/// iterate in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Settings {
    values: BTreeMap<String, SettingValue>,
}

impl Settings {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, returning the value it replaced.
    pub(crate) fn insert(&mut self, key: String, value: SettingValue) -> Option<SettingValue> {
        self.values.insert(key, value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Look up a value without failing.
    pub fn find(&self, key: &str) -> Option<&SettingValue> {
        self.values.get(key)
    }

    /// Look up a value, failing with [`SettingsError::NotFound`] when absent.
    pub fn get(&self, key: &str) -> Result<&SettingValue> {
        self.find(key).ok_or_else(|| SettingsError::not_found(key))
    }

    /// Textual form of any stored value. String arrays are joined with `,`.
    pub fn get_string(&self, key: &str) -> Result<String> {
        self.get(key).map(|value| value.to_string())
    }

    /// Alias for [`get_string`](Self::get_string).
    pub fn as_string(&self, key: &str) -> Result<String> {
        self.get_string(key)
    }

    pub fn find_string(&self, key: &str) -> Option<String> {
        self.get_string(key).ok()
    }

    /// Read an integer, parsing the textual form when the value is not stored
    /// as one.
    pub fn get_int(&self, key: &str) -> Result<i32> {
        match self.get(key)? {
            SettingValue::Integer(i) => Ok(*i),
            other => {
                let text = other.to_string();
                text.parse::<i32>()
                    .map_err(|_| SettingsError::mismatch(key, "integer", text))
            }
        }
    }

    pub fn find_int(&self, key: &str) -> Option<i32> {
        self.get_int(key).ok()
    }

    /// Read a string array.
    ///
    /// Only the [`SettingValue::Strings`] variant qualifies. A missing key is
    /// reported as a type mismatch too, not as [`SettingsError::NotFound`].
    pub fn get_strings(&self, key: &str) -> Result<&[String]> {
        match self.find(key) {
            Some(SettingValue::Strings(items)) => Ok(items.as_slice()),
            Some(other) => Err(SettingsError::mismatch(key, "string array", other)),
            None => Err(SettingsError::mismatch(key, "string array", "null")),
        }
    }

    /// Read a boolean.
    ///
    /// Strings are matched trimmed and case-insensitively against
    /// `yes`/`y`/`1`/`true`/`t` and `no`/`n`/`0`/`false`/`f`.
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        match self.get(key)? {
            SettingValue::Boolean(b) => Ok(*b),
            SettingValue::String(s) => {
                parse_bool_token(s).ok_or_else(|| SettingsError::mismatch(key, "boolean", s))
            }
            other => Err(SettingsError::mismatch(key, "boolean", other)),
        }
    }

    pub fn find_bool(&self, key: &str) -> Option<bool> {
        self.get_bool(key).ok()
    }

    /// Read a generic list whose items are all of type `T`.
    ///
    /// Items are not coerced: an integer item does not satisfy `T = f64`.
    /// Fails with [`SettingsError::TypeMismatch`] if the key is missing, is not
    /// a [`SettingValue::List`], or holds an item of another type.
    pub fn get_list<T>(&self, key: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Serialize,
    {
        let expected = || format!("List<{}>", short_type_name::<T>());
        match self.find(key) {
            Some(SettingValue::List(items)) => items
                .iter()
                .map(|item| {
                    exact_item::<T>(item)
                        .ok_or_else(|| SettingsError::mismatch(key, expected(), format_list(items)))
                })
                .collect(),
            Some(other) => Err(SettingsError::mismatch(key, expected(), other)),
            None => Err(SettingsError::mismatch(key, expected(), "null")),
        }
    }

    /// Render the store as a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| SettingsError::Render {
            format: "TOML",
            reason: e.to_string(),
        })
    }

    /// Render the store as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| SettingsError::Render {
            format: "JSON",
            reason: e.to_string(),
        })
    }
}

impl<'a> IntoIterator for &'a Settings {
    type Item = (&'a String, &'a SettingValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, SettingValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

fn parse_bool_token(text: &str) -> Option<bool> {
    let token = text.trim().to_lowercase();
    if TRUTHY.contains(&token.as_str()) {
        Some(true)
    } else if FALSY.contains(&token.as_str()) {
        Some(false)
    } else {
        None
    }
}

fn format_list(items: &[toml::Value]) -> String {
    SettingValue::List(items.to_vec()).to_string()
}

/// Convert `item` to `T` only if `T` maps back to the same kind of TOML value.
fn exact_item<T>(item: &toml::Value) -> Option<T>
where
    T: DeserializeOwned + Serialize,
{
    let converted: T = item.clone().try_into().ok()?;
    let round_trip = toml::Value::try_from(&converted).ok()?;
    (std::mem::discriminant(&round_trip) == std::mem::discriminant(item)).then_some(converted)
}

/// `type_name` with module paths removed: `alloc::vec::Vec<alloc::string::String>`
/// becomes `Vec<String>`.
fn short_type_name<T>() -> String {
    let full = std::any::type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    let mut chars = full.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            segment.clear();
        } else if c.is_alphanumeric() || c == '_' {
            segment.push(c);
        } else {
            out.push_str(&segment);
            segment.clear();
            out.push(c);
        }
    }
    out.push_str(&segment);
    out
}
