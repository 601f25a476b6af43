//! Type inference for raw values read from a settings file.
//!
//! Tries, in order: integer → boolean → bracketed list → string. The first
//! rule that matches decides the type:
//!
//! | Raw value          | Inferred                               |
//! |--------------------|----------------------------------------|
//! | `42`, `-7`         | `Integer`                              |
//! | `true`, `FALSE`    | `Boolean`                              |
//! | `[a, b, c]`        | `Strings(["a", "b", "c"])`             |
//! | `"quoted text"`    | `String("quoted text")`                |
//! | `anything else`    | `String` verbatim                      |
//!
//! Only `true`/`false` become booleans here. The looser `yes`/`no` tokens are
//! left as strings and interpreted later by
//! [`Settings::get_bool`](crate::Settings::get_bool).
//!
//! List items cannot contain commas: there is no quoting or escaping inside
//! brackets, so `["a, b"]` yields two items.

use crate::value::SettingValue;

/// Infer the typed value of an already-trimmed raw value.
pub fn infer_value(raw: &str) -> SettingValue {
    if let Ok(i) = raw.parse::<i32>() {
        return SettingValue::Integer(i);
    }
    if let Some(b) = as_bool(raw) {
        return SettingValue::Boolean(b);
    }
    if let Some(items) = as_list(raw) {
        return SettingValue::Strings(items);
    }
    SettingValue::String(unquote(raw).to_string())
}

fn as_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Split `[a, b, c]` into trimmed, non-empty items.
fn as_list(raw: &str) -> Option<Vec<String>> {
    let inner = strip_enclosing(raw, '[', ']')?;
    Some(
        inner
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

fn unquote(raw: &str) -> &str {
    strip_enclosing(raw, '"', '"').unwrap_or(raw)
}

/// Inner text of `raw` when it is wrapped in `open`…`close` with at least one
/// character between them.
fn strip_enclosing(raw: &str, open: char, close: char) -> Option<&str> {
    if raw.len() > 2 && raw.starts_with(open) && raw.ends_with(close) {
        Some(&raw[open.len_utf8()..raw.len() - close.len_utf8()])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> SettingValue {
        SettingValue::from(items)
    }

    #[test]
    fn integer_wins_first() {
        assert_eq!(infer_value("1"), SettingValue::Integer(1));
        assert_eq!(infer_value("0"), SettingValue::Integer(0));
        assert_eq!(infer_value("-42"), SettingValue::Integer(-42));
    }

    #[test]
    fn out_of_range_integer_is_string() {
        assert_eq!(infer_value("99999999999"), SettingValue::from("99999999999"));
    }

    #[test]
    fn decimal_is_string() {
        assert_eq!(infer_value("1.5"), SettingValue::from("1.5"));
    }

    #[test]
    fn booleans_case_insensitive() {
        assert_eq!(infer_value("true"), SettingValue::Boolean(true));
        assert_eq!(infer_value("TRUE"), SettingValue::Boolean(true));
        assert_eq!(infer_value("False"), SettingValue::Boolean(false));
    }

    #[test]
    fn loose_boolean_tokens_stay_strings() {
        assert_eq!(infer_value("yes"), SettingValue::from("yes"));
        assert_eq!(infer_value("t"), SettingValue::from("t"));
    }

    #[test]
    fn bracketed_value_is_list() {
        assert_eq!(infer_value("[a, b]"), strings(&["a", "b"]));
        assert_eq!(infer_value("[has,some , items ]"), strings(&["has", "some", "items"]));
    }

    #[test]
    fn list_drops_empty_items() {
        assert_eq!(infer_value("[a, , b,]"), strings(&["a", "b"]));
        assert_eq!(infer_value("[ , ]"), SettingValue::Strings(vec![]));
    }

    #[test]
    fn list_does_not_honour_quotes() {
        assert_eq!(infer_value(r#"["a, b"]"#), strings(&["\"a", "b\""]));
    }

    #[test]
    fn empty_brackets_are_a_plain_string() {
        assert_eq!(infer_value("[]"), SettingValue::from("[]"));
    }

    #[test]
    fn quoted_string_is_unquoted() {
        assert_eq!(infer_value("\"quoted\""), SettingValue::from("quoted"));
        assert_eq!(
            infer_value(r#""[very, very long "string"]  ""#),
            SettingValue::from(r#"[very, very long "string"]  "#)
        );
    }

    #[test]
    fn quoted_number_is_still_a_string() {
        assert_eq!(infer_value("\"42\""), SettingValue::from("42"));
    }

    #[test]
    fn bare_quotes_left_alone() {
        assert_eq!(infer_value("\"\""), SettingValue::from("\"\""));
        assert_eq!(infer_value("\"open"), SettingValue::from("\"open"));
    }

    #[test]
    fn plain_text_verbatim() {
        assert_eq!(infer_value("plain text"), SettingValue::from("plain text"));
    }
}
