//! Render settings as command-line flags.

use crate::error::Result;
use crate::settings::Settings;

/// Render each setting as `-k=value` (one-character keys) or `--key=value`.
///
/// Values use [`Settings::get_string`], so string arrays become
/// comma-joined. Arguments follow the store's sorted key order.
pub fn to_arguments(settings: &Settings) -> Result<Vec<String>> {
    settings
        .keys()
        .map(|key| {
            let prefix = if key.chars().count() > 1 { "--" } else { "-" };
            Ok(format!("{prefix}{key}={}", settings.get_string(key)?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::SettingsBuilder;

    #[test]
    fn short_and_long_prefixes() {
        let mut builder = SettingsBuilder::new();
        builder.add("v", true).unwrap().add("port", 8080).unwrap();
        let args = to_arguments(&builder.build()).unwrap();
        assert_eq!(args, vec!["--port=8080", "-v=true"]);
    }

    #[test]
    fn multibyte_single_char_key_is_short() {
        let mut builder = SettingsBuilder::new();
        builder.add("é", 1).unwrap();
        assert_eq!(to_arguments(&builder.build()).unwrap(), vec!["-é=1"]);
    }

    #[test]
    fn arrays_are_comma_joined() {
        let mut builder = SettingsBuilder::new();
        builder.add("tags", vec!["a", "b"]).unwrap();
        assert_eq!(
            to_arguments(&builder.build()).unwrap(),
            vec!["--tags=a,b"]
        );
    }

    #[test]
    fn empty_settings_give_no_arguments() {
        let settings = SettingsBuilder::new().build();
        assert!(to_arguments(&settings).unwrap().is_empty());
    }
}
