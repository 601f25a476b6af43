use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SettingsError>;

#[derive(Debug, Error)]
#[cfg_attr(feature = "rich-errors", derive(miette::Diagnostic))]
pub enum SettingsError {
    #[error("Setting: '{key}', not found!")]
    NotFound { key: String },

    #[error("Setting: '{key}', can't be converted to {expected}: '{value}'!")]
    TypeMismatch {
        key: String,
        expected: String,
        value: String,
    },

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Settings file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to render settings as {format}: {reason}")]
    Render {
        format: &'static str,
        reason: String,
    },
}

impl SettingsError {
    pub(crate) fn not_found(key: &str) -> Self {
        SettingsError::NotFound { key: key.into() }
    }

    /// Absent keys are reported with the value `null`.
    pub(crate) fn mismatch(key: &str, expected: impl Into<String>, value: impl ToString) -> Self {
        SettingsError::TypeMismatch {
            key: key.into(),
            expected: expected.into(),
            value: value.to_string(),
        }
    }
}
