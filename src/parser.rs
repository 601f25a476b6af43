//! Line-oriented `name = value` settings parser.
//!
//! Each line is handled independently:
//!
//! 1. Surrounding whitespace is trimmed; blank lines are skipped.
//! 2. Lines starting with `#` or `//` are comments.
//! 3. The line must contain exactly one `=`. Both sides are trimmed and must
//!    be non-empty.
//! 4. The value type is inferred (see [`infer`](crate::infer)) and added to a
//!    [`SettingsBuilder`].
//!
//! Malformed lines are dropped, never reported as errors: a settings file with
//! a typo still yields every well-formed setting. Drops are logged at `DEBUG`.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::args;
use crate::builder::SettingsBuilder;
use crate::error::Result;
use crate::file;
use crate::infer::infer_value;
use crate::notify::OverrideSink;
use crate::settings::Settings;

/// Parses settings files into [`Settings`].
///
/// ```
/// use setfig::SettingFileParser;
///
/// let settings = SettingFileParser::new().parse_str("port = 8080\n# comment\nname = demo");
/// assert_eq!(settings.get_int("port")?, 8080);
/// assert_eq!(settings.get_string("name")?, "demo");
/// # Ok::<(), setfig::SettingsError>(())
/// ```
#[derive(Clone, Default)]
pub struct SettingFileParser {
    sink: Option<Arc<dyn OverrideSink>>,
}

impl SettingFileParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notify `sink` when a later line redefines an earlier key.
    pub fn on_override(mut self, sink: impl OverrideSink + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Load a settings file.
    ///
    /// Fails with [`SettingsError::FileNotFound`](crate::SettingsError::FileNotFound)
    /// if `path` does not exist, or [`SettingsError::Io`](crate::SettingsError::Io)
    /// if it cannot be read. The content itself never causes an error.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Settings> {
        let lines = file::read_lines(path.as_ref())?;
        Ok(self.parse_lines(lines))
    }

    /// Like [`load`](Self::load), but any failure yields empty settings.
    pub fn load_or_empty(&self, path: impl AsRef<Path>) -> Settings {
        let path = path.as_ref();
        self.load(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), "Ignoring settings file: {e}");
            Settings::new()
        })
    }

    /// Load a settings file and render it as command-line arguments.
    ///
    /// See [`to_arguments`](crate::to_arguments) for the format.
    pub fn arguments(&self, path: impl AsRef<Path>) -> Result<Vec<String>> {
        let settings = self.load(path)?;
        args::to_arguments(&settings)
    }

    pub fn parse_str(&self, text: &str) -> Settings {
        self.parse_lines(text.lines())
    }

    /// Parse already-read lines. An empty sequence gives empty settings.
    pub fn parse_lines<I, S>(&self, lines: I) -> Settings
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = SettingsBuilder::new();
        if let Some(sink) = &self.sink {
            builder = builder.with_shared_sink(Arc::clone(sink));
        }

        for line in lines {
            parse_line(&mut builder, line.as_ref());
        }
        builder.build()
    }
}

impl fmt::Debug for SettingFileParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingFileParser")
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}

fn parse_line(builder: &mut SettingsBuilder, line: &str) {
    let line = line.trim();
    if line.is_empty() || is_comment(line) {
        return;
    }

    let Some((name, value)) = split_pair(line) else {
        tracing::debug!(line, "Skipping line without a single '='");
        return;
    };

    let (name, value) = (name.trim(), value.trim());
    if name.is_empty() || value.is_empty() {
        tracing::debug!(line, "Skipping line with empty name or value");
        return;
    }

    if let Err(e) = builder.add(name, infer_value(value)) {
        tracing::debug!(line, "Skipping setting: {e}");
    }
}

fn is_comment(line: &str) -> bool {
    line.starts_with('#') || line.starts_with("//")
}

/// Split `name=value`, rejecting lines with zero or several `=`.
fn split_pair(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split('=');
    let name = parts.next()?;
    let value = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((name, value))
}
