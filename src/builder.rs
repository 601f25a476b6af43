use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{Result, SettingsError};
use crate::notify::{NoopSink, OverrideSink};
use crate::settings::Settings;
use crate::value::SettingValue;

/// Builder and sole mutator of a [`Settings`] store.
///
/// [`add`](Self::add) validates its input and writes straight into the
/// wrapped store. Replacing an existing key is allowed (last write wins) and
/// is reported to the configured [`OverrideSink`].
///
/// [`override_from`](Self::override_from) is the bulk path: it copies every
/// entry of another store without validation and without notifications.
///
/// ```
/// use setfig::SettingsBuilder;
///
/// let mut builder = SettingsBuilder::new();
/// builder.add("port", 8080)?.add("host", "localhost")?;
/// let settings = builder.build();
/// assert_eq!(settings.get_int("port")?, 8080);
/// # Ok::<(), setfig::SettingsError>(())
/// ```
pub struct SettingsBuilder {
    settings: Settings,
    sink: Arc<dyn OverrideSink>,
}

impl SettingsBuilder {
    pub fn new() -> Self {
        Self::from_settings(Settings::new())
    }

    /// Resume building on top of an existing store.
    pub fn from_settings(existing: Settings) -> Self {
        Self {
            settings: existing,
            sink: Arc::new(NoopSink),
        }
    }

    /// Set the sink notified when [`add`](Self::add) replaces a key.
    pub fn with_sink(self, sink: impl OverrideSink + 'static) -> Self {
        self.with_shared_sink(Arc::new(sink))
    }

    pub(crate) fn with_shared_sink(mut self, sink: Arc<dyn OverrideSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Add a value under `name`, replacing any previous value.
    ///
    /// Fails with [`SettingsError::InvalidArgument`] if `name` is blank or the
    /// value is an empty sequence. The name is stored trimmed.
    pub fn add<V: Into<SettingValue>>(&mut self, name: &str, value: V) -> Result<&mut Self> {
        let key = check_name(name)?;
        self.put(key, value.into())
    }

    /// Like [`add`](Self::add), but a missing value is rejected.
    ///
    /// The name is validated first, so a blank name with no value reports
    /// `Missing name!`.
    pub fn add_opt<V: Into<SettingValue>>(
        &mut self,
        name: &str,
        value: Option<V>,
    ) -> Result<&mut Self> {
        let key = check_name(name)?;
        let value = value.ok_or_else(|| SettingsError::InvalidArgument("Missing value!".into()))?;
        self.put(key, value.into())
    }

    /// Write a value under an already validated key.
    fn put(&mut self, key: &str, value: SettingValue) -> Result<&mut Self> {
        if value.is_empty_sequence() {
            return Err(SettingsError::InvalidArgument("Can't add empty list!".into()));
        }

        if self.settings.contains(key) {
            self.sink.overridden(key, &value);
        }
        self.settings.insert(key.to_string(), value);
        Ok(self)
    }

    /// Add a generic list, converting each item to a [`toml::Value`].
    pub fn add_list<T, I>(&mut self, name: &str, items: I) -> Result<&mut Self>
    where
        T: Serialize,
        I: IntoIterator<Item = T>,
    {
        let values = items
            .into_iter()
            .map(|item| {
                toml::Value::try_from(item).map_err(|e| {
                    SettingsError::InvalidArgument(format!("Unsupported list item: {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        self.add(name, SettingValue::List(values))
    }

    /// Copy every entry of `other` into this store, replacing existing keys.
    ///
    /// No validation and no override notifications happen on this path.
    pub fn override_from(&mut self, other: &Settings) -> &mut Self {
        for (key, value) in other {
            self.settings.insert(key.clone(), value.clone());
        }
        self
    }

    /// [`override_from`](Self::override_from) that ignores `None`.
    pub fn override_with(&mut self, other: Option<&Settings>) -> &mut Self {
        if let Some(other) = other {
            self.override_from(other);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.settings.contains(name)
    }

    pub fn get(&self, name: &str) -> Option<&SettingValue> {
        self.settings.find(name)
    }

    /// The store as built so far.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn build(self) -> Settings {
        self.settings
    }
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SettingsBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsBuilder")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

fn check_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(SettingsError::InvalidArgument("Missing name!".into()));
    }
    Ok(trimmed)
}
