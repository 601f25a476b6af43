//! Observability hook for overwritten settings.
//!
//! [`SettingsBuilder::add`](crate::SettingsBuilder::add) reports every key it
//! overwrites to an [`OverrideSink`]. The default sink discards the event;
//! [`TracingSink`] forwards it to `tracing` at `INFO` level. Any
//! `Fn(&str, &SettingValue)` closure is a sink too.

use crate::value::SettingValue;

/// Receives a notification each time an existing setting is replaced.
pub trait OverrideSink: Send + Sync {
    fn overridden(&self, key: &str, value: &SettingValue);
}

impl<F> OverrideSink for F
where
    F: Fn(&str, &SettingValue) + Send + Sync,
{
    fn overridden(&self, key: &str, value: &SettingValue) {
        self(key, value)
    }
}

/// Discards all notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl OverrideSink for NoopSink {
    fn overridden(&self, _key: &str, _value: &SettingValue) {}
}

/// Emits an `INFO` event per overwritten setting.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl OverrideSink for TracingSink {
    fn overridden(&self, key: &str, value: &SettingValue) {
        tracing::info!(key, value = %value, "Overriding setting");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[test]
    fn closures_are_sinks() {
        let seen = Mutex::new(Vec::new());
        let sink = |key: &str, value: &SettingValue| {
            seen.lock().unwrap().push(format!("{key}={value}"));
        };
        sink.overridden("port", &SettingValue::Integer(80));
        assert_eq!(*seen.lock().unwrap(), vec!["port=80".to_string()]);
    }

    #[test]
    fn noop_sink_accepts_events() {
        NoopSink.overridden("a", &SettingValue::Boolean(true));
    }

    /// Shared in-memory writer for capturing formatted `tracing` output.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn tracing_sink_emits_info_event_with_key_and_value() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            TracingSink.overridden("port", &SettingValue::Integer(8080));
        });

        let output = captured.contents();
        assert!(output.contains("INFO"), "output: {output}");
        assert!(output.contains("Overriding setting"), "output: {output}");
        assert!(output.contains(r#"key="port""#), "output: {output}");
        assert!(output.contains("value=8080"), "output: {output}");
    }

    #[test]
    fn tracing_sink_is_silent_below_info() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::WARN)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            TracingSink.overridden("port", &SettingValue::Integer(8080));
        });

        assert!(captured.contents().is_empty());
    }
}
