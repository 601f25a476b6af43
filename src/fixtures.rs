#[cfg(test)]
pub mod test {
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use tempfile::TempDir;

    use crate::notify::OverrideSink;
    use crate::value::SettingValue;

    /// Settings file exercising every inference rule.
    pub const SAMPLE_FILE: &str = r#"a = 1
boolean = true
test = value
string = "[very, very long "string"]  "
normalString = some string this is
list = [has, some, items]
"#;

    /// Sink that remembers every override event, shareable across clones.
    #[derive(Clone, Default)]
    pub struct RecordingSink {
        events: Arc<Mutex<Vec<(String, SettingValue)>>>,
    }

    impl RecordingSink {
        pub fn events(&self) -> Vec<(String, SettingValue)> {
            self.events.lock().unwrap().clone()
        }
    }

    impl OverrideSink for RecordingSink {
        fn overridden(&self, key: &str, value: &SettingValue) {
            self.events
                .lock()
                .unwrap()
                .push((key.to_string(), value.clone()));
        }
    }

    /// Write `content` to `settings.file` in a fresh temp dir.
    ///
    /// The `TempDir` must be kept alive for as long as the path is used.
    pub fn write_settings_file(content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.file");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }
}
