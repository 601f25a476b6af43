//! Reading settings files from disk.
//!
//! This is the only place that touches the filesystem. A missing file is
//! reported as [`SettingsError::FileNotFound`] so callers can tell it apart
//! from other I/O failures (permissions, directories, invalid UTF-8).

use std::path::Path;

use crate::error::{Result, SettingsError};

/// Read `path` and split it into lines. Both `\n` and `\r\n` endings are accepted.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content.lines().map(str::to_string).collect()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(SettingsError::FileNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(SettingsError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::write_settings_file;
    use tempfile::TempDir;

    #[test]
    fn reads_lines_in_order() {
        let (_dir, path) = write_settings_file("a = 1\n\n# note\nb = 2\n");
        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["a = 1", "", "# note", "b = 2"]);
    }

    #[test]
    fn crlf_endings_stripped() {
        let (_dir, path) = write_settings_file("a = 1\r\nb = 2\r\n");
        assert_eq!(read_lines(&path).unwrap(), vec!["a = 1", "b = 2"]);
    }

    #[test]
    fn empty_file_has_no_lines() {
        let (_dir, path) = write_settings_file("");
        assert!(read_lines(&path).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.file");
        let err = read_lines(&path).unwrap_err();
        assert!(matches!(err, SettingsError::FileNotFound { path: p } if p == path));
    }

    #[test]
    fn directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_lines(dir.path()).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }
}
