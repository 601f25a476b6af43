//! Clap adapter for setfig.
//!
//! Compiled only with the `clap` Cargo feature (on by default).
//! [`SettingsFileArgs`] adds a `--settings <FILE>` flag to any clap derive
//! struct and loads the file through [`SettingFileParser`].
//!
//! Combined with [`to_arguments`](crate::to_arguments), this lets a binary
//! accept its flags from a settings file: render the file as arguments and
//! place them before the real command line, so explicit flags win. The target
//! command needs `args_override_self = true` for the later flag to replace
//! the earlier one instead of erroring.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::parser::SettingFileParser;
use crate::settings::Settings;

/// Clap-derived args for pointing at a settings file.
///
/// ```ignore
/// #[derive(Parser)]
/// struct Cli {
///     #[command(flatten)]
///     settings: SettingsFileArgs,
/// }
/// ```
#[derive(Debug, Clone, Default, Args)]
pub struct SettingsFileArgs {
    /// Read settings from a `name = value` file.
    #[arg(short = 's', long = "settings", value_name = "FILE", global = true)]
    pub settings: Option<PathBuf>,
}

impl SettingsFileArgs {
    /// Load the file with a default parser. No `--settings` flag means empty settings.
    pub fn load(&self) -> Result<Settings> {
        self.load_with(&SettingFileParser::new())
    }

    pub fn load_with(&self, parser: &SettingFileParser) -> Result<Settings> {
        match &self.settings {
            Some(path) => parser.load(path),
            None => Ok(Settings::default()),
        }
    }

    /// The file's settings rendered as command-line arguments.
    pub fn arguments(&self) -> Result<Vec<String>> {
        crate::args::to_arguments(&self.load()?)
    }
}
