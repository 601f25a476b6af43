//! Typed settings with a plain `name = value` file format.
//!
//! Setfig stores heterogeneous configuration values (integers, booleans,
//! strings, string arrays, generic lists) under string keys, reads them back
//! through type-safe accessors, and builds the store from a simple text file
//! whose value types are inferred.
//!
//! ```
//! use setfig::SettingFileParser;
//!
//! let settings = SettingFileParser::new().parse_str(
//!     r#"
//!     # network
//!     port = 8080
//!     verbose = true
//!     hosts = [alpha, beta]
//!     greeting = "hello world"
//!     "#,
//! );
//!
//! assert_eq!(settings.get_int("port")?, 8080);
//! assert!(settings.get_bool("verbose")?);
//! assert_eq!(settings.get_strings("hosts")?, ["alpha", "beta"]);
//! assert_eq!(settings.get_string("greeting")?, "hello world");
//! # Ok::<(), setfig::SettingsError>(())
//! ```
//!
//! # File format
//!
//! One declaration per line, whitespace around `=` is insignificant:
//!
//! ```text
//! # comment
//! // also a comment
//! count = 10
//! enabled = TRUE
//! names = [a, b, c]
//! title = "quoted text"
//! motto = plain text
//! ```
//!
//! Here `count` is an integer (signed 32-bit), `enabled` a boolean (only
//! `true`/`false` are recognised), `names` a string array, `title` the string
//! `quoted text` and `motto` the string `plain text`. There are no inline
//! comments. Lines that don't contain exactly one `=`, or that have an empty
//! name or value, are silently skipped.
//!
//! # Reading values
//!
//! [`Settings`] offers strict `get_*` accessors that return a
//! [`SettingsError`], and lenient `find_*` accessors that return `None` on any
//! failure. Coercion is deliberately forgiving: `get_int` parses numeric
//! strings, `get_bool` understands `yes`/`no`/`y`/`n`/`1`/`0`/`t`/`f`, and
//! `get_string` renders anything (arrays comma-joined).
//!
//! # Building
//!
//! [`SettingsBuilder`] is the only way to populate a store. `add` validates
//! the name and rejects empty lists; replacing a key is reported to an
//! [`OverrideSink`] ([`NoopSink`] by default, [`TracingSink`] to log via
//! `tracing`). `override_from` merges another store wholesale, silently.
//!
//! # Command-line arguments
//!
//! [`to_arguments`] turns a store into `-k=value` / `--key=value` flags. With
//! the `clap` feature (default), [`SettingsFileArgs`] adds a `--settings
//! <FILE>` flag to clap derive structs.
//!
//! # Error handling
//!
//! All fallible operations return [`SettingsError`]. Enable the
//! `rich-errors` feature for `miette` diagnostics.

pub mod error;
pub mod infer;
pub mod notify;
pub mod value;

mod args;
mod builder;
#[cfg(feature = "clap")]
mod cli;
mod file;
mod parser;
mod settings;

#[cfg(test)]
mod fixtures;

pub use args::to_arguments;
pub use builder::SettingsBuilder;
#[cfg(feature = "clap")]
pub use cli::SettingsFileArgs;
pub use error::{Result, SettingsError};
pub use file::read_lines;
pub use infer::infer_value;
pub use notify::{NoopSink, OverrideSink, TracingSink};
pub use parser::SettingFileParser;
pub use settings::Settings;
pub use value::SettingValue;
