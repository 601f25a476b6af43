//! # setfig demo application
//!
//! A small CLI that loads a `name = value` settings file and shows what setfig
//! makes of it. Exists to demonstrate and manually verify the crate.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example setfig_demo -- --settings demo.settings list
//! cargo run --example setfig_demo -- --settings demo.settings get port --as int
//! cargo run --example setfig_demo -- --settings demo.settings args
//! cargo run --example setfig_demo -- --settings demo.settings dump --format json
//! RUST_LOG=info cargo run --example setfig_demo -- --settings demo.settings list
//! ```
//!
//! Redefining a key later in the file logs an `Overriding setting` event when
//! `RUST_LOG` enables `info`.

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use setfig::{
    SettingFileParser, SettingValue, Settings, SettingsError, SettingsFileArgs, TracingSink,
    to_arguments,
};

/// setfig demo: inspect a settings file.
#[derive(Parser, Debug)]
#[command(name = "setfig-demo")]
struct Cli {
    #[command(flatten)]
    settings: SettingsFileArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every setting with its inferred type.
    List,
    /// Print one setting, optionally coerced.
    Get {
        key: String,
        /// Accessor to read the value with.
        #[arg(long = "as", value_enum, default_value_t = Accessor::String)]
        accessor: Accessor,
    },
    /// Print the settings as command-line flags.
    Args,
    /// Print the settings as a TOML or JSON document.
    Dump {
        #[arg(long, value_enum, default_value_t = Format::Toml)]
        format: Format,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Accessor {
    String,
    Int,
    Bool,
    Strings,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Toml,
    Json,
}

fn describe(value: &SettingValue) -> String {
    match value {
        SettingValue::Strings(items) => format!("{} [{} items]", value.kind(), items.len()),
        SettingValue::List(items) => format!("{} [{} items]", value.kind(), items.len()),
        other => other.kind().to_string(),
    }
}

fn list(settings: &Settings) {
    let width = settings.keys().map(str::len).max().unwrap_or(0);
    for (key, value) in settings.iter() {
        println!("{key:<width$}  {value}  ({})", describe(value));
    }
}

fn get(settings: &Settings, key: &str, accessor: Accessor) -> Result<String, SettingsError> {
    Ok(match accessor {
        Accessor::String => settings.get_string(key)?,
        Accessor::Int => settings.get_int(key)?.to_string(),
        Accessor::Bool => settings.get_bool(key)?.to_string(),
        Accessor::Strings => settings.get_strings(key)?.join("\n"),
    })
}

fn run(cli: Cli) -> Result<(), SettingsError> {
    let parser = SettingFileParser::new().on_override(TracingSink);
    let settings = cli.settings.load_with(&parser)?;

    match cli.command {
        Commands::List => list(&settings),
        Commands::Get { key, accessor } => println!("{}", get(&settings, &key, accessor)?),
        Commands::Args => {
            for arg in to_arguments(&settings)? {
                println!("{arg}");
            }
        }
        Commands::Dump { format } => match format {
            Format::Toml => print!("{}", settings.to_toml_string()?),
            Format::Json => println!("{}", settings.to_json_string()?),
        },
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
