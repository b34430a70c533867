//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use confirmable::output::OutputMode;

/// confirmable - confirm record attributes stored as JSON files
#[derive(Parser, Debug)]
#[command(
    name = "confirmable",
    version,
    about = "Confirm record attributes stored as JSON files",
    long_about = "Inspect and change confirmed-at / confirmed-by fields on JSON records.\n\n\
                  Attributes and their field suffix come from .confirmable.toml in the\n\
                  working directory, ~/.config/confirmable/config.toml, or --config."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file to use instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show confirmation status of a record
    Status {
        /// Record file (JSON object)
        record: PathBuf,

        /// Only show this attribute
        attribute: Option<String>,
    },

    /// Confirm an attribute (keeps an existing confirmation)
    Confirm {
        /// Record file (JSON object)
        record: PathBuf,

        /// Attribute name
        attribute: String,

        /// Checkbox value: "1", "0", or a date/time to confirm at
        #[arg(long, default_value = "1")]
        value: String,

        /// Confirming user id (falls back to the configured id when omitted)
        #[arg(short, long)]
        user: Option<i64>,
    },

    /// Clear an attribute's confirmation
    Unconfirm {
        /// Record file (JSON object)
        record: PathBuf,

        /// Attribute name
        attribute: String,
    },

    /// Assign the confirming user and persist it immediately
    SetConfirmer {
        /// Record file (JSON object)
        record: PathBuf,

        /// Attribute name
        attribute: String,

        /// JSON value: an integer user id; anything else clears the confirmer
        value: String,
    },

    /// List backing fields and aliases of the configured attributes
    Fields,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config = cli.config.as_deref();

    match cli.command {
        Some(Command::Status { record, attribute }) => {
            commands::status(&record, attribute.as_deref(), config, output_mode)
        },
        Some(Command::Confirm {
            record,
            attribute,
            value,
            user,
        }) => commands::confirm(&record, &attribute, &value, user, config, output_mode),
        Some(Command::Unconfirm { record, attribute }) => {
            commands::unconfirm(&record, &attribute, config, output_mode)
        },
        Some(Command::SetConfirmer {
            record,
            attribute,
            value,
        }) => commands::set_confirmer(&record, &attribute, &value, config, output_mode),
        Some(Command::Fields) => commands::fields(config, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("confirmable v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            println!("confirmable v{}", env!("CARGO_PKG_VERSION"));
            println!("\nRun 'confirmable --help' for usage");
            Ok(())
        },
    }
}
