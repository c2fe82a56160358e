use camino::Utf8PathBuf;
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use timber::Level;

use crate::{
    Context, Result,
    command::{self, SynmetrixOutput},
};

#[derive(Debug, Parser)]
#[command(
    name = "synmetrix",
    version,
    about = "
Synmetrix - command line tools for the Synmetrix API

Every option can also be set through the SYNMETRIX_* environment variable
named in its help, or in a .env file in the working directory.

    $ synmetrix whoami --base-url https://app.synmetrix.org --access-token <JWT>
    $ synmetrix upload-data-models --datasource-id <ID> --branch-id <ID> --data-models-path ./models
"
)]
pub struct Synmetrix {
    #[command(subcommand)]
    pub command: Command,

    /// Specify the log level (error, warn, info, debug or trace)
    #[arg(long = "log", short = 'l', global = true, env = "SYNMETRIX_LOG")]
    pub log_level: Option<Level>,

    /// Also write logs to this file
    #[arg(long = "log-file", global = true, env = "SYNMETRIX_LOG_FILE")]
    pub log_file: Option<Utf8PathBuf>,

    /// How to print the result
    #[arg(long, global = true, value_enum, default_value_t = FormatType::Plain)]
    pub format: FormatType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatType {
    Plain,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Upload cube data models (YAML) as a new version of a branch
    UploadDataModels(command::UploadDataModels),

    /// Show who an access token belongs to
    Whoami(command::Whoami),

    /// Access token commands
    Token(command::Token),
}

impl Synmetrix {
    /// The console log level; uploads report progress at `info` unless told otherwise
    pub fn log_level(&self) -> Option<Level> {
        self.log_level.or(match self.command {
            Command::UploadDataModels(_) => Some(Level::INFO),
            _ => None,
        })
    }

    /// The log file; every upload keeps a timestamped log under `logs/` unless told otherwise
    pub fn log_file(&self) -> Option<Utf8PathBuf> {
        self.log_file.clone().or_else(|| match self.command {
            Command::UploadDataModels(_) => {
                Some(command::upload_data_models::default_log_file(Local::now().naive_local()))
            }
            _ => None,
        })
    }

    pub async fn run(&self) -> Result<SynmetrixOutput> {
        match &self.command {
            Command::UploadDataModels(command) => command.run().await,
            Command::Whoami(command) => command.run().await,
            Command::Token(command) => command.run().await,
        }
    }
}

/// Loads the `.env` file of the working directory or one of its parents, if there is one
pub fn load_env_file() -> Result<()> {
    allow_missing_env_file(dotenvy::dotenv())
}

fn allow_missing_env_file<T>(loaded: dotenvy::Result<T>) -> Result<()> {
    match loaded {
        Err(err) if err.not_found() => Ok(()),
        loaded => loaded.map(|_| ()).context("could not load the .env file"),
    }
}
