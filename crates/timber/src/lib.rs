#![deny(missing_docs)]

//! Defines the output format of traces and events produced by the
//! `synmetrix` binary and the libraries it links.

mod formatter;

use std::{fs, fs::File, io, path::Path};

pub use tracing_core::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// possible log levels
pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Initializes a global tracing subscriber that formats
/// all logs produced by an application that calls init,
/// and all logs produced by libraries consumed by that application.
///
/// Nothing reaches the terminal unless `level` is given. When `log_file` is
/// given, the file is created (with its parent directories) and records at
/// least `INFO`.
pub fn init(level: Option<Level>, log_file: Option<&Path>) -> io::Result<()> {
    let file = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            Some(File::create(path)?)
        }
        None => None,
    };
    if level.is_none() && file.is_none() {
        return Ok(());
    }

    tracing_subscriber::registry()
        .with(level.map(formatter::console))
        .with(file.map(|file| formatter::file(file, file_level(level))))
        .try_init()
        .map_err(io::Error::other)
}

fn file_level(level: Option<Level>) -> Level {
    level.map_or(Level::INFO, |level| level.max(Level::INFO))
}
