pub mod cli;
pub mod command;
mod options;

pub use anyhow::{Context, Result, anyhow};
