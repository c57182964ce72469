//! Command line interface

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::validate::ValidateCommands;

#[derive(Parser, Debug)]
#[command(name = "faculty-onboarding")]
#[command(about = "Collect and validate faculty onboarding records")]
#[command(version)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Defaults to `run`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive onboarding wizard (default)
    Run,
    /// Validate a record stored as JSON
    Validate(ValidateCommands),
    /// List the wizard steps and the fields each one owns
    Steps,
}
